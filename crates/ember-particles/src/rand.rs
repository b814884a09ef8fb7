//! Lightweight xorshift32 PRNG with shape-sampling helpers

use ember_core::Vec3;

pub struct ParticleRng {
    state: u32,
}

impl ParticleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns an integer in [0, n)
    pub fn index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_u32() as usize) % n
    }

    /// Returns an angle in [0, 2π)
    pub fn angle(&mut self) -> f32 {
        self.range(0.0, std::f32::consts::TAU)
    }

    /// Returns a random unit direction vector (uniformly on sphere surface)
    pub fn unit_sphere(&mut self) -> Vec3 {
        // Marsaglia method for uniform sphere sampling
        loop {
            let x = self.range(-1.0, 1.0);
            let y = self.range(-1.0, 1.0);
            let s = x * x + y * y;
            if s < 1.0 {
                let factor = 2.0 * (1.0 - s).sqrt();
                return Vec3::new(x * factor, y * factor, 1.0 - 2.0 * s);
            }
        }
    }

    /// Returns a random point inside the unit ball
    pub fn inside_unit_sphere(&mut self) -> Vec3 {
        self.unit_sphere() * self.next_f32().powf(1.0 / 3.0)
    }

    /// Returns a random point on the unit circle in the XZ plane
    pub fn unit_circle_xz(&mut self) -> Vec3 {
        let a = self.angle();
        Vec3::new(a.cos(), 0.0, a.sin())
    }

    /// Small symmetric jitter vector with each component in [-amount, amount)
    pub fn jitter(&mut self, amount: f32) -> Vec3 {
        Vec3::new(
            self.range(-amount, amount),
            self.range(-amount, amount),
            self.range(-amount, amount),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = ParticleRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!(v >= 0.0 && v < 10.0);
        }
    }

    #[test]
    fn rng_direction_unit_length() {
        let mut rng = ParticleRng::new(123);
        for _ in 0..100 {
            let d = rng.unit_sphere();
            assert!((d.length() - 1.0).abs() < 0.01);
        }
    }

    #[test]
    fn rng_inside_sphere_bounded() {
        let mut rng = ParticleRng::new(7);
        for _ in 0..100 {
            assert!(rng.inside_unit_sphere().length() <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn rng_zero_seed_still_advances() {
        let mut rng = ParticleRng::new(0);
        let a = rng.next_f32();
        let b = rng.next_f32();
        assert_ne!(a, b);
    }
}
