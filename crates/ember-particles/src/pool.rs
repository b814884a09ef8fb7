//! FIFO-recycling particle pool
//!
//! All particles live in a fixed slab; indices circulate between an
//! insertion-ordered `active` queue and a `free` list. Acquire never
//! allocates past capacity: when free is empty the oldest active slot is
//! evicted and reinitialized. Every slot is in exactly one of the two lists.

use crate::behavior::BehaviorKind;
use crate::particle::{Particle, ParticleView, SpawnOptions};
use crate::rand::ParticleRng;
use ember_core::{EmberError, Result, Vec3};
use ember_physics::{integrator_for, IntegratorKind};
use std::collections::VecDeque;

const DRAG_EPSILON: f32 = 1e-6;
const FIREFLY_JITTER: f32 = 0.06;
const WILLOW_DROOP: f32 = 0.045;
const GHOST_LIFT: f32 = 0.012;
const GALAXY_ORBIT_RATE: f32 = 1.6;

/// Injected spawn seam, so explosion logic never holds a concrete pool
pub trait Spawner {
    /// Acquire and initialize one particle, returning its slot index
    fn spawn(&mut self, opts: &SpawnOptions, rng: &mut ParticleRng) -> usize;
}

/// Capacity-bounded, FIFO-recycling pool of particles
pub struct ParticlePool {
    slots: Vec<Particle>,
    /// Live slot indices in insertion order (front = oldest)
    active: VecDeque<usize>,
    free: Vec<usize>,
    integrator: IntegratorKind,
    /// Base downward acceleration, scaled per particle by its gravity factor
    base_gravity: f32,
    /// Upper bound on any particle's trail buffer
    max_trail: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            debug_assert!(false, "particle pool constructed with zero capacity");
            return Err(EmberError::ZeroCapacityPool);
        }
        let slots = vec![Particle::dead(); capacity];
        Ok(Self {
            free: (0..capacity).rev().collect(),
            active: VecDeque::with_capacity(capacity),
            slots,
            integrator: IntegratorKind::Euler,
            base_gravity: 9.8,
            max_trail: 8,
        })
    }

    pub fn with_integrator(mut self, kind: IntegratorKind) -> Self {
        self.integrator = kind;
        self
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.base_gravity = gravity;
    }

    pub fn set_trail_length(&mut self, len: usize) {
        self.max_trail = len;
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Acquire a slot: pop free, or FIFO-evict the oldest active
    pub fn acquire(&mut self, opts: &SpawnOptions, rng: &mut ParticleRng) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => idx,
            // Capacity overflow is not an error: recycle the oldest live slot
            None => self
                .active
                .pop_front()
                .expect("non-zero capacity pool has either free or active slots"),
        };
        self.slots[idx].init(opts, rng.angle());
        self.active.push_back(idx);
        debug_assert!(self.active.len() <= self.slots.len());
        debug_assert_eq!(self.active.len() + self.free.len(), self.slots.len());
        idx
    }

    /// Advance every active particle, recycling the dead
    pub fn update(&mut self, dt: f32) {
        // Clamp so a frame hitch can't blow up the force model
        let dt = dt.clamp(0.0, 1.0 / 30.0);
        if dt <= 0.0 {
            return;
        }
        let dtn = dt * 60.0;
        let integrator = integrator_for(self.integrator);

        for &idx in &self.active {
            let p = &mut self.slots[idx];

            // Behavior-specific velocity rule
            match p.behavior {
                BehaviorKind::Willow => {
                    p.velocity.y -= WILLOW_DROOP * dtn;
                }
                BehaviorKind::Firefly => {
                    let t = p.life * 20.0 + p.phase;
                    p.velocity.x += t.sin() * FIREFLY_JITTER * dtn;
                    p.velocity.z += (t * 1.3).cos() * FIREFLY_JITTER * dtn;
                }
                BehaviorKind::Ghost => {
                    p.velocity.y += GHOST_LIFT * dtn;
                }
                BehaviorKind::Galaxy => {
                    // Re-aim velocity to hold a slowly rotating orbit around origin
                    let rel = p.position - p.origin;
                    let radius = rel.length_xz().max(0.05);
                    let angle = rel.z.atan2(rel.x) + GALAXY_ORBIT_RATE * dt;
                    let target = p.origin
                        + Vec3::new(angle.cos() * radius, rel.y, angle.sin() * radius);
                    p.velocity = (target - p.position) * (1.0 / dt);
                }
                BehaviorKind::Stationary => {
                    p.velocity = Vec3::ZERO;
                }
                _ => {}
            }

            if p.behavior != BehaviorKind::Stationary {
                // Quadratic drag, skipped at negligible speed
                let speed_sq = p.velocity.length_squared();
                if speed_sq > DRAG_EPSILON {
                    let speed = speed_sq.sqrt();
                    // Impulse capped so drag can never reverse the velocity
                    let impulse = (p.drag * speed_sq * dt).min(speed);
                    p.velocity -= p.velocity * (impulse / speed);
                }

                // Exponential friction, frame-rate independent
                p.velocity = p.velocity * p.friction.powf(dtn);

                // Gravity enters through the integrator's acceleration
                let g = self.base_gravity * p.gravity;
                let accel = move |_pos: Vec3, _vel: Vec3| Vec3::new(0.0, -g, 0.0);
                let (pos, vel) =
                    integrator.integrate(p.position, p.velocity, &mut p.prev_position, &accel, dt);
                p.position = pos;
                p.velocity = vel;
            }

            // Trail bookkeeping for behaviors that keep one
            let trail_cap = p.behavior.defaults().trail.min(self.max_trail);
            if trail_cap > 0 {
                p.trail.push_front(p.position);
                p.trail.truncate(trail_cap);
            }

            p.life -= p.decay * dtn;
            p.alpha = p.behavior.alpha(p.life, p.phase);
        }

        // Recycle the dead, preserving insertion order of survivors
        let slots = &mut self.slots;
        let free = &mut self.free;
        self.active.retain(|&idx| {
            if slots[idx].is_dead() {
                slots[idx].alive = false;
                free.push(idx);
                false
            } else {
                true
            }
        });
    }

    /// Live particles in insertion order (draw order)
    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> {
        self.active.iter().map(move |&idx| &self.slots[idx])
    }

    pub fn get(&self, idx: usize) -> Option<&Particle> {
        self.slots.get(idx).filter(|p| p.alive)
    }

    /// Append a render snapshot of every live particle, in draw order
    pub fn snapshot(&self, out: &mut Vec<ParticleView>) {
        out.extend(self.iter_active().map(ParticleView::from_particle));
    }

    /// Forcibly recycle every active particle
    pub fn clear(&mut self) {
        while let Some(idx) = self.active.pop_front() {
            self.slots[idx].alive = false;
            self.slots[idx].life = 0.0;
            self.free.push(idx);
        }
    }
}

impl Spawner for ParticlePool {
    fn spawn(&mut self, opts: &SpawnOptions, rng: &mut ParticleRng) -> usize {
        self.acquire(opts, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn spawn_n(pool: &mut ParticlePool, rng: &mut ParticleRng, n: usize) {
        for i in 0..n {
            let opts = SpawnOptions::at(Vec3::new(i as f32, 0.0, 0.0));
            pool.acquire(&opts, rng);
        }
    }

    #[test]
    fn zero_capacity_is_an_error() {
        assert!(matches!(
            ParticlePool::new(0),
            Err(EmberError::ZeroCapacityPool)
        ));
    }

    #[test]
    fn pool_bound_holds_under_overflow() {
        let mut pool = ParticlePool::new(8).unwrap();
        let mut rng = ParticleRng::new(42);
        for i in 0..100 {
            let opts = SpawnOptions::at(Vec3::new(i as f32, 0.0, 0.0));
            pool.acquire(&opts, &mut rng);
            assert!(pool.active_count() <= 8);
            assert_eq!(pool.active_count() + pool.free_count(), 8);
        }
        assert_eq!(pool.active_count(), 8);
    }

    #[test]
    fn eviction_is_fifo_over_insertion_order() {
        let mut pool = ParticlePool::new(3).unwrap();
        let mut rng = ParticleRng::new(42);
        spawn_n(&mut pool, &mut rng, 3);
        // Fourth spawn evicts the oldest (x == 0)
        pool.acquire(&SpawnOptions::at(Vec3::new(99.0, 0.0, 0.0)), &mut rng);
        let xs: Vec<f32> = pool.iter_active().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 99.0]);
    }

    #[test]
    fn reacquired_slot_has_no_residue() {
        let mut pool = ParticlePool::new(1).unwrap();
        let mut rng = ParticleRng::new(42);
        let opts = SpawnOptions::at(Vec3::ONE)
            .with_hue(120.0)
            .with_behavior(BehaviorKind::Comet);
        let idx = pool.acquire(&opts, &mut rng);
        pool.update(DT);
        assert!(!pool.get(idx).unwrap().trail.is_empty());

        // Evict and respawn into the same slot with different options
        let idx2 = pool.acquire(&SpawnOptions::at(Vec3::ZERO).with_hue(10.0), &mut rng);
        assert_eq!(idx, idx2);
        let p = pool.get(idx2).unwrap();
        assert_eq!(p.position, Vec3::ZERO);
        assert!((p.hue - 10.0).abs() < 1e-5);
        assert!((p.life - 1.0).abs() < 1e-6);
        assert!(p.trail.is_empty());
        assert_eq!(p.behavior, BehaviorKind::Default);
    }

    #[test]
    fn life_decreases_monotonically_until_recycled() {
        let mut pool = ParticlePool::new(4).unwrap();
        let mut rng = ParticleRng::new(7);
        let idx = pool.acquire(&SpawnOptions::at(Vec3::ZERO), &mut rng);
        let mut last = pool.get(idx).unwrap().life;
        for _ in 0..500 {
            pool.update(DT);
            match pool.get(idx) {
                Some(p) => {
                    assert!(p.life < last);
                    last = p.life;
                }
                None => return, // recycled
            }
        }
        panic!("particle with default decay should die within 500 ticks");
    }

    #[test]
    fn dead_particles_return_to_free() {
        let mut pool = ParticlePool::new(4).unwrap();
        let mut rng = ParticleRng::new(7);
        let opts = SpawnOptions {
            decay: Some(0.5),
            ..SpawnOptions::at(Vec3::ZERO)
        };
        pool.acquire(&opts, &mut rng);
        for _ in 0..10 {
            pool.update(DT);
        }
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.free_count(), 4);
    }

    #[test]
    fn stationary_holds_position() {
        let mut pool = ParticlePool::new(1).unwrap();
        let mut rng = ParticleRng::new(7);
        let opts = SpawnOptions::at(Vec3::ONE)
            .with_velocity(Vec3::new(5.0, 5.0, 5.0))
            .with_behavior(BehaviorKind::Stationary);
        let idx = pool.acquire(&opts, &mut rng);
        for _ in 0..30 {
            pool.update(DT);
        }
        let p = pool.get(idx).unwrap();
        assert_eq!(p.position, Vec3::ONE);
    }

    #[test]
    fn galaxy_orbits_its_origin() {
        let mut pool = ParticlePool::new(1).unwrap();
        let mut rng = ParticleRng::new(7);
        let opts = SpawnOptions {
            origin: Some(Vec3::ZERO),
            decay: Some(0.0001),
            ..SpawnOptions::at(Vec3::new(2.0, 0.0, 0.0)).with_behavior(BehaviorKind::Galaxy)
        };
        let idx = pool.acquire(&opts, &mut rng);
        for _ in 0..60 {
            pool.update(DT);
        }
        let p = pool.get(idx).unwrap();
        // Still at roughly the same orbital radius, but rotated off +X
        let r = p.position.length_xz();
        assert!((r - 2.0).abs() < 0.2, "radius drifted to {r}");
        assert!(p.position.z.abs() > 0.5, "no angular motion");
    }

    #[test]
    fn clear_recycles_everything() {
        let mut pool = ParticlePool::new(16).unwrap();
        let mut rng = ParticleRng::new(7);
        spawn_n(&mut pool, &mut rng, 10);
        pool.clear();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.free_count(), 16);
    }

    #[test]
    fn comet_trail_is_bounded() {
        let mut pool = ParticlePool::new(1).unwrap();
        let mut rng = ParticleRng::new(7);
        let opts = SpawnOptions {
            decay: Some(0.0001),
            ..SpawnOptions::at(Vec3::ZERO).with_behavior(BehaviorKind::Comet)
        };
        let idx = pool.acquire(&opts, &mut rng);
        for _ in 0..100 {
            pool.update(DT);
        }
        let p = pool.get(idx).unwrap();
        assert!(!p.trail.is_empty());
        assert!(p.trail.len() <= 8);
    }
}
