//! Ascent trajectory modifiers
//!
//! Each variant is a pure function of `(t, velocity, gravity, dt)`; it owns
//! no state, so one shared instance serves every rocket. Perturbations scale
//! by `dt * 60` to stay frame-rate independent. Wobble is the one variant
//! that draws randomness, and it does so from the rng passed in per call.

use ember_core::Vec3;
use ember_particles::ParticleRng;
use serde::{Deserialize, Serialize};

/// Extra gravity factor during a linear ascent; the ballistic solver uses
/// the same factor so apex predictions line up.
pub const ASCENT_GRAVITY_FACTOR: f32 = 1.5;

const LATERAL_AMP: f32 = 0.06;
const ORBIT_SPEED: f32 = 1.4;

/// Selects which flight pattern a rocket follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryKind {
    #[default]
    Linear,
    Spiral,
    Helix,
    Zigzag,
    SineWave,
    Wobble,
    StagedSingle,
    StagedDouble,
    StagedTriple,
    FallThenRise,
    Orbit,
    Drift,
}

/// A pluggable ascent-phase velocity modifier
pub trait AscentTrajectory: Sync {
    /// Returns the velocity for the next tick, gravity included.
    fn apply(&self, t: f32, velocity: Vec3, gravity: f32, dt: f32, rng: &mut ParticleRng)
        -> Vec3;

    fn name(&self) -> &str;
}

/// O(1) lookup of the shared instance for a kind
pub fn trajectory_for(kind: TrajectoryKind) -> &'static dyn AscentTrajectory {
    match kind {
        TrajectoryKind::Linear => &Linear,
        TrajectoryKind::Spiral => &Spiral,
        TrajectoryKind::Helix => &Helix,
        TrajectoryKind::Zigzag => &Zigzag,
        TrajectoryKind::SineWave => &SineWave,
        TrajectoryKind::Wobble => &Wobble,
        TrajectoryKind::StagedSingle => &Staged { burns: 1 },
        TrajectoryKind::StagedDouble => &Staged { burns: 2 },
        TrajectoryKind::StagedTriple => &Staged { burns: 3 },
        TrajectoryKind::FallThenRise => &FallThenRise,
        TrajectoryKind::Orbit => &Orbit,
        TrajectoryKind::Drift => &Drift,
    }
}

struct Linear;

impl AscentTrajectory for Linear {
    fn apply(&self, _t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        v.y -= gravity * ASCENT_GRAVITY_FACTOR * dt;
        v
    }

    fn name(&self) -> &str {
        "linear"
    }
}

struct Spiral;

impl AscentTrajectory for Spiral {
    fn apply(&self, t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        let dtn = dt * 60.0;
        v.x += (t * 8.0).cos() * LATERAL_AMP * dtn;
        v.z += (t * 8.0).sin() * LATERAL_AMP * dtn;
        v.y -= gravity * dt;
        v
    }

    fn name(&self) -> &str {
        "spiral"
    }
}

struct Helix;

impl AscentTrajectory for Helix {
    fn apply(&self, t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        let dtn = dt * 60.0;
        // Tighter rotation and a slight outward push over time
        let amp = LATERAL_AMP * (0.6 + t * 0.5);
        v.x += (t * 12.0).cos() * amp * dtn;
        v.z += (t * 12.0).sin() * amp * dtn;
        v.y -= gravity * dt;
        v
    }

    fn name(&self) -> &str {
        "helix"
    }
}

struct Zigzag;

impl AscentTrajectory for Zigzag {
    fn apply(&self, t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        let dtn = dt * 60.0;
        let side = if (t * 4.0).sin() >= 0.0 { 1.0 } else { -1.0 };
        v.x += side * LATERAL_AMP * 1.5 * dtn;
        v.y -= gravity * dt;
        v
    }

    fn name(&self) -> &str {
        "zigzag"
    }
}

struct SineWave;

impl AscentTrajectory for SineWave {
    fn apply(&self, t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        let dtn = dt * 60.0;
        v.x += (t * 6.0).sin() * LATERAL_AMP * dtn;
        v.y -= gravity * dt;
        v
    }

    fn name(&self) -> &str {
        "sine_wave"
    }
}

struct Wobble;

impl AscentTrajectory for Wobble {
    fn apply(&self, _t: f32, mut v: Vec3, gravity: f32, dt: f32, rng: &mut ParticleRng) -> Vec3 {
        let dtn = dt * 60.0;
        v.x += rng.range(-LATERAL_AMP, LATERAL_AMP) * 2.0 * dtn;
        v.z += rng.range(-LATERAL_AMP, LATERAL_AMP) * 2.0 * dtn;
        v.y -= gravity * dt;
        v
    }

    fn name(&self) -> &str {
        "wobble"
    }
}

/// Multi-burn rocket: alternating windows of extra gravity and brief upward
/// boosts, one window pair per burn.
struct Staged {
    burns: u32,
}

impl AscentTrajectory for Staged {
    fn apply(&self, t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        // Each burn cycle: 0.45s of heavy gravity then a 0.15s boost
        let cycle = 0.6;
        let total = cycle * self.burns as f32;
        if t < total {
            let phase = t % cycle;
            if phase < 0.45 {
                v.y -= gravity * 2.0 * dt;
            } else {
                v.y += gravity * 3.5 * dt;
            }
        } else {
            v.y -= gravity * dt;
        }
        v
    }

    fn name(&self) -> &str {
        "staged"
    }
}

struct FallThenRise;

impl AscentTrajectory for FallThenRise {
    fn apply(&self, t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        if t < 0.5 {
            // Dramatic dip
            v.y -= gravity * 3.0 * dt;
        } else if t < 0.9 {
            // Recovery boost
            v.y += gravity * 4.5 * dt;
        } else {
            v.y -= gravity * dt;
        }
        v
    }

    fn name(&self) -> &str {
        "fall_then_rise"
    }
}

struct Orbit;

impl AscentTrajectory for Orbit {
    fn apply(&self, t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        // Lateral velocity is set, not added: a corkscrew climb
        v.x = (t * 7.0).cos() * ORBIT_SPEED;
        v.z = (t * 7.0).sin() * ORBIT_SPEED;
        v.y -= gravity * dt;
        v
    }

    fn name(&self) -> &str {
        "orbit"
    }
}

struct Drift;

impl AscentTrajectory for Drift {
    fn apply(&self, t: f32, mut v: Vec3, gravity: f32, dt: f32, _rng: &mut ParticleRng) -> Vec3 {
        let dtn = dt * 60.0;
        // Slow constant lean that eases in
        v.x += (t * 0.8).min(1.0) * LATERAL_AMP * 0.5 * dtn;
        v.y -= gravity * dt;
        v
    }

    fn name(&self) -> &str {
        "drift"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const G: f32 = 9.8;

    const ALL: [TrajectoryKind; 12] = [
        TrajectoryKind::Linear,
        TrajectoryKind::Spiral,
        TrajectoryKind::Helix,
        TrajectoryKind::Zigzag,
        TrajectoryKind::SineWave,
        TrajectoryKind::Wobble,
        TrajectoryKind::StagedSingle,
        TrajectoryKind::StagedDouble,
        TrajectoryKind::StagedTriple,
        TrajectoryKind::FallThenRise,
        TrajectoryKind::Orbit,
        TrajectoryKind::Drift,
    ];

    #[test]
    fn linear_applies_boosted_gravity() {
        let mut rng = ParticleRng::new(1);
        let v = trajectory_for(TrajectoryKind::Linear).apply(0.0, Vec3::ZERO, G, DT, &mut rng);
        assert!((v.y + G * ASCENT_GRAVITY_FACTOR * DT).abs() < 1e-5);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn deterministic_variants_are_pure() {
        // Same inputs must give the same output, independent of call order
        let mut rng = ParticleRng::new(1);
        for kind in ALL {
            if kind == TrajectoryKind::Wobble {
                continue;
            }
            let traj = trajectory_for(kind);
            let v0 = Vec3::new(0.5, 12.0, -0.5);
            let a = traj.apply(0.7, v0, G, DT, &mut rng);
            let b = traj.apply(0.7, v0, G, DT, &mut rng);
            assert_eq!(a, b, "{kind:?} not pure");
        }
    }

    #[test]
    fn all_variants_pull_down_eventually() {
        // Past every boost window, each variant applies net downward force
        let mut rng = ParticleRng::new(1);
        for kind in ALL {
            let traj = trajectory_for(kind);
            let v = traj.apply(5.0, Vec3::new(0.0, 10.0, 0.0), G, DT, &mut rng);
            assert!(v.y < 10.0, "{kind:?} does not descend at t=5");
        }
    }

    #[test]
    fn spiral_rotates_the_lateral_force() {
        let mut rng = ParticleRng::new(1);
        let traj = trajectory_for(TrajectoryKind::Spiral);
        let a = traj.apply(0.0, Vec3::ZERO, G, DT, &mut rng);
        let b = traj.apply(0.4, Vec3::ZERO, G, DT, &mut rng);
        // Different phase, different lateral direction
        assert!((a.x - b.x).abs() > 1e-6 || (a.z - b.z).abs() > 1e-6);
    }

    #[test]
    fn orbit_sets_lateral_velocity() {
        let mut rng = ParticleRng::new(1);
        let traj = trajectory_for(TrajectoryKind::Orbit);
        // Huge incoming lateral velocity is replaced, not accumulated
        let v = traj.apply(0.3, Vec3::new(100.0, 10.0, -100.0), G, DT, &mut rng);
        assert!(v.x.abs() <= ORBIT_SPEED + 1e-5);
        assert!(v.z.abs() <= ORBIT_SPEED + 1e-5);
    }

    #[test]
    fn fall_then_rise_boosts_mid_flight() {
        let mut rng = ParticleRng::new(1);
        let traj = trajectory_for(TrajectoryKind::FallThenRise);
        let early = traj.apply(0.2, Vec3::ZERO, G, DT, &mut rng);
        let mid = traj.apply(0.7, Vec3::ZERO, G, DT, &mut rng);
        assert!(early.y < 0.0);
        assert!(mid.y > 0.0);
    }
}
