//! A single rocket: ascent, break, staged explosion
//!
//! The entity is a small state machine. While ascending it integrates its
//! own position with the trajectory's velocity rule; once vertical speed
//! drops past the apex threshold it hands off to its combo orchestrator,
//! which spawns stage particles through the injected spawner. The entity
//! never touches the pool directly.

use crate::combo::{ComboKind, ComboOrchestrator, StageContext};
use crate::trajectory::{trajectory_for, TrajectoryKind, ASCENT_GRAVITY_FACTOR};
use ember_core::Vec3;
use ember_particles::{ParticleRng, Spawner};
use ember_shapes::{ShapeKind, ShapeRegistry};

/// Rockets break just past apex, when vy has gone slightly negative
const EXPLODE_VY_THRESHOLD: f32 = -1.5;

/// Minimum vertical climb the solver will aim for
const MIN_ASCENT: f32 = 5.0;

/// Floor for the solver's gravity so the apex-time division stays finite
const MIN_GRAVITY: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworkPhase {
    Ascending,
    Exploding,
    Done,
}

/// Per-tick simulation inputs shared by every firework
pub struct UpdateContext<'a> {
    pub gravity: f32,
    /// From settings: particle_count_multiplier
    pub count_multiplier: f32,
    /// From settings: explosion_size_multiplier
    pub size_multiplier: f32,
    pub registry: &'a ShapeRegistry,
}

/// Initial velocity that reaches `target` at apex under constant `gravity`,
/// and the time to get there. The vertical climb is clamped to a minimum so
/// a target at or below the launch point still produces a visible ascent.
pub fn launch_velocity(start: Vec3, target: Vec3, gravity: f32) -> (Vec3, f32) {
    let gravity = gravity.max(MIN_GRAVITY);
    let dy = (target.y - start.y).max(MIN_ASCENT);
    // v^2 = 2 g dy at the apex, where vy = 0
    let vy = (2.0 * gravity * dy).sqrt();
    let time_to_apex = vy / gravity;
    let vx = (target.x - start.x) / time_to_apex;
    let vz = (target.z - start.z) / time_to_apex;
    (Vec3::new(vx, vy, vz), time_to_apex)
}

pub struct FireworkEntity {
    pub position: Vec3,
    pub velocity: Vec3,
    phase: FireworkPhase,
    /// Seconds since launch
    flight_time: f32,
    /// Seconds since the break
    explode_time: f32,
    hue: f32,
    charge: f32,
    trajectory: TrajectoryKind,
    combo: ComboOrchestrator,
}

impl FireworkEntity {
    /// Launches from `start` toward a break point at `target`.
    pub fn launch(
        start: Vec3,
        target: Vec3,
        hue: f32,
        charge: f32,
        trajectory: TrajectoryKind,
        combo: ComboKind,
        shape: ShapeKind,
        gravity: f32,
    ) -> Self {
        // The linear trajectory applies boosted gravity during ascent, so the
        // solver must aim with the same effective pull.
        let (velocity, _) = launch_velocity(start, target, gravity * ASCENT_GRAVITY_FACTOR);
        Self {
            position: start,
            velocity,
            phase: FireworkPhase::Ascending,
            flight_time: 0.0,
            explode_time: 0.0,
            hue,
            charge: charge.clamp(0.0, 1.0),
            trajectory,
            combo: ComboOrchestrator::from_kind(combo, shape),
        }
    }

    pub fn phase(&self) -> FireworkPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == FireworkPhase::Done
    }

    pub fn is_ascending(&self) -> bool {
        self.phase == FireworkPhase::Ascending
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Forces the break now, regardless of vertical speed.
    pub fn trigger_explosion(&mut self) {
        if self.phase == FireworkPhase::Ascending {
            self.phase = FireworkPhase::Exploding;
            self.explode_time = 0.0;
        }
    }

    /// Advances the rocket by one fixed step.
    pub fn update(
        &mut self,
        dt: f32,
        ctx: &UpdateContext,
        rng: &mut ParticleRng,
        spawner: &mut dyn Spawner,
    ) {
        match self.phase {
            FireworkPhase::Ascending => {
                let traj = trajectory_for(self.trajectory);
                self.velocity =
                    traj.apply(self.flight_time, self.velocity, ctx.gravity, dt, rng);
                self.position += self.velocity * dt;
                self.flight_time += dt;
                if self.velocity.y < EXPLODE_VY_THRESHOLD {
                    self.trigger_explosion();
                }
            }
            FireworkPhase::Exploding => {
                let stage_ctx = StageContext {
                    center: self.position,
                    base_hue: self.hue,
                    charge: self.charge,
                    count_multiplier: ctx.count_multiplier,
                    size_multiplier: ctx.size_multiplier,
                    registry: ctx.registry,
                };
                self.combo.update(self.explode_time, &stage_ctx, rng, spawner);
                self.explode_time += dt;
                if self.combo.is_done() {
                    self.phase = FireworkPhase::Done;
                }
            }
            FireworkPhase::Done => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_particles::SpawnOptions;

    const DT: f32 = 1.0 / 120.0;
    const G: f32 = 9.8;

    struct CountingSpawner {
        count: usize,
    }

    impl Spawner for CountingSpawner {
        fn spawn(&mut self, _opts: &SpawnOptions, _rng: &mut ParticleRng) -> usize {
            self.count += 1;
            self.count - 1
        }
    }

    fn test_ctx(registry: &ShapeRegistry) -> UpdateContext<'_> {
        UpdateContext {
            gravity: G,
            count_multiplier: 1.0,
            size_multiplier: 1.0,
            registry,
        }
    }

    #[test]
    fn launch_speed_matches_energy_balance() {
        let start = Vec3::ZERO;
        let target = Vec3::new(0.0, 100.0, 0.0);
        let (v, _) = launch_velocity(start, target, G);
        // v0^2 = 2 g dy
        assert!((v.y * v.y - 2.0 * G * 100.0).abs() < 1e-2);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn apex_lands_on_target() {
        let start = Vec3::new(3.0, 0.0, -2.0);
        let target = Vec3::new(10.0, 80.0, 6.0);
        let (v, t) = launch_velocity(start, target, G);

        // Simulate under constant gravity and sample at the solved apex time
        let mut pos = start;
        let mut vel = v;
        let dt = 1e-4;
        let steps = (t / dt) as usize;
        for _ in 0..steps {
            vel.y -= G * dt;
            pos += vel * dt;
        }
        assert!((pos.x - target.x).abs() < 0.05);
        assert!((pos.y - target.y).abs() < 0.1);
        assert!((pos.z - target.z).abs() < 0.05);
        // And vy is ~0 there
        assert!(vel.y.abs() < 0.05);
    }

    #[test]
    fn zero_gravity_launch_is_finite() {
        // The tolerant config layer lets gravity = 0 through; the solver
        // must still produce a usable climb instead of NaN.
        let (v, t) = launch_velocity(Vec3::ZERO, Vec3::new(10.0, 80.0, 5.0), 0.0);
        assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
        assert!(t.is_finite());
        assert!(v.y > 0.0);
    }

    #[test]
    fn low_target_still_climbs() {
        let (v, _) = launch_velocity(Vec3::new(0.0, 50.0, 0.0), Vec3::new(0.0, 10.0, 0.0), G);
        assert!(v.y > 0.0);
    }

    #[test]
    fn rocket_explodes_past_apex() {
        let registry = ShapeRegistry::new();
        let mut rng = ParticleRng::new(7);
        let mut spawner = CountingSpawner { count: 0 };
        let mut fw = FireworkEntity::launch(
            Vec3::ZERO,
            Vec3::new(0.0, 60.0, 0.0),
            30.0,
            0.5,
            TrajectoryKind::Linear,
            ComboKind::Single,
            ShapeKind::Sphere,
            G,
        );
        let ctx = test_ctx(&registry);

        let mut ticks = 0;
        while fw.is_ascending() && ticks < 10_000 {
            fw.update(DT, &ctx, &mut rng, &mut spawner);
            ticks += 1;
        }
        assert_eq!(fw.phase(), FireworkPhase::Exploding);
        // The break happens near the aimed altitude
        assert!(fw.position.y > 40.0, "broke too low: {}", fw.position.y);
        // Nothing spawned during ascent
        assert_eq!(spawner.count, 0);
    }

    #[test]
    fn single_break_spawns_charge_scaled_count() {
        let registry = ShapeRegistry::new();
        let mut rng = ParticleRng::new(7);
        let mut spawner = CountingSpawner { count: 0 };
        let mut fw = FireworkEntity::launch(
            Vec3::ZERO,
            Vec3::new(0.0, 60.0, 0.0),
            30.0,
            0.5,
            TrajectoryKind::Linear,
            ComboKind::Single,
            ShapeKind::Sphere,
            G,
        );
        let ctx = test_ctx(&registry);

        let mut ticks = 0;
        while !fw.is_done() && ticks < 20_000 {
            fw.update(DT, &ctx, &mut rng, &mut spawner);
            ticks += 1;
        }
        // charge 0.5: 200 + 0.5 * 400 = 400 particles from the one stage
        assert_eq!(spawner.count, 400);
        assert_eq!(fw.phase(), FireworkPhase::Done);
    }

    #[test]
    fn triple_break_spreads_stages_over_time() {
        let registry = ShapeRegistry::new();
        let mut rng = ParticleRng::new(7);
        let mut spawner = CountingSpawner { count: 0 };
        let mut fw = FireworkEntity::launch(
            Vec3::ZERO,
            Vec3::new(0.0, 60.0, 0.0),
            30.0,
            0.5,
            TrajectoryKind::Linear,
            ComboKind::TripleBreak,
            ShapeKind::Sphere,
            G,
        );
        fw.trigger_explosion();
        let ctx = test_ctx(&registry);

        // First stage fires immediately
        fw.update(DT, &ctx, &mut rng, &mut spawner);
        let after_first = spawner.count;
        assert!(after_first > 0);

        // Half a second in, still only one stage
        for _ in 0..(0.5 / DT) as usize {
            fw.update(DT, &ctx, &mut rng, &mut spawner);
        }
        assert_eq!(spawner.count, after_first);

        // Run past the last delay; all stages fire and the rocket finishes
        for _ in 0..(2.0 / DT) as usize {
            fw.update(DT, &ctx, &mut rng, &mut spawner);
        }
        assert!(fw.is_done());
        assert!(spawner.count > after_first);
    }

    #[test]
    fn trigger_explosion_is_idempotent() {
        let mut fw = FireworkEntity::launch(
            Vec3::ZERO,
            Vec3::new(0.0, 60.0, 0.0),
            0.0,
            0.5,
            TrajectoryKind::Linear,
            ComboKind::Single,
            ShapeKind::Sphere,
            G,
        );
        fw.trigger_explosion();
        assert_eq!(fw.phase(), FireworkPhase::Exploding);
        fw.trigger_explosion();
        assert_eq!(fw.phase(), FireworkPhase::Exploding);
    }
}
