//! Top-level simulation driver
//!
//! The host calls `tick` with its variable frame delta; the driver runs the
//! fixed-step loop, advancing rockets and the particle pool in lockstep.
//! Rockets that have finished their combo are dropped at the end of the
//! tick, so staged breaks keep firing however long their delays run.

use crate::combo::ComboKind;
use crate::firework::{FireworkEntity, UpdateContext};
use crate::trajectory::TrajectoryKind;
use ember_core::{Result, Settings, Vec3};
use ember_particles::{
    BehaviorKind, ParticlePool, ParticleRng, ParticleView, SpawnOptions, Spawner,
};
use ember_physics::{FixedStepper, IntegratorKind};
use ember_shapes::{ShapeKind, ShapeRegistry};

/// Exhaust sparks per fixed step while a rocket climbs
const EXHAUST_PER_STEP: usize = 2;
const EXHAUST_DECAY: f32 = 0.08;
const EXHAUST_SIZE: f32 = 0.6;

/// Everything needed to send up one rocket
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub start: Vec3,
    /// Aimed break point; the rocket reaches it at apex
    pub target: Vec3,
    pub hue: f32,
    /// Explosion intensity in [0, 1]
    pub charge: f32,
    pub trajectory: TrajectoryKind,
    pub combo: ComboKind,
    pub shape: ShapeKind,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            start: Vec3::ZERO,
            target: Vec3::new(0.0, 80.0, 0.0),
            hue: 0.0,
            charge: 0.5,
            trajectory: TrajectoryKind::Linear,
            combo: ComboKind::Single,
            shape: ShapeKind::Sphere,
        }
    }
}

impl LaunchConfig {
    pub fn toward(target: Vec3) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn with_hue(mut self, hue: f32) -> Self {
        self.hue = hue;
        self
    }

    pub fn with_charge(mut self, charge: f32) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_trajectory(mut self, trajectory: TrajectoryKind) -> Self {
        self.trajectory = trajectory;
        self
    }

    pub fn with_combo(mut self, combo: ComboKind) -> Self {
        self.combo = combo;
        self
    }
}

/// Owns the pool, the rocket list, and the fixed-step clock
pub struct SimulationDriver {
    settings: Settings,
    pool: ParticlePool,
    fireworks: Vec<FireworkEntity>,
    registry: ShapeRegistry,
    rng: ParticleRng,
    stepper: FixedStepper,
}

impl SimulationDriver {
    pub fn new(settings: Settings) -> Result<Self> {
        let mut pool = ParticlePool::new(settings.max_particles)?;
        pool.set_gravity(settings.gravity);
        pool.set_trail_length(settings.trail_length);
        Ok(Self {
            settings,
            pool,
            fireworks: Vec::new(),
            registry: ShapeRegistry::new(),
            rng: ParticleRng::new(0x1234_5678),
            stepper: FixedStepper::default(),
        })
    }

    pub fn with_integrator(mut self, kind: IntegratorKind) -> Self {
        self.pool = self.pool.with_integrator(kind);
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.rng = ParticleRng::new(seed);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Sends up a rocket and returns a handle to it.
    pub fn launch(&mut self, config: LaunchConfig) -> &FireworkEntity {
        println!(
            "[sim] launch shape={:?} combo={:?} charge={:.2}",
            config.shape, config.combo, config.charge
        );
        self.fireworks.push(FireworkEntity::launch(
            config.start,
            config.target,
            config.hue,
            config.charge,
            config.trajectory,
            config.combo,
            config.shape,
            self.settings.gravity,
        ));
        &self.fireworks[self.fireworks.len() - 1]
    }

    /// Launch toward `target` with a random hue and default everything else.
    pub fn launch_at(&mut self, target: Vec3) -> &FireworkEntity {
        let hue = self.rng.range(0.0, 360.0);
        self.launch(LaunchConfig::toward(target).with_hue(hue))
    }

    /// Advances the simulation by the host's frame delta. Returns the number
    /// of fixed steps that ran.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let Self {
            settings,
            pool,
            fireworks,
            registry,
            rng,
            stepper,
        } = self;

        let ctx = UpdateContext {
            gravity: settings.gravity,
            count_multiplier: settings.particle_count_multiplier,
            size_multiplier: settings.explosion_size_multiplier,
            registry,
        };

        let steps = stepper.advance(dt, |step| {
            for fw in fireworks.iter_mut() {
                fw.update(step, &ctx, rng, pool);
                if fw.is_ascending() {
                    emit_exhaust(pool, rng, fw);
                }
            }
            pool.update(step);
        });

        self.fireworks.retain(|fw| !fw.is_done());
        steps
    }

    pub fn active_fireworks(&self) -> usize {
        self.fireworks.len()
    }

    pub fn active_particles(&self) -> usize {
        self.pool.active_count()
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Copies render views of every live particle into `out`.
    pub fn snapshot(&self, out: &mut Vec<ParticleView>) {
        self.pool.snapshot(out);
    }

    /// Removes every rocket and particle; the clock keeps its phase.
    pub fn clear(&mut self) {
        self.fireworks.clear();
        self.pool.clear();
    }
}

/// Short-lived sparks trailing behind a climbing rocket
fn emit_exhaust(pool: &mut ParticlePool, rng: &mut ParticleRng, fw: &FireworkEntity) {
    for _ in 0..EXHAUST_PER_STEP {
        let opts = SpawnOptions::at(fw.position + rng.jitter(0.2))
            .with_velocity(fw.velocity * -0.05 + rng.jitter(0.4))
            .with_hue(fw.hue() + rng.range(-10.0, 10.0))
            .with_behavior(BehaviorKind::Default);
        let opts = SpawnOptions {
            decay: Some(EXHAUST_DECAY),
            size: Some(EXHAUST_SIZE),
            ..opts
        };
        pool.spawn(&opts, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn driver() -> SimulationDriver {
        SimulationDriver::new(Settings::default())
            .map(|d| d.with_seed(99))
            .unwrap()
    }

    #[test]
    fn zero_capacity_settings_fail() {
        let settings = Settings {
            max_particles: 0,
            ..Settings::default()
        };
        assert!(SimulationDriver::new(settings).is_err());
    }

    #[test]
    fn tick_runs_fixed_steps() {
        let mut d = driver();
        // One 60Hz frame at a 120Hz fixed step
        assert_eq!(d.tick(FRAME), 2);
    }

    #[test]
    fn launch_returns_the_new_rocket() {
        let mut d = driver();
        let fw = d.launch(LaunchConfig::toward(Vec3::new(0.0, 70.0, 0.0)).with_hue(210.0));
        assert!(fw.is_ascending());
        assert!((fw.hue() - 210.0).abs() < 1e-5);
        assert!(fw.velocity.y > 0.0);
    }

    #[test]
    fn ascending_rocket_leaves_exhaust() {
        let mut d = driver();
        d.launch_at(Vec3::new(0.0, 80.0, 0.0));
        d.tick(FRAME);
        assert_eq!(d.active_fireworks(), 1);
        assert!(d.active_particles() > 0);
    }

    #[test]
    fn rocket_is_dropped_after_its_combo_finishes() {
        let mut d = driver();
        d.launch(LaunchConfig::toward(Vec3::new(0.0, 40.0, 0.0)).with_combo(ComboKind::Single));

        let mut frames = 0;
        while d.active_fireworks() > 0 && frames < 2000 {
            d.tick(FRAME);
            frames += 1;
        }
        assert_eq!(d.active_fireworks(), 0, "rocket never finished");
        // The break left particles behind
        assert!(d.active_particles() > 100);
    }

    #[test]
    fn staged_rocket_outlives_its_first_break() {
        let mut d = driver();
        d.launch(
            LaunchConfig::toward(Vec3::new(0.0, 40.0, 0.0)).with_combo(ComboKind::TripleBreak),
        );

        // Run until the first break has happened (a jump of hundreds of
        // particles in one frame, far beyond exhaust volume)
        let mut broke = false;
        for _ in 0..2000 {
            let before = d.active_particles();
            d.tick(FRAME);
            if d.active_particles() > before + 200 {
                broke = true;
                break;
            }
        }
        assert!(broke, "first stage never fired");
        // More stages pending, so the rocket must still be listed
        assert_eq!(d.active_fireworks(), 1);
    }

    #[test]
    fn toml_settings_scale_the_breaks() {
        let s: Settings = toml::from_str(
            r#"
particle_count_multiplier = 0.25
max_particles = 5000
"#,
        )
        .unwrap();
        let mut d = SimulationDriver::new(s).unwrap().with_seed(99);
        let mut fw = FireworkEntity::launch(
            Vec3::new(0.0, 50.0, 0.0),
            Vec3::new(0.0, 90.0, 0.0),
            120.0,
            0.5,
            TrajectoryKind::Linear,
            ComboKind::Single,
            ShapeKind::Peony,
            d.settings().gravity,
        );
        fw.trigger_explosion();

        let ctx = UpdateContext {
            gravity: d.settings.gravity,
            count_multiplier: d.settings.particle_count_multiplier,
            size_multiplier: d.settings.explosion_size_multiplier,
            registry: &d.registry,
        };
        let mut rng = ParticleRng::new(5);
        fw.update(1.0 / 120.0, &ctx, &mut rng, &mut d.pool);
        // (200 + 0.5 * 400) * 0.25 = 100
        assert_eq!(d.pool.active_count(), 100);
    }

    #[test]
    fn clear_drops_everything() {
        let mut d = driver();
        d.launch_at(Vec3::new(0.0, 60.0, 0.0));
        d.tick(FRAME);
        d.clear();
        assert_eq!(d.active_fireworks(), 0);
        assert_eq!(d.active_particles(), 0);
    }

    #[test]
    fn pool_capacity_bounds_particle_count() {
        let settings = Settings {
            max_particles: 150,
            ..Settings::default()
        };
        let mut d = SimulationDriver::new(settings).unwrap().with_seed(99);
        for _ in 0..4 {
            d.launch_at(Vec3::new(0.0, 40.0, 0.0));
        }
        for _ in 0..600 {
            d.tick(FRAME);
        }
        assert!(d.pool().active_count() <= 150);
    }
}
