//! Multi-stage explosion choreography
//!
//! A combo is an ordered list of timed stages. The orchestrator walks that
//! list after the rocket explodes, firing each stage once its delay has
//! elapsed. At most one stage fires per tick, strictly in order, never twice.

use ember_core::{EmberError, Result, Vec3};
use ember_particles::{BehaviorKind, ParticleRng, SpawnOptions, Spawner};
use ember_shapes::{ShapeKind, ShapeRegistry, BASE_RADIUS};

/// Base particle count of a stage before multipliers: 200 + charge * 400
const BASE_COUNT: f32 = 200.0;
const CHARGE_COUNT: f32 = 400.0;

/// Outward speed per unit of offset distance; keeps true-3D shapes legible
/// while they expand instead of collapsing into a sphere.
const EXPANSION_RATE: f32 = 1.2 / BASE_RADIUS;

/// Per-stage physical overrides; `None` keeps the behavior defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct StageOverrides {
    pub gravity: Option<f32>,
    pub decay: Option<f32>,
    pub velocity_scale: Option<f32>,
    pub spawn_offset: Option<Vec3>,
}

/// One timed sub-explosion within a combo
#[derive(Debug, Clone)]
pub struct ComboStage {
    /// Seconds after the explosion before this stage fires
    pub delay: f32,
    pub shape: ShapeKind,
    /// Spatial scale multiplier for the generated cloud
    pub scale: f32,
    /// Multiplier on the stage's particle count
    pub count_multiplier: f32,
    /// Added to the firework's base hue
    pub hue_shift: f32,
    /// Behavior for points without their own hint
    pub behavior: Option<BehaviorKind>,
    pub overrides: StageOverrides,
}

impl ComboStage {
    pub fn new(delay: f32, shape: ShapeKind) -> Self {
        Self {
            delay,
            shape,
            scale: 1.0,
            count_multiplier: 1.0,
            hue_shift: 0.0,
            behavior: None,
            overrides: StageOverrides::default(),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_count_multiplier(mut self, m: f32) -> Self {
        self.count_multiplier = m;
        self
    }

    pub fn with_hue_shift(mut self, shift: f32) -> Self {
        self.hue_shift = shift;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorKind) -> Self {
        self.behavior = Some(behavior);
        self
    }

    pub fn with_overrides(mut self, overrides: StageOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Built-in stage schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComboKind {
    /// One stage, no delay
    #[default]
    Single,
    /// Main break, then a smaller echo
    DoubleBreak,
    /// Three breaks spread over two seconds
    TripleBreak,
    /// Expanding concentric rings
    RingBurst,
    /// Spiral bloom with a glitter cluster finish
    GalaxyBloom,
    /// Four escalating breaks
    FinaleChain,
}

impl ComboKind {
    /// The stage list for this preset, exploding into `shape` where the
    /// preset doesn't dictate its own geometry.
    pub fn stages(self, shape: ShapeKind) -> Vec<ComboStage> {
        match self {
            ComboKind::Single => vec![ComboStage::new(0.0, shape)],
            ComboKind::DoubleBreak => vec![
                ComboStage::new(0.0, shape),
                ComboStage::new(0.8, ShapeKind::Peony)
                    .with_scale(0.5)
                    .with_count_multiplier(0.5)
                    .with_hue_shift(30.0),
            ],
            ComboKind::TripleBreak => vec![
                ComboStage::new(0.0, shape),
                ComboStage::new(0.8, shape)
                    .with_scale(0.6)
                    .with_count_multiplier(0.6)
                    .with_hue_shift(40.0),
                ComboStage::new(2.0, ShapeKind::Strobe)
                    .with_scale(0.4)
                    .with_count_multiplier(0.4)
                    .with_hue_shift(80.0),
            ],
            ComboKind::RingBurst => vec![
                ComboStage::new(0.0, ShapeKind::Ring),
                ComboStage::new(0.5, ShapeKind::Ring)
                    .with_scale(1.5)
                    .with_count_multiplier(0.7)
                    .with_hue_shift(40.0),
                ComboStage::new(1.0, ShapeKind::Ring)
                    .with_scale(2.0)
                    .with_count_multiplier(0.5)
                    .with_hue_shift(80.0),
            ],
            ComboKind::GalaxyBloom => vec![
                ComboStage::new(0.0, ShapeKind::GalaxySpiral).with_overrides(StageOverrides {
                    gravity: Some(0.0),
                    decay: Some(0.008),
                    ..StageOverrides::default()
                }),
                ComboStage::new(1.2, ShapeKind::StarCluster)
                    .with_scale(0.6)
                    .with_count_multiplier(0.4)
                    .with_hue_shift(60.0),
            ],
            ComboKind::FinaleChain => vec![
                ComboStage::new(0.0, shape),
                ComboStage::new(0.6, ShapeKind::Chrysanthemum)
                    .with_scale(0.8)
                    .with_hue_shift(30.0),
                ComboStage::new(1.4, ShapeKind::Brocade)
                    .with_scale(1.2)
                    .with_hue_shift(60.0),
                ComboStage::new(2.4, ShapeKind::Strobe)
                    .with_scale(0.5)
                    .with_count_multiplier(0.5)
                    .with_hue_shift(90.0)
                    .with_behavior(BehaviorKind::Glitter),
            ],
        }
    }
}

/// Everything a stage needs from the surrounding simulation
pub struct StageContext<'a> {
    pub center: Vec3,
    pub base_hue: f32,
    pub charge: f32,
    /// From settings: particle_count_multiplier
    pub count_multiplier: f32,
    /// From settings: explosion_size_multiplier
    pub size_multiplier: f32,
    pub registry: &'a ShapeRegistry,
}

/// Walks a stage list after explosion, firing due stages in order
pub struct ComboOrchestrator {
    stages: Vec<ComboStage>,
    current: usize,
}

impl ComboOrchestrator {
    pub fn new(stages: Vec<ComboStage>) -> Result<Self> {
        if stages.is_empty() {
            debug_assert!(false, "combo orchestrator needs at least one stage");
            return Err(EmberError::EmptyStageList);
        }
        Ok(Self { stages, current: 0 })
    }

    pub fn from_kind(kind: ComboKind, shape: ShapeKind) -> Self {
        // Presets are never empty
        Self {
            stages: kind.stages(shape),
            current: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.stages.len()
    }

    pub fn stages_fired(&self) -> usize {
        self.current
    }

    /// Fire the next stage if its delay has elapsed. Advances at most one
    /// stage per call even when several delays have passed. Returns the
    /// number of particles spawned (0 if nothing was due).
    pub fn update(
        &mut self,
        elapsed: f32,
        ctx: &StageContext,
        rng: &mut ParticleRng,
        spawner: &mut dyn Spawner,
    ) -> usize {
        let Some(stage) = self.stages.get(self.current) else {
            return 0;
        };
        if elapsed < stage.delay {
            return 0;
        }
        let stage = stage.clone();
        self.current += 1;
        execute_stage(&stage, ctx, rng, spawner)
    }
}

/// Particle count for one stage given charge and multipliers
pub fn stage_particle_count(charge: f32, count_multiplier: f32, stage_multiplier: f32) -> usize {
    ((BASE_COUNT + charge.clamp(0.0, 1.0) * CHARGE_COUNT) * count_multiplier * stage_multiplier)
        .floor()
        .max(1.0) as usize
}

fn execute_stage(
    stage: &ComboStage,
    ctx: &StageContext,
    rng: &mut ParticleRng,
    spawner: &mut dyn Spawner,
) -> usize {
    let count = stage_particle_count(ctx.charge, ctx.count_multiplier, stage.count_multiplier);
    let scale = stage.scale * ctx.size_multiplier;
    let center = ctx.center + stage.overrides.spawn_offset.unwrap_or(Vec3::ZERO);
    let velocity_scale = stage.overrides.velocity_scale.unwrap_or(1.0);

    let points = ctx.registry.generate(stage.shape, count, scale, rng);
    for point in &points {
        let behavior = point
            .behavior_hint
            .or(stage.behavior)
            .unwrap_or(BehaviorKind::Default);
        let opts = SpawnOptions {
            position: center + point.offset,
            hue: ctx.base_hue + stage.hue_shift + point.hue_offset,
            behavior,
            // Orbit-style behaviors circle the stage center, not their own spawn point
            origin: Some(center),
            gravity: stage.overrides.gravity,
            decay: stage.overrides.decay,
            size: point.size_hint,
            ..SpawnOptions::default()
        }
        // Outward velocity proportional to offset keeps the shape readable
        .with_velocity(point.offset * (EXPANSION_RATE * velocity_scale));
        spawner.spawn(&opts, rng);
    }
    points.len()
}
