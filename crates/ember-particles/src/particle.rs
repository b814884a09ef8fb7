//! Particle state and spawn options

use crate::behavior::BehaviorKind;
use ember_core::{hsl_to_rgb, wrap_hue, Vec3};
use std::collections::VecDeque;

/// A single pooled ember/spark
#[derive(Clone)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Position-history slot for the Verlet integrator
    pub prev_position: Option<Vec3>,
    /// Spawn origin, used by orbit-style behaviors
    pub origin: Vec3,
    /// Hue in [0, 360)
    pub hue: f32,
    /// Derived from life and behavior each tick
    pub alpha: f32,
    /// 1 at spawn, 0 at death
    pub life: f32,
    /// Life lost per normalized 60Hz frame
    pub decay: f32,
    /// Per-60Hz-frame velocity retention
    pub friction: f32,
    /// Multiplier on the pool's base gravity
    pub gravity: f32,
    /// Quadratic air-resistance coefficient
    pub drag: f32,
    pub size: f32,
    pub behavior: BehaviorKind,
    /// Fixed random phase for flicker/jitter rules
    pub phase: f32,
    /// Recent positions, newest first; bounded
    pub trail: VecDeque<Vec3>,
    pub alive: bool,
}

impl Particle {
    pub fn dead() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            prev_position: None,
            origin: Vec3::ZERO,
            hue: 0.0,
            alpha: 0.0,
            life: 0.0,
            decay: 0.015,
            friction: 0.98,
            gravity: 1.0,
            drag: 0.0,
            size: 1.0,
            behavior: BehaviorKind::Default,
            phase: 0.0,
            trail: VecDeque::new(),
            alive: false,
        }
    }

    /// Fully reinitialize this slot from spawn options. Every field is
    /// overwritten so a recycled slot carries nothing from its previous life.
    pub fn init(&mut self, opts: &SpawnOptions, phase: f32) {
        let defaults = opts.behavior.defaults();
        self.position = opts.position;
        self.velocity = opts.resolved_velocity();
        self.prev_position = None;
        self.origin = opts.origin.unwrap_or(opts.position);
        self.hue = wrap_hue(opts.hue);
        self.life = 1.0;
        self.decay = opts.decay.unwrap_or(defaults.decay).max(1e-4);
        self.friction = opts.friction.unwrap_or(defaults.friction);
        self.gravity = opts.gravity.unwrap_or(defaults.gravity);
        self.drag = opts.drag.unwrap_or(0.02);
        self.size = opts.size.unwrap_or(defaults.size);
        self.behavior = opts.behavior;
        self.phase = phase;
        self.alpha = opts.behavior.alpha(1.0, phase);
        self.trail.clear();
        self.alive = true;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// Initial velocity: explicit vector, or spherical (theta, phi, speed)
#[derive(Debug, Clone, Copy)]
pub enum SpawnVelocity {
    Explicit(Vec3),
    Spherical { theta: f32, phi: f32, speed: f32 },
}

impl Default for SpawnVelocity {
    fn default() -> Self {
        SpawnVelocity::Explicit(Vec3::ZERO)
    }
}

/// Options for acquiring one particle from a pool.
/// Any `None` field falls back to the behavior's defaults.
#[derive(Debug, Clone, Default)]
pub struct SpawnOptions {
    pub position: Vec3,
    pub velocity: SpawnVelocity,
    pub hue: f32,
    pub behavior: BehaviorKind,
    /// Defaults to `position` when unset
    pub origin: Option<Vec3>,
    pub gravity: Option<f32>,
    pub decay: Option<f32>,
    pub friction: Option<f32>,
    pub drag: Option<f32>,
    pub size: Option<f32>,
}

impl SpawnOptions {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = SpawnVelocity::Explicit(velocity);
        self
    }

    pub fn with_spherical(mut self, theta: f32, phi: f32, speed: f32) -> Self {
        self.velocity = SpawnVelocity::Spherical { theta, phi, speed };
        self
    }

    pub fn with_hue(mut self, hue: f32) -> Self {
        self.hue = hue;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorKind) -> Self {
        self.behavior = behavior;
        self
    }

    fn resolved_velocity(&self) -> Vec3 {
        match self.velocity {
            SpawnVelocity::Explicit(v) => v,
            SpawnVelocity::Spherical { theta, phi, speed } => {
                Vec3::from_spherical(theta, phi, speed)
            }
        }
    }
}

/// Read-only snapshot of one live particle for the rendering layer
#[derive(Debug, Clone, Copy)]
pub struct ParticleView {
    pub position: Vec3,
    pub hue: f32,
    pub rgb: [f32; 3],
    pub alpha: f32,
    pub size: f32,
}

impl ParticleView {
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            position: p.position,
            hue: p.hue,
            rgb: hsl_to_rgb(p.hue, 1.0, 0.6),
            alpha: p.alpha,
            size: p.size,
        }
    }
}
