//! Descriptive output of a shape generator

use ember_core::Vec3;
use ember_particles::BehaviorKind;

/// One point of a generated cloud. Purely descriptive; consumed once at
/// spawn time to initialize a particle.
#[derive(Debug, Clone, Copy)]
pub struct ShapePoint {
    /// Local offset from the explosion center
    pub offset: Vec3,
    /// Added to the firework's base hue
    pub hue_offset: f32,
    /// Render size multiplier suggested by the shape
    pub size_hint: Option<f32>,
    /// Behavior the shape wants for this point (e.g. willow fronds)
    pub behavior_hint: Option<BehaviorKind>,
}

impl ShapePoint {
    pub fn new(offset: Vec3) -> Self {
        Self {
            offset,
            hue_offset: 0.0,
            size_hint: None,
            behavior_hint: None,
        }
    }

    pub fn with_hue_offset(mut self, hue_offset: f32) -> Self {
        self.hue_offset = hue_offset;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size_hint = Some(size);
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorKind) -> Self {
        self.behavior_hint = Some(behavior);
        self
    }
}
