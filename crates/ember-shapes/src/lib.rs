//! Ember Shapes - Procedural 3D point clouds for shaped explosions
//!
//! A registry of 70+ generators grouped into geometry, nature, culture,
//! cosmos, and effects motifs. Every generator produces exactly the
//! requested number of points in its own raw coordinate space; a mandatory
//! normalization pass then rescales the set so its maximum extent equals
//! `BASE_RADIUS * scale`, giving callers comparable visual size regardless
//! of which algorithm produced the cloud.

mod kind;
mod point;
mod registry;

mod generators;

pub use kind::{ShapeGroup, ShapeKind};
pub use point::ShapePoint;
pub use registry::{ShapeRegistry, BASE_RADIUS};
