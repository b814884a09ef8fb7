//! Ember Core - Foundational types for the Ember firework simulation
//!
//! This crate provides the types every other Ember crate depends on:
//! - `Vec3` - 3D vector math
//! - `Settings` - host-supplied simulation tuning, tolerant of absent fields
//! - Color conversion helpers for the particle snapshot
//! - Error types and Result alias

mod color;
mod error;
mod math;
mod settings;

pub use color::{hsl_to_rgb, wrap_hue};
pub use error::{EmberError, Result};
pub use math::Vec3;
pub use settings::Settings;
