//! Host-supplied simulation tuning
//!
//! The host hands the core a plain settings struct; the core reads it and
//! never writes it back. Every field has a documented default and may be
//! absent from the TOML side.

use serde::{Deserialize, Serialize};

fn default_gravity() -> f32 {
    9.8
}
fn default_friction() -> f32 {
    0.98
}
fn default_count_multiplier() -> f32 {
    1.0
}
fn default_size_multiplier() -> f32 {
    1.0
}
fn default_trail_length() -> usize {
    8
}
fn default_max_particles() -> usize {
    20_000
}

/// Simulation tuning knobs read by the core each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Downward acceleration applied to particles and rockets
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Base per-particle velocity retention factor (per 60Hz frame)
    #[serde(default = "default_friction")]
    pub friction: f32,
    /// Scales the particle count of every explosion stage
    #[serde(default = "default_count_multiplier")]
    pub particle_count_multiplier: f32,
    /// Scales the spatial extent of every explosion stage
    #[serde(default = "default_size_multiplier")]
    pub explosion_size_multiplier: f32,
    /// Trail buffer length for comet/willow behaviors
    #[serde(default = "default_trail_length")]
    pub trail_length: usize,
    /// Particle pool capacity
    #[serde(default = "default_max_particles")]
    pub max_particles: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            friction: default_friction(),
            particle_count_multiplier: default_count_multiplier(),
            explosion_size_multiplier: default_size_multiplier(),
            trail_length: default_trail_length(),
            max_particles: default_max_particles(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML table, falling back to defaults for any
    /// absent or malformed field.
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut settings = Self::default();

        if let Some(v) = table.get("gravity") {
            settings.gravity = toml_f32(v, settings.gravity);
        }
        if let Some(v) = table.get("friction") {
            settings.friction = toml_f32(v, settings.friction);
        }
        if let Some(v) = table.get("particle_count_multiplier") {
            settings.particle_count_multiplier = toml_f32(v, settings.particle_count_multiplier);
        }
        if let Some(v) = table.get("explosion_size_multiplier") {
            settings.explosion_size_multiplier = toml_f32(v, settings.explosion_size_multiplier);
        }
        if let Some(v) = table.get("trail_length") {
            settings.trail_length = toml_usize(v, settings.trail_length);
        }
        if let Some(v) = table.get("max_particles") {
            settings.max_particles = toml_usize(v, settings.max_particles).max(1);
        }

        settings
    }
}

// TOML helper (handles integer/float coercion)
fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

// Negative values are malformed, not a huge wrapped count
fn toml_usize(v: &toml::Value, default: usize) -> usize {
    v.as_integer()
        .filter(|n| *n >= 0)
        .map(|n| n as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_sane() {
        let s = Settings::default();
        assert!(s.gravity > 0.0);
        assert!(s.friction > 0.0 && s.friction <= 1.0);
        assert!(s.max_particles > 0);
    }

    #[test]
    fn parse_from_toml_partial() {
        let toml_str = r#"
gravity = 12.5
particle_count_multiplier = 2
"#;
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let s = Settings::from_toml(&table);
        assert!((s.gravity - 12.5).abs() < 0.01);
        // Integer coerced to float
        assert!((s.particle_count_multiplier - 2.0).abs() < 0.01);
        // Absent fields fall back
        assert_eq!(s.trail_length, Settings::default().trail_length);
    }

    #[test]
    fn negative_counts_fall_back_to_defaults() {
        let toml_str = r#"
max_particles = -5
trail_length = -1
"#;
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let s = Settings::from_toml(&table);
        // A wrapped cast here would ask the pool for ~1.8e19 slots
        assert_eq!(s.max_particles, Settings::default().max_particles);
        assert_eq!(s.trail_length, Settings::default().trail_length);
    }

    #[test]
    fn serde_absent_fields_use_defaults() {
        let s: Settings = toml::from_str("gravity = 5.0").unwrap();
        assert!((s.gravity - 5.0).abs() < 0.01);
        assert_eq!(s.max_particles, Settings::default().max_particles);
    }
}
