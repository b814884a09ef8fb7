//! Shape registry and output normalization
//!
//! Kinds map to generator function pointers through a table built once at
//! construction, so adding a shape never touches a central dispatch and the
//! whole catalog is table-testable.

use crate::generators;
use crate::kind::ShapeKind;
use crate::point::ShapePoint;
use ember_particles::ParticleRng;
use std::collections::HashMap;

/// Nominal radius of a normalized cloud at scale 1.0
pub const BASE_RADIUS: f32 = 5.0;

/// A generator produces `count` points in its own raw coordinate space
pub type GeneratorFn = fn(usize, &mut ParticleRng) -> Vec<ShapePoint>;

/// Registry from shape kind to generator
pub struct ShapeRegistry {
    table: HashMap<ShapeKind, GeneratorFn>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self {
            table: generators::catalog().into_iter().collect(),
        }
    }

    /// Generate a normalized point cloud. Unregistered kinds fall back to
    /// the sphere generator rather than failing.
    pub fn generate(
        &self,
        kind: ShapeKind,
        count: usize,
        scale: f32,
        rng: &mut ParticleRng,
    ) -> Vec<ShapePoint> {
        let count = count.max(1);
        let gen = self
            .table
            .get(&kind)
            .copied()
            .unwrap_or(generators::geometry::sphere as GeneratorFn);
        let mut points = gen(count, rng);
        normalize(&mut points, BASE_RADIUS * scale.max(0.01));
        points
    }

    /// All registered kinds, for catalog UIs and table tests
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.table.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Rescale a cloud so its maximum distance from the origin equals `target`.
/// Applied uniformly after generation, independent of the algorithm.
fn normalize(points: &mut [ShapePoint], target: f32) {
    let max = points
        .iter()
        .map(|p| p.offset.length())
        .fold(0.0_f32, f32::max);
    if max > 1e-6 {
        let s = target / max;
        for p in points.iter_mut() {
            p.offset = p.offset * s;
        }
    }
}
