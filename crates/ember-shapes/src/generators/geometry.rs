//! Geometric primitives
//!
//! Flat motifs live in the XY plane (facing the viewer); volumetric ones are
//! centered on the origin. Raw extents are arbitrary since the registry
//! normalizes them.

use super::{curve, scatter, segments};
use crate::point::ShapePoint;
use ember_core::Vec3;
use ember_particles::ParticleRng;
use std::f32::consts::{PI, TAU};

/// Uniform spherical shell, the default explosion and the fallback kind
pub fn sphere(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| rng.unit_sphere())
}

pub fn ring(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.02, rng, |t| {
        let a = t * TAU;
        Vec3::new(a.cos(), a.sin(), 0.0)
    })
}

pub fn disc(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let r = rng.next_f32().sqrt();
        let a = rng.angle();
        Vec3::new(r * a.cos(), r * a.sin(), 0.0)
    })
}

pub fn cube(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    const V: [Vec3; 8] = [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    // Edges read as structure; faces fill the silhouette
    let edge_count = count * 3 / 5;
    let mut points = Vec::with_capacity(count);
    for i in 0..edge_count {
        let (a, b) = EDGES[i % EDGES.len()];
        points.push(ShapePoint::new(V[a].lerp(&V[b], rng.next_f32())));
    }
    for i in edge_count..count {
        let axis = i % 6;
        let u = rng.range(-1.0, 1.0);
        let v = rng.range(-1.0, 1.0);
        let p = match axis {
            0 => Vec3::new(1.0, u, v),
            1 => Vec3::new(-1.0, u, v),
            2 => Vec3::new(u, 1.0, v),
            3 => Vec3::new(u, -1.0, v),
            4 => Vec3::new(u, v, 1.0),
            _ => Vec3::new(u, v, -1.0),
        };
        points.push(ShapePoint::new(p));
    }
    points
}

pub fn pyramid(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let apex = Vec3::new(0.0, 1.4, 0.0);
    let base = [
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(-1.0, 0.0, 1.0),
    ];
    let segs = [
        (base[0], base[1]),
        (base[1], base[2]),
        (base[2], base[3]),
        (base[3], base[0]),
        (base[0], apex),
        (base[1], apex),
        (base[2], apex),
        (base[3], apex),
    ];
    segments(count, &segs, 0.02, rng)
}

/// Octahedron wireframe
pub fn diamond(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let v = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.4, 0.0),
        Vec3::new(0.0, -1.4, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];
    let segs = [
        (v[2], v[0]),
        (v[2], v[1]),
        (v[2], v[4]),
        (v[2], v[5]),
        (v[3], v[0]),
        (v[3], v[1]),
        (v[3], v[4]),
        (v[3], v[5]),
        (v[0], v[4]),
        (v[4], v[1]),
        (v[1], v[5]),
        (v[5], v[0]),
    ];
    segments(count, &segs, 0.015, rng)
}

fn star(count: usize, spikes: usize, inner: f32, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let n = spikes * 2;
    let verts: Vec<Vec3> = (0..n)
        .map(|i| {
            let r = if i % 2 == 0 { 1.0 } else { inner };
            let a = i as f32 / n as f32 * TAU + PI / 2.0;
            Vec3::new(r * a.cos(), r * a.sin(), 0.0)
        })
        .collect();
    let segs: Vec<(Vec3, Vec3)> = (0..n).map(|i| (verts[i], verts[(i + 1) % n])).collect();
    segments(count, &segs, 0.02, rng)
}

pub fn star5(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    star(count, 5, 0.42, rng)
}

pub fn star6(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    star(count, 6, 0.52, rng)
}

pub fn heart(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.04, rng, |t| {
        let a = t * TAU;
        let x = 16.0 * a.sin().powi(3);
        let y = 13.0 * a.cos() - 5.0 * (2.0 * a).cos() - 2.0 * (3.0 * a).cos() - (4.0 * a).cos();
        Vec3::new(x / 16.0, y / 16.0, 0.0)
    })
}

pub fn spiral(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.02, rng, |t| {
        let a = t * 3.0 * TAU;
        let r = 0.12 + 0.88 * t;
        Vec3::new(r * a.cos(), r * a.sin(), 0.0)
    })
}

pub fn double_spiral(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let arm = (i % 2) as f32 * PI;
            let a = t * 2.5 * TAU + arm;
            let r = 0.12 + 0.88 * t;
            ShapePoint::new(Vec3::new(r * a.cos(), r * a.sin(), 0.0) + rng.jitter(0.02))
        })
        .collect()
}

pub fn helix(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.02, rng, |t| {
        let a = t * 4.0 * PI;
        Vec3::new(0.6 * a.cos(), 2.0 * t - 1.0, 0.6 * a.sin())
    })
}

pub fn torus(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let u = rng.angle();
        let v = rng.angle();
        let r = 1.0 + 0.35 * v.cos();
        Vec3::new(r * u.cos(), 0.35 * v.sin(), r * u.sin())
    })
}

pub fn cylinder(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let a = rng.angle();
        Vec3::new(a.cos(), rng.range(-1.0, 1.0), a.sin())
    })
}

pub fn cone(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let y = rng.range(-1.0, 1.0);
        let r = (1.0 - y) / 2.0;
        let a = rng.angle();
        Vec3::new(r * a.cos(), y, r * a.sin())
    })
}

pub fn cross(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        if rng.next_f32() < 0.5 {
            Vec3::new(rng.range(-0.22, 0.22), rng.range(-1.0, 1.0), 0.0)
        } else {
            Vec3::new(rng.range(-0.75, 0.75), rng.range(-0.22, 0.22) + 0.25, 0.0)
        }
    })
}

/// Lemniscate of Bernoulli
pub fn infinity(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.03, rng, |t| {
        let a = t * TAU;
        let d = 1.0 + a.sin() * a.sin();
        Vec3::new(a.cos() / d, a.sin() * a.cos() / d, 0.0)
    })
}

pub fn wave(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let x = rng.range(-1.0, 1.0);
        let z = rng.range(-1.0, 1.0);
        Vec3::new(x, 0.35 * (2.0 * PI * x).sin(), z)
    })
}

pub fn grid(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let n = (count as f32).cbrt().ceil().max(2.0) as usize;
    (0..count)
        .map(|i| {
            let (ix, iy, iz) = (i % n, (i / n) % n, i / (n * n) % n);
            let step = 2.0 / (n - 1) as f32;
            let p = Vec3::new(
                ix as f32 * step - 1.0,
                iy as f32 * step - 1.0,
                iz as f32 * step - 1.0,
            );
            ShapePoint::new(p + rng.jitter(0.01))
        })
        .collect()
}

pub fn crescent(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let a = rng.angle();
        // Inner boundary hugs the outer rim at the horns (a = 0)
        let inner = 0.55 + 0.45 * a.cos();
        let r = rng.range(inner.min(0.999), 1.0);
        Vec3::new(r * a.cos(), r * a.sin(), rng.range(-0.03, 0.03))
    })
}
