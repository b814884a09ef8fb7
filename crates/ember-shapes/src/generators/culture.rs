//! Festival and folklore motifs

use super::{curve, scatter, segments};
use crate::point::ShapePoint;
use ember_core::Vec3;
use ember_particles::{BehaviorKind, ParticleRng};
use std::f32::consts::{PI, TAU};

pub fn lantern(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            match i % 8 {
                // Ellipsoid body
                0..=5 => {
                    let d = rng.unit_sphere();
                    ShapePoint::new(Vec3::new(d.x * 0.7, d.y * 0.9, d.z * 0.7))
                        .with_hue_offset(rng.range(-8.0, 8.0))
                }
                // Caps
                6 => {
                    let a = rng.angle();
                    let y = if rng.next_f32() < 0.5 { 0.92 } else { -0.92 };
                    ShapePoint::new(Vec3::new(0.3 * a.cos(), y, 0.3 * a.sin()))
                }
                // Tassel
                _ => ShapePoint::new(Vec3::new(0.0, rng.range(-1.5, -0.95), 0.0))
                    .with_hue_offset(45.0),
            }
        })
        .collect()
}

pub fn fan(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let ribs = 7;
            if i % 5 == 0 {
                // Outer rim arc
                let a = rng.range(PI * 0.2, PI * 0.8);
                ShapePoint::new(Vec3::new(a.cos(), a.sin(), 0.0))
            } else {
                let rib = i % ribs;
                let a = PI * 0.2 + (rib as f32 / (ribs - 1) as f32) * PI * 0.6;
                let r = rng.next_f32();
                ShapePoint::new(Vec3::new(r * a.cos(), r * a.sin(), 0.0) + rng.jitter(0.01))
            }
        })
        .collect()
}

pub fn pagoda(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let tier = rng.index(3);
        let y = -0.8 + tier as f32 * 0.75;
        let radius = 1.0 - tier as f32 * 0.28;
        if rng.next_f32() < 0.2 {
            // Center column
            Vec3::new(0.05 * rng.range(-1.0, 1.0), rng.range(-1.0, 1.2), 0.0)
        } else {
            // Eave ring, drooping at the rim
            let a = rng.angle();
            let r = rng.range(0.4, 1.0) * radius;
            Vec3::new(r * a.cos(), y + (1.0 - r / radius) * 0.18, r * a.sin())
        }
    })
}

pub fn torii(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let segs = [
        // Pillars
        (Vec3::new(-0.6, -1.0, 0.0), Vec3::new(-0.6, 0.7, 0.0)),
        (Vec3::new(0.6, -1.0, 0.0), Vec3::new(0.6, 0.7, 0.0)),
        // Lower beam
        (Vec3::new(-0.75, 0.55, 0.0), Vec3::new(0.75, 0.55, 0.0)),
        // Curved top lintel approximated by three chords
        (Vec3::new(-1.0, 0.95, 0.0), Vec3::new(-0.35, 1.05, 0.0)),
        (Vec3::new(-0.35, 1.05, 0.0), Vec3::new(0.35, 1.05, 0.0)),
        (Vec3::new(0.35, 1.05, 0.0), Vec3::new(1.0, 0.95, 0.0)),
    ];
    segments(count, &segs, 0.025, rng)
}

pub fn koi(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            if i % 6 == 5 {
                // Tail fan
                let a = rng.range(-0.5, 0.5);
                let r = rng.range(0.0, 0.35);
                ShapePoint::new(Vec3::new(-1.0 - r * a.cos(), r * a.sin(), 0.0))
                    .with_hue_offset(-20.0)
            } else {
                // Body: tapering ellipse with a swimming bend
                let x = t * 2.0 - 1.0;
                let w = (PI * t).sin() * 0.38;
                let bend = (t * PI * 1.5).sin() * 0.15;
                let y = rng.range(-w, w) + bend;
                let hue = if (y - bend).abs() > w * 0.6 { 30.0 } else { 0.0 };
                ShapePoint::new(Vec3::new(x, y, rng.range(-0.08, 0.08))).with_hue_offset(hue)
            }
        })
        .collect()
}

pub fn dragon(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            // Serpentine body winding through 3D
            let a = t * 2.0 * TAU;
            let body = Vec3::new(
                t * 2.4 - 1.2,
                (a * 1.0).sin() * 0.4,
                (a * 0.7).cos() * 0.25,
            );
            if t > 0.92 {
                // Head cluster with horns
                ShapePoint::new(body + rng.jitter(0.12))
                    .with_hue_offset(30.0)
                    .with_size(1.4)
            } else {
                // Hue shifts along the body for a scaled gradient
                ShapePoint::new(body + rng.jitter(0.05)).with_hue_offset(t * 50.0)
            }
        })
        .collect()
}

pub fn phoenix(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = rng.next_f32();
            match i % 5 {
                // Body arc
                0 => {
                    let a = t * PI * 0.6 + PI * 0.2;
                    ShapePoint::new(Vec3::new(a.cos() * 0.4, a.sin() * 0.6 - 0.2, 0.0))
                        .with_hue_offset(10.0)
                        .with_size(1.2)
                }
                // Wings: two swept arcs, fire gradient toward the tips
                1 | 2 => {
                    let side = if i % 5 == 1 { 1.0 } else { -1.0 };
                    let a = t * PI * 0.5;
                    let p = Vec3::new(
                        side * (0.25 + a.sin() * 1.0),
                        0.15 + a.cos() * 0.45 - t * 0.25,
                        t * 0.2 * side,
                    );
                    ShapePoint::new(p + rng.jitter(0.03)).with_hue_offset(t * 40.0)
                }
                // Tail streamers, drooping
                _ => {
                    let stream = (i / 5) % 3;
                    let spread = (stream as f32 - 1.0) * 0.28;
                    let p = Vec3::new(
                        spread * t - (0.2 + t * 0.5) * 0.3,
                        -0.3 - t * 1.1 + (t * 7.0 + stream as f32).sin() * 0.08,
                        spread * 0.4,
                    );
                    ShapePoint::new(p)
                        .with_hue_offset(50.0 + t * 10.0)
                        .with_behavior(BehaviorKind::Comet)
                }
            }
        })
        .collect()
}

pub fn crown(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let a = rng.angle();
        if rng.next_f32() < 0.45 {
            // Band
            Vec3::new(a.cos(), rng.range(-0.25, 0.0), a.sin())
        } else {
            // Zigzag spikes above the band
            let spikes = 8.0;
            let peak = 1.0 - ((a * spikes / TAU * 2.0) % 2.0 - 1.0).abs();
            let h = rng.next_f32() * peak * 0.7;
            Vec3::new(a.cos(), h, a.sin())
        }
    })
}

pub fn bell(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        if rng.next_f32() < 0.06 {
            // Clapper
            return Vec3::new(0.0, rng.range(-1.05, -0.85), 0.0);
        }
        // Surface of revolution with a flared mouth
        let y = rng.range(-0.8, 0.8);
        let t = (0.8 - y) / 1.6;
        let r = 0.25 + 0.75 * t.powf(1.8);
        let a = rng.angle();
        Vec3::new(r * a.cos(), y, r * a.sin())
    })
}

pub fn umbrella(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        if rng.next_f32() < 0.15 {
            // Handle
            Vec3::new(0.0, rng.range(-1.0, 0.4), 0.0)
        } else {
            // Shallow canopy with scalloped rim
            let a = rng.angle();
            let r = rng.next_f32().sqrt();
            let scallop = ((a * 8.0).sin() * 0.04) * r;
            Vec3::new(r * a.cos(), 0.5 - r * r * 0.35 - scallop, r * a.sin())
        }
    })
}

pub fn kite(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let v = [
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.55, 0.25, 0.0),
        Vec3::new(0.0, -0.45, 0.0),
        Vec3::new(-0.55, 0.25, 0.0),
    ];
    (0..count)
        .map(|i| {
            if i % 4 == 3 {
                // Swaying tail
                let t = rng.next_f32();
                let p = Vec3::new((t * 10.0).sin() * 0.15, -0.45 - t * 1.2, 0.0);
                ShapePoint::new(p).with_hue_offset(30.0)
            } else {
                let edge = i % 4;
                let (a, b) = (v[edge], v[(edge + 1) % 4]);
                ShapePoint::new(a.lerp(&b, rng.next_f32()) + rng.jitter(0.015))
            }
        })
        .collect()
}

pub fn gourd(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let d = rng.unit_sphere();
        if rng.next_f32() < 0.6 {
            // Lower lobe
            Vec3::new(d.x * 0.8, d.y * 0.8 - 0.5, d.z * 0.8)
        } else {
            // Upper lobe
            Vec3::new(d.x * 0.5, d.y * 0.5 + 0.55, d.z * 0.5)
        }
    })
}

/// Round coin with a square hole
pub fn coin(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| loop {
        let r = rng.next_f32().sqrt();
        let a = rng.angle();
        let p = Vec3::new(r * a.cos(), r * a.sin(), 0.0);
        if p.x.abs() > 0.3 || p.y.abs() > 0.3 {
            return p + Vec3::new(0.0, 0.0, rng.range(-0.03, 0.03));
        }
    })
}

/// Trefoil knot
pub fn knot(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.025, rng, |t| {
        let a = t * TAU;
        Vec3::new(
            (a.sin() + 2.0 * (2.0 * a).sin()) * 0.33,
            (a.cos() - 2.0 * (2.0 * a).cos()) * 0.33,
            -(3.0 * a).sin() * 0.33,
        )
    })
}

pub fn firecracker(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let stick = i % 6;
            if stick == 5 {
                // Fuse sparks at the top
                ShapePoint::new(Vec3::new(
                    rng.range(-0.15, 0.15),
                    rng.range(0.9, 1.2),
                    rng.range(-0.15, 0.15),
                ))
                .with_hue_offset(45.0)
                .with_behavior(BehaviorKind::Glitter)
            } else {
                // Bundle of five cylinders
                let a = stick as f32 / 5.0 * TAU;
                let (cx, cz) = (0.3 * a.cos(), 0.3 * a.sin());
                let ring = rng.angle();
                ShapePoint::new(Vec3::new(
                    cx + 0.14 * ring.cos(),
                    rng.range(-0.9, 0.9),
                    cz + 0.14 * ring.sin(),
                ))
            }
        })
        .collect()
}
