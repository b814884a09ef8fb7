//! Flora and fauna motifs

use super::{curve, rotate_y, segments};
use crate::point::ShapePoint;
use ember_core::Vec3;
use ember_particles::{BehaviorKind, ParticleRng};
use std::f32::consts::{PI, TAU};

/// Rhodonea petals with a warm center
pub fn flower(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let petal_count = count * 4 / 5;
    let mut points: Vec<ShapePoint> = (0..petal_count)
        .map(|i| {
            let a = i as f32 / petal_count as f32 * TAU;
            let r = (4.0 * a).cos().abs().max(0.12);
            ShapePoint::new(Vec3::new(r * a.cos(), r * a.sin(), 0.0) + rng.jitter(0.03))
        })
        .collect();
    for _ in petal_count..count {
        let r = rng.next_f32().sqrt() * 0.15;
        let a = rng.angle();
        points.push(
            ShapePoint::new(Vec3::new(r * a.cos(), r * a.sin(), 0.0)).with_hue_offset(40.0),
        );
    }
    points
}

/// Layered rhodonea bloom
pub fn rose(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.025, rng, |t| {
        let a = t * 4.0 * PI;
        let r = (3.5 * a).cos().abs();
        Vec3::new(r * a.cos(), r * a.sin(), 0.0)
    })
}

/// Temple Fay butterfly curve
pub fn butterfly(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.03, rng, |t| {
        let a = t * 2.0 * TAU;
        let r = a.sin().exp() - 2.0 * (4.0 * a).cos() + ((2.0 * a - PI) / 24.0).sin().powi(5);
        Vec3::new(r * a.sin() * 0.25, r * a.cos() * 0.25, 0.0)
    })
}

fn branch_segments(droop: f32, arms: usize, arm_len: f32) -> Vec<(Vec3, Vec3)> {
    let top = Vec3::new(0.0, 1.0, 0.0);
    let mut segs = vec![(Vec3::new(0.0, -1.0, 0.0), top)];
    for i in 0..arms {
        let a = i as f32 / arms as f32 * TAU;
        let tip = top + Vec3::new(a.cos() * arm_len, -droop, a.sin() * arm_len);
        segs.push((top, tip));
    }
    segs
}

pub fn tree(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    // Upward-angled canopy
    segments(count, &branch_segments(-0.35, 7, 0.7), 0.04, rng)
}

pub fn palm_tree(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let segs = branch_segments(0.55, 6, 0.9);
    (0..count)
        .map(|i| {
            let (a, b) = segs[i % segs.len()];
            let t = rng.next_f32();
            // Fronds bow outward along their length
            let sag = if i % segs.len() == 0 { 0.0 } else { t * t * 0.35 };
            let p = a.lerp(&b, t) - Vec3::new(0.0, sag, 0.0);
            ShapePoint::new(p + rng.jitter(0.03))
        })
        .collect()
}

pub fn willow_tree(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let segs = branch_segments(1.1, 10, 0.6);
    (0..count)
        .map(|i| {
            let seg = i % segs.len();
            let (a, b) = segs[seg];
            let t = rng.next_f32();
            let p = a.lerp(&b, t) + rng.jitter(0.03);
            let point = ShapePoint::new(p);
            if seg == 0 {
                point
            } else {
                point.with_behavior(BehaviorKind::Willow)
            }
        })
        .collect()
}

pub fn leaf(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = rng.next_f32();
            let w = (PI * t).sin() * 0.35;
            let p = match i % 3 {
                0 => Vec3::new(t * 2.0 - 1.0, w, 0.0),
                1 => Vec3::new(t * 2.0 - 1.0, -w, 0.0),
                _ => Vec3::new(t * 2.0 - 1.0, 0.0, 0.0), // midrib
            };
            ShapePoint::new(p + rng.jitter(0.02))
        })
        .collect()
}

pub fn snowflake(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    // One arm: spine plus two spur pairs, rotated six ways
    let spine = [
        (Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)),
        (
            Vec3::new(0.45, 0.0, 0.0),
            Vec3::new(0.7, 0.3, 0.0),
        ),
        (
            Vec3::new(0.45, 0.0, 0.0),
            Vec3::new(0.7, -0.3, 0.0),
        ),
    ];
    (0..count)
        .map(|i| {
            let arm = (i / spine.len()) % 6;
            let (a, b) = spine[i % spine.len()];
            let p = a.lerp(&b, rng.next_f32());
            let rot = arm as f32 / 6.0 * TAU;
            let (s, c) = rot.sin_cos();
            let q = Vec3::new(p.x * c - p.y * s, p.x * s + p.y * c, 0.0);
            ShapePoint::new(q + rng.jitter(0.015))
        })
        .collect()
}

pub fn cloud(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    const BLOBS: [(f32, f32, f32); 5] = [
        (-0.8, 0.0, 0.55),
        (-0.35, 0.18, 0.7),
        (0.1, 0.25, 0.8),
        (0.55, 0.12, 0.65),
        (0.9, -0.05, 0.5),
    ];
    (0..count)
        .map(|i| {
            let (cx, cy, r) = BLOBS[i % BLOBS.len()];
            let offset = rng.inside_unit_sphere() * r;
            // Flatten the underside
            let p = Vec3::new(cx + offset.x, cy + offset.y * 0.5, offset.z * 0.5);
            ShapePoint::new(p)
        })
        .collect()
}

pub fn mushroom(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let cap_count = count * 3 / 5;
    let mut points: Vec<ShapePoint> = (0..cap_count)
        .map(|_| {
            let d = rng.unit_sphere();
            // Upper hemisphere only, squashed into a cap
            ShapePoint::new(Vec3::new(d.x, d.y.abs() * 0.6 + 0.2, d.z))
        })
        .collect();
    for _ in cap_count..count {
        let a = rng.angle();
        points.push(ShapePoint::new(Vec3::new(
            0.25 * a.cos(),
            rng.range(-1.0, 0.2),
            0.25 * a.sin(),
        )));
    }
    points
}

pub fn jellyfish(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    let dome_count = count / 2;
    let mut points: Vec<ShapePoint> = (0..dome_count)
        .map(|_| {
            let d = rng.unit_sphere();
            ShapePoint::new(Vec3::new(d.x * 0.8, d.y.abs() * 0.55 + 0.3, d.z * 0.8))
        })
        .collect();
    for i in dome_count..count {
        let arm = i % 6;
        let a = arm as f32 / 6.0 * TAU;
        let t = rng.next_f32();
        let sway = (t * 9.0 + arm as f32).sin() * 0.12;
        let p = Vec3::new(
            0.45 * a.cos() + sway,
            0.3 - t * 1.5,
            0.45 * a.sin() + sway * 0.6,
        );
        points.push(ShapePoint::new(p).with_behavior(BehaviorKind::Willow));
    }
    points
}

pub fn dragonfly(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            match i % 5 {
                // Long thin body along X
                0 => ShapePoint::new(Vec3::new(
                    rng.range(-1.0, 0.6),
                    rng.range(-0.04, 0.04),
                    0.0,
                )),
                // Four wing ellipses
                w => {
                    let a = rng.angle();
                    let (fx, fy) = if w <= 2 { (0.15, 0.45) } else { (-0.1, 0.4) };
                    let side = if w % 2 == 0 { 1.0 } else { -1.0 };
                    let p = Vec3::new(
                        fx + 0.12 * a.cos(),
                        side * (fy + 0.35 * a.sin().abs()),
                        0.0,
                    );
                    ShapePoint::new(p + rng.jitter(0.02))
                }
            }
        })
        .collect()
}

pub fn feather(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = rng.next_f32();
            match i % 3 {
                0 => ShapePoint::new(Vec3::new(0.0, t * 2.0 - 1.0, 0.0) + rng.jitter(0.01)),
                side => {
                    let y = t * 1.8 - 1.0;
                    let len = 0.5 * (1.0 - (y + 1.0) / 2.0 * 0.6) * (PI * t).sin().max(0.15);
                    let dir = if side == 1 { 1.0 } else { -1.0 };
                    let s = rng.next_f32();
                    ShapePoint::new(Vec3::new(dir * len * s, y + s * 0.22, 0.0))
                }
            }
        })
        .collect()
}

pub fn seashell(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    curve(count, 0.03, rng, |t| {
        let a = t * 3.0 * TAU;
        let r = 0.08 * (0.28 * a).exp();
        Vec3::new(r * a.cos(), t * 0.8 - 0.4, r * a.sin())
    })
}

pub fn vine(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let stem = Vec3::new((t * 3.0 * TAU).sin() * 0.3, t * 2.0 - 1.0, 0.0);
            if i % 4 == 0 {
                // Leaf tufts off the stem
                let tuft = rotate_y(Vec3::new(0.15, 0.0, 0.0), rng.angle());
                ShapePoint::new(stem + tuft + rng.jitter(0.02)).with_hue_offset(25.0)
            } else {
                ShapePoint::new(stem + rng.jitter(0.02))
            }
        })
        .collect()
}
