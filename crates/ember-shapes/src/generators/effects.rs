//! Classic pyrotechnic break styles
//!
//! These reproduce real firework effects rather than pictures: the shape is
//! mostly in the velocity field the orchestrator derives from each offset,
//! so the clouds here encode density and behavior hints.

use super::scatter;
use crate::point::ShapePoint;
use ember_core::Vec3;
use ember_particles::{BehaviorKind, ParticleRng};

/// Filled ball of stars
pub fn peony(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| rng.inside_unit_sphere())
}

/// Dense shell with trailing stars
pub fn chrysanthemum(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let p = ShapePoint::new(rng.unit_sphere());
            if i % 3 == 0 {
                p.with_behavior(BehaviorKind::Comet)
            } else {
                p
            }
        })
        .collect()
}

/// Sparse shell of oversized stars
pub fn dahlia(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|_| {
            ShapePoint::new(rng.unit_sphere() * rng.range(0.85, 1.0)).with_size(1.8)
        })
        .collect()
}

/// Several offset sub-bursts
pub fn crossette(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    const CENTERS: [Vec3; 5] = [
        Vec3::new(0.0, 0.6, 0.0),
        Vec3::new(0.65, -0.3, 0.35),
        Vec3::new(-0.65, -0.3, 0.35),
        Vec3::new(0.0, -0.3, -0.7),
        Vec3::new(0.0, 0.0, 0.0),
    ];
    (0..count)
        .map(|i| {
            let c = CENTERS[i % CENTERS.len()];
            ShapePoint::new(c + rng.unit_sphere() * 0.3)
        })
        .collect()
}

/// Upward spray cone
pub fn fountain(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let a = rng.angle();
        let t = rng.next_f32();
        let r = t * 0.5;
        Vec3::new(r * a.cos(), t, r * a.sin())
    })
}

/// Drooping curtain of long-lived stars
pub fn waterfall(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|_| {
            let a = rng.angle();
            let r = rng.range(0.6, 1.0);
            let droop = rng.next_f32();
            let p = Vec3::new(r * a.cos(), -droop * 1.2, r * a.sin());
            ShapePoint::new(p).with_behavior(BehaviorKind::Willow)
        })
        .collect()
}

/// Shell that blinks instead of fading
pub fn strobe(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|_| {
            ShapePoint::new(rng.unit_sphere() * rng.next_f32().sqrt())
                .with_behavior(BehaviorKind::Glitter)
        })
        .collect()
}

/// Small contrasting core inside an outer shell
pub fn pistil(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            if i % 3 == 0 {
                ShapePoint::new(rng.inside_unit_sphere() * 0.35).with_hue_offset(120.0)
            } else {
                ShapePoint::new(rng.unit_sphere())
            }
        })
        .collect()
}

/// Heavy gold shell with long trails
pub fn brocade(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|_| {
            ShapePoint::new(rng.unit_sphere())
                .with_hue_offset(45.0)
                .with_behavior(BehaviorKind::Comet)
        })
        .collect()
}

/// Spine with angled ribs
pub fn fishbone(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            if i % 5 == 0 {
                ShapePoint::new(Vec3::new(rng.range(-1.0, 1.0), 0.0, 0.0) + rng.jitter(0.01))
            } else {
                let rib = (i / 5) % 9;
                let x = (rib as f32 / 8.0) * 1.8 - 0.9;
                let side = if i % 2 == 0 { 1.0 } else { -1.0 };
                let t = rng.next_f32();
                ShapePoint::new(Vec3::new(x - t * 0.3, side * t * 0.5, 0.0))
            }
        })
        .collect()
}
