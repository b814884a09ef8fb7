//! Astronomical motifs

use super::scatter;
use crate::point::ShapePoint;
use ember_core::Vec3;
use ember_particles::{BehaviorKind, ParticleRng};
use std::f32::consts::TAU;

pub fn galaxy_spiral(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            if i % 5 == 0 {
                // Central bulge
                let p = rng.inside_unit_sphere() * 0.25;
                ShapePoint::new(Vec3::new(p.x, p.y * 0.5, p.z))
                    .with_hue_offset(40.0)
                    .with_behavior(BehaviorKind::Galaxy)
            } else {
                // Three logarithmic arms in the XZ plane
                let arm = i % 3;
                let t = rng.next_f32();
                let a = t * 1.6 * TAU + arm as f32 / 3.0 * TAU;
                let r = 0.12 * (1.35 * t * TAU * 0.25).exp().min(8.0);
                let spread = r * 0.18;
                let p = Vec3::new(
                    r * a.cos() + rng.range(-spread, spread),
                    rng.range(-0.05, 0.05),
                    r * a.sin() + rng.range(-spread, spread),
                );
                ShapePoint::new(p)
                    .with_hue_offset(t * -30.0)
                    .with_behavior(BehaviorKind::Galaxy)
            }
        })
        .collect()
}

pub fn nebula(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    const CLUMPS: [(f32, f32, f32, f32); 4] = [
        (-0.5, 0.2, 0.0, 0.6),
        (0.3, -0.1, 0.3, 0.8),
        (0.1, 0.4, -0.4, 0.5),
        (-0.2, -0.4, 0.2, 0.55),
    ];
    (0..count)
        .map(|i| {
            let (cx, cy, cz, r) = CLUMPS[i % CLUMPS.len()];
            let p = Vec3::new(cx, cy, cz) + rng.inside_unit_sphere() * r;
            ShapePoint::new(p)
                .with_hue_offset(rng.range(-40.0, 40.0))
                .with_behavior(BehaviorKind::Ghost)
        })
        .collect()
}

pub fn comet_tail(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            if i % 4 == 0 {
                // Bright head
                ShapePoint::new(Vec3::new(0.9, 0.3, 0.0) + rng.inside_unit_sphere() * 0.18)
                    .with_size(1.5)
                    .with_behavior(BehaviorKind::Comet)
            } else {
                // Tapering tail sweeping down-left
                let t = rng.next_f32();
                let spread = 0.05 + t * 0.3;
                let p = Vec3::new(0.9 - t * 2.0, 0.3 - t * 0.8, 0.0) + rng.jitter(spread);
                ShapePoint::new(p).with_hue_offset(t * -25.0)
            }
        })
        .collect()
}

pub fn meteor_shower(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    const STREAKS: usize = 7;
    (0..count)
        .map(|i| {
            let streak = i % STREAKS;
            let ox = (streak as f32 / STREAKS as f32) * 2.0 - 1.0;
            let oy = ((streak * 5) % STREAKS) as f32 / STREAKS as f32 * 0.8;
            let t = rng.next_f32();
            // Parallel diagonal streaks
            let p = Vec3::new(ox + t * 0.8, oy + 0.4 - t * 1.2, rng.range(-0.1, 0.1));
            let point = ShapePoint::new(p);
            if t < 0.15 {
                point.with_size(1.3).with_behavior(BehaviorKind::Comet)
            } else {
                point
            }
        })
        .collect()
}

pub fn ringed_planet(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        if rng.next_f32() < 0.55 {
            rng.unit_sphere() * 0.55
        } else {
            // Tilted annulus
            let a = rng.angle();
            let r = rng.range(0.75, 1.0);
            // Fixed ring tilt around X
            let tilt = 0.4_f32;
            let (s, c) = tilt.sin_cos();
            let z = r * a.sin();
            Vec3::new(r * a.cos(), z * s, z * c)
        }
    })
}

pub fn sun(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            if i % 3 != 0 {
                ShapePoint::new(rng.inside_unit_sphere() * 0.55).with_hue_offset(10.0)
            } else {
                // Radial flares
                let flare = (i / 3) % 12;
                let a = flare as f32 / 12.0 * TAU;
                let t = rng.next_f32();
                let r = 0.55 + t * 0.6;
                let p = Vec3::new(r * a.cos(), r * a.sin(), rng.range(-0.05, 0.05));
                ShapePoint::new(p).with_hue_offset(-15.0 * t)
            }
        })
        .collect()
}

pub fn crescent_moon(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    scatter(count, rng, |rng| {
        let a = rng.angle();
        let inner = 0.6 + 0.4 * a.cos();
        let r = rng.range(inner.min(0.999), 1.0);
        Vec3::new(r * a.cos(), r * a.sin(), rng.range(-0.04, 0.04))
    })
    .into_iter()
    .map(|p| p.with_hue_offset(-30.0))
    .collect()
}

pub fn constellation(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    // A fixed dipper-like asterism: bright stars joined by faint lines
    const STARS: [(f32, f32); 7] = [
        (-1.0, 0.3),
        (-0.55, 0.45),
        (-0.1, 0.35),
        (0.3, 0.15),
        (0.75, 0.2),
        (0.85, -0.3),
        (0.35, -0.35),
    ];
    (0..count)
        .map(|i| {
            if i % 6 == 0 {
                let (x, y) = STARS[(i / 6) % STARS.len()];
                ShapePoint::new(Vec3::new(x, y, 0.0))
                    .with_size(1.6)
                    .with_behavior(BehaviorKind::Glitter)
            } else {
                let seg = i % (STARS.len() - 1);
                let (ax, ay) = STARS[seg];
                let (bx, by) = STARS[seg + 1];
                let t = rng.next_f32();
                let p = Vec3::new(ax + (bx - ax) * t, ay + (by - ay) * t, 0.0);
                ShapePoint::new(p + rng.jitter(0.01)).with_size(0.5)
            }
        })
        .collect()
}

pub fn black_hole(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            if i % 8 == 7 {
                // Polar jets
                let dir = if rng.next_f32() < 0.5 { 1.0 } else { -1.0 };
                let t = rng.next_f32();
                ShapePoint::new(Vec3::new(
                    rng.range(-0.06, 0.06),
                    dir * (0.2 + t * 1.1),
                    rng.range(-0.06, 0.06),
                ))
                .with_hue_offset(60.0)
            } else {
                // Accretion disc, denser toward the inner edge
                let a = rng.angle();
                let r = 0.35 + 0.65 * rng.next_f32().powi(2);
                let p = Vec3::new(r * a.cos(), rng.range(-0.03, 0.03), r * a.sin());
                ShapePoint::new(p)
                    .with_hue_offset(-(1.0 - r) * 50.0)
                    .with_behavior(BehaviorKind::Galaxy)
            }
        })
        .collect()
}

pub fn supernova(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                ShapePoint::new(rng.inside_unit_sphere() * 0.3)
                    .with_hue_offset(30.0)
                    .with_size(1.3)
            } else {
                // Rays from the core
                let dir = rng.unit_sphere();
                let t = rng.next_f32();
                ShapePoint::new(dir * (0.3 + t * 0.9)).with_hue_offset(-t * 40.0)
            }
        })
        .collect()
}

pub fn star_cluster(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    const CORES: [(f32, f32, f32); 6] = [
        (0.0, 0.0, 0.0),
        (-0.7, 0.3, 0.2),
        (0.6, 0.5, -0.3),
        (0.4, -0.6, 0.4),
        (-0.5, -0.4, -0.5),
        (0.1, 0.7, 0.6),
    ];
    (0..count)
        .map(|i| {
            let (cx, cy, cz) = CORES[i % CORES.len()];
            let p = Vec3::new(cx, cy, cz) + rng.inside_unit_sphere() * 0.3;
            ShapePoint::new(p).with_behavior(BehaviorKind::Glitter)
        })
        .collect()
}

pub fn pulsar(count: usize, rng: &mut ParticleRng) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| match i % 4 {
            0 => ShapePoint::new(rng.inside_unit_sphere() * 0.2).with_size(1.5),
            1 => {
                // Equatorial ring
                let a = rng.angle();
                ShapePoint::new(Vec3::new(0.7 * a.cos(), rng.range(-0.03, 0.03), 0.7 * a.sin()))
            }
            _ => {
                // Opposed lighthouse beams
                let dir = if i % 4 == 2 { 1.0 } else { -1.0 };
                let t = rng.next_f32();
                ShapePoint::new(Vec3::new(
                    dir * (0.2 + t * 1.0),
                    dir * (0.1 + t * 0.5),
                    rng.range(-0.05, 0.05),
                ))
                .with_behavior(BehaviorKind::Glitter)
            }
        })
        .collect()
}
