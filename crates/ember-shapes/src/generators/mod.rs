//! The generator catalog and shared sampling helpers
//!
//! Generators work in whatever raw coordinate space is convenient; the
//! registry normalizes extents afterwards. Each returns exactly `count`
//! points: structural shapes distribute indices across their features
//! round-robin instead of truncating.

pub mod cosmos;
pub mod culture;
pub mod effects;
pub mod geometry;
pub mod nature;

use crate::kind::ShapeKind;
use crate::point::ShapePoint;
use crate::registry::GeneratorFn;
use ember_core::Vec3;
use ember_particles::ParticleRng;

/// Every registered (kind, generator) pair
pub(crate) fn catalog() -> Vec<(ShapeKind, GeneratorFn)> {
    use ShapeKind::*;
    vec![
        // Geometry
        (Sphere, geometry::sphere as GeneratorFn),
        (Ring, geometry::ring),
        (Disc, geometry::disc),
        (Cube, geometry::cube),
        (Pyramid, geometry::pyramid),
        (Diamond, geometry::diamond),
        (Star, geometry::star5),
        (Star6, geometry::star6),
        (Heart, geometry::heart),
        (Spiral, geometry::spiral),
        (DoubleSpiral, geometry::double_spiral),
        (Helix, geometry::helix),
        (Torus, geometry::torus),
        (Cylinder, geometry::cylinder),
        (Cone, geometry::cone),
        (Cross, geometry::cross),
        (Infinity, geometry::infinity),
        (Wave, geometry::wave),
        (Grid, geometry::grid),
        (Crescent, geometry::crescent),
        // Nature
        (Flower, nature::flower),
        (Rose, nature::rose),
        (Butterfly, nature::butterfly),
        (Tree, nature::tree),
        (PalmTree, nature::palm_tree),
        (WillowTree, nature::willow_tree),
        (Leaf, nature::leaf),
        (Snowflake, nature::snowflake),
        (Cloud, nature::cloud),
        (Mushroom, nature::mushroom),
        (Jellyfish, nature::jellyfish),
        (Dragonfly, nature::dragonfly),
        (Feather, nature::feather),
        (Seashell, nature::seashell),
        (Vine, nature::vine),
        // Culture
        (Lantern, culture::lantern),
        (Fan, culture::fan),
        (Pagoda, culture::pagoda),
        (Torii, culture::torii),
        (Koi, culture::koi),
        (Dragon, culture::dragon),
        (Phoenix, culture::phoenix),
        (Crown, culture::crown),
        (Bell, culture::bell),
        (Umbrella, culture::umbrella),
        (Kite, culture::kite),
        (Gourd, culture::gourd),
        (Coin, culture::coin),
        (Knot, culture::knot),
        (Firecracker, culture::firecracker),
        // Cosmos
        (GalaxySpiral, cosmos::galaxy_spiral),
        (Nebula, cosmos::nebula),
        (CometTail, cosmos::comet_tail),
        (MeteorShower, cosmos::meteor_shower),
        (RingedPlanet, cosmos::ringed_planet),
        (Sun, cosmos::sun),
        (CrescentMoon, cosmos::crescent_moon),
        (Constellation, cosmos::constellation),
        (BlackHole, cosmos::black_hole),
        (Supernova, cosmos::supernova),
        (StarCluster, cosmos::star_cluster),
        (Pulsar, cosmos::pulsar),
        // Effects
        (Peony, effects::peony),
        (Chrysanthemum, effects::chrysanthemum),
        (Dahlia, effects::dahlia),
        (Crossette, effects::crossette),
        (Fountain, effects::fountain),
        (Waterfall, effects::waterfall),
        (Strobe, effects::strobe),
        (Pistil, effects::pistil),
        (Brocade, effects::brocade),
        (Fishbone, effects::fishbone),
    ]
}

// Shared sampling helpers

/// Sample a parametric curve at evenly spaced t in [0, 1), with jitter
pub(crate) fn curve(
    count: usize,
    jitter: f32,
    rng: &mut ParticleRng,
    f: impl Fn(f32) -> Vec3,
) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            ShapePoint::new(f(t) + rng.jitter(jitter))
        })
        .collect()
}

/// Sample from a fixed set of line segments, round-robin across segments
pub(crate) fn segments(
    count: usize,
    segs: &[(Vec3, Vec3)],
    jitter: f32,
    rng: &mut ParticleRng,
) -> Vec<ShapePoint> {
    (0..count)
        .map(|i| {
            let (a, b) = segs[i % segs.len()];
            ShapePoint::new(a.lerp(&b, rng.next_f32()) + rng.jitter(jitter))
        })
        .collect()
}

/// Draw `count` samples from a per-point closure
pub(crate) fn scatter(
    count: usize,
    rng: &mut ParticleRng,
    mut f: impl FnMut(&mut ParticleRng) -> Vec3,
) -> Vec<ShapePoint> {
    (0..count).map(|_| ShapePoint::new(f(rng))).collect()
}

/// Rotate a point around the Y axis
pub(crate) fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c)
}
