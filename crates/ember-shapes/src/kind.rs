//! Shape kinds and their thematic groups

use serde::{Deserialize, Serialize};

/// Thematic grouping, useful for host UIs that organize the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeGroup {
    Geometry,
    Nature,
    Culture,
    Cosmos,
    Effects,
}

/// Every procedural point-cloud motif the engine can explode into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    // Geometry
    #[default]
    Sphere,
    Ring,
    Disc,
    Cube,
    Pyramid,
    Diamond,
    Star,
    Star6,
    Heart,
    Spiral,
    DoubleSpiral,
    Helix,
    Torus,
    Cylinder,
    Cone,
    Cross,
    Infinity,
    Wave,
    Grid,
    Crescent,
    // Nature
    Flower,
    Rose,
    Butterfly,
    Tree,
    PalmTree,
    WillowTree,
    Leaf,
    Snowflake,
    Cloud,
    Mushroom,
    Jellyfish,
    Dragonfly,
    Feather,
    Seashell,
    Vine,
    // Culture
    Lantern,
    Fan,
    Pagoda,
    Torii,
    Koi,
    Dragon,
    Phoenix,
    Crown,
    Bell,
    Umbrella,
    Kite,
    Gourd,
    Coin,
    Knot,
    Firecracker,
    // Cosmos
    GalaxySpiral,
    Nebula,
    CometTail,
    MeteorShower,
    RingedPlanet,
    Sun,
    CrescentMoon,
    Constellation,
    BlackHole,
    Supernova,
    StarCluster,
    Pulsar,
    // Effects
    Peony,
    Chrysanthemum,
    Dahlia,
    Crossette,
    Fountain,
    Waterfall,
    Strobe,
    Pistil,
    Brocade,
    Fishbone,
}

impl ShapeKind {
    pub fn group(&self) -> ShapeGroup {
        use ShapeKind::*;
        match self {
            Sphere | Ring | Disc | Cube | Pyramid | Diamond | Star | Star6 | Heart | Spiral
            | DoubleSpiral | Helix | Torus | Cylinder | Cone | Cross | Infinity | Wave | Grid
            | Crescent => ShapeGroup::Geometry,
            Flower | Rose | Butterfly | Tree | PalmTree | WillowTree | Leaf | Snowflake
            | Cloud | Mushroom | Jellyfish | Dragonfly | Feather | Seashell | Vine => {
                ShapeGroup::Nature
            }
            Lantern | Fan | Pagoda | Torii | Koi | Dragon | Phoenix | Crown | Bell | Umbrella
            | Kite | Gourd | Coin | Knot | Firecracker => ShapeGroup::Culture,
            GalaxySpiral | Nebula | CometTail | MeteorShower | RingedPlanet | Sun
            | CrescentMoon | Constellation | BlackHole | Supernova | StarCluster | Pulsar => {
                ShapeGroup::Cosmos
            }
            Peony | Chrysanthemum | Dahlia | Crossette | Fountain | Waterfall | Strobe
            | Pistil | Brocade | Fishbone => ShapeGroup::Effects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_is_sphere() {
        assert_eq!(ShapeKind::default(), ShapeKind::Sphere);
    }

    #[test]
    fn serde_snake_case_round_trip() {
        let s = toml::to_string(&std::collections::BTreeMap::from([(
            "shape",
            ShapeKind::GalaxySpiral,
        )]))
        .unwrap();
        assert!(s.contains("galaxy_spiral"));
    }
}
