//! Biome labels for tile worlds
//!
//! Every generated tile carries exactly one label. Walkability is consumed by
//! the game-map simulation; colour is presentation metadata used by the
//! exporters and test fixtures.

use serde::{Deserialize, Serialize};

/// Discrete terrain classification for a single tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeLabel {
    DeepWater,
    ShallowWater,
    Sand,
    #[default]
    Grass,
    Forest,
    Jungle,
    Hills,
    Mountains,
    Snow,
    Desert,
    Savanna,
    Swamp,
    Lava,
    Wall,
}

impl BiomeLabel {
    /// All labels in declaration order.
    pub fn all() -> &'static [BiomeLabel] {
        &[
            BiomeLabel::DeepWater,
            BiomeLabel::ShallowWater,
            BiomeLabel::Sand,
            BiomeLabel::Grass,
            BiomeLabel::Forest,
            BiomeLabel::Jungle,
            BiomeLabel::Hills,
            BiomeLabel::Mountains,
            BiomeLabel::Snow,
            BiomeLabel::Desert,
            BiomeLabel::Savanna,
            BiomeLabel::Swamp,
            BiomeLabel::Lava,
            BiomeLabel::Wall,
        ]
    }

    /// Whether an entity may stand on this tile.
    pub fn is_walkable(&self) -> bool {
        !matches!(
            self,
            BiomeLabel::DeepWater
                | BiomeLabel::ShallowWater
                | BiomeLabel::Mountains
                | BiomeLabel::Lava
                | BiomeLabel::Wall
        )
    }

    pub fn is_water(&self) -> bool {
        matches!(self, BiomeLabel::DeepWater | BiomeLabel::ShallowWater)
    }

    /// Get color for rendering
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            BiomeLabel::DeepWater => (26, 51, 153),
            BiomeLabel::ShallowWater => (51, 102, 204),
            BiomeLabel::Sand => (230, 204, 128),
            BiomeLabel::Grass => (51, 179, 51),
            BiomeLabel::Forest => (0, 128, 51),
            BiomeLabel::Jungle => (0, 153, 26),
            BiomeLabel::Hills => (128, 128, 77),
            BiomeLabel::Mountains => (153, 153, 153),
            BiomeLabel::Snow => (230, 230, 230),
            BiomeLabel::Desert => (204, 179, 51),
            BiomeLabel::Savanna => (204, 179, 77),
            BiomeLabel::Swamp => (77, 102, 51),
            BiomeLabel::Lava => (230, 77, 0),
            BiomeLabel::Wall => (77, 77, 77),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BiomeLabel::DeepWater => "Deep Water",
            BiomeLabel::ShallowWater => "Shallow Water",
            BiomeLabel::Sand => "Sand",
            BiomeLabel::Grass => "Grass",
            BiomeLabel::Forest => "Forest",
            BiomeLabel::Jungle => "Jungle",
            BiomeLabel::Hills => "Hills",
            BiomeLabel::Mountains => "Mountains",
            BiomeLabel::Snow => "Snow",
            BiomeLabel::Desert => "Desert",
            BiomeLabel::Savanna => "Savanna",
            BiomeLabel::Swamp => "Swamp",
            BiomeLabel::Lava => "Lava",
            BiomeLabel::Wall => "Wall",
        }
    }
}
