//! Classic: balanced single-field world

use crate::biomes::BiomeLabel;
use crate::seeds::WorldSeeds;
use crate::synthesis::coherent_field;
use crate::tilemap::Tilemap;

const HEIGHT_RADIUS: usize = 3;
const HEIGHT_MODIFIER: f32 = 0.7;

/// Classify one tile from its height and biome-variety values.
pub fn classify(height: f32, variety: f32) -> BiomeLabel {
    if height < 0.3 {
        if height < 0.15 {
            BiomeLabel::DeepWater
        } else {
            BiomeLabel::ShallowWater
        }
    } else if height < 0.4 {
        BiomeLabel::Sand
    } else if height < 0.8 {
        if variety < 0.3 {
            BiomeLabel::Savanna
        } else if variety < 0.6 {
            BiomeLabel::Grass
        } else if variety < 0.85 {
            BiomeLabel::Forest
        } else {
            BiomeLabel::Jungle
        }
    } else if height > 0.9 {
        BiomeLabel::Snow
    } else if variety < 0.5 {
        BiomeLabel::Hills
    } else {
        BiomeLabel::Mountains
    }
}

pub fn generate(width: usize, height: usize, seeds: &WorldSeeds) -> Tilemap<BiomeLabel> {
    let height_field = coherent_field(width, height, seeds.height, HEIGHT_RADIUS, HEIGHT_MODIFIER);
    let variety = super::variety_channel(width, height, seeds);

    super::classify_cells(width, height, |x, y| {
        classify(*height_field.get(x, y), *variety.get(x, y))
    })
}
