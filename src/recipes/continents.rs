//! Continents: large landmasses with latitude-driven climate bands

use crate::biomes::BiomeLabel;
use crate::seeds::WorldSeeds;
use crate::shaping::latitude_gradient;
use crate::synthesis::coherent_field;
use crate::tilemap::Tilemap;

const HEIGHT_RADIUS: usize = 5;
const HEIGHT_MODIFIER: f32 = 0.8;

// Band edges on the latitude channel. Below COLD_BAND takes the cold set
// (grass/forest), TEMPERATE_BAND and above takes the hot set.
const COLD_BAND: f32 = 0.3;
const TEMPERATE_BAND: f32 = 0.7;

pub fn classify(height: f32, variety: f32, temperature: f32) -> BiomeLabel {
    if height < 0.35 {
        if height < 0.2 {
            BiomeLabel::DeepWater
        } else {
            BiomeLabel::ShallowWater
        }
    } else if height < 0.45 {
        BiomeLabel::Sand
    } else if height < 0.75 {
        if temperature < COLD_BAND {
            if variety < 0.5 {
                BiomeLabel::Grass
            } else {
                BiomeLabel::Forest
            }
        } else if temperature < TEMPERATE_BAND {
            if variety < 0.3 {
                BiomeLabel::Grass
            } else if variety < 0.6 {
                BiomeLabel::Savanna
            } else if variety < 0.9 {
                BiomeLabel::Forest
            } else {
                BiomeLabel::Swamp
            }
        } else if variety < 0.4 {
            BiomeLabel::Desert
        } else if variety < 0.7 {
            BiomeLabel::Savanna
        } else {
            BiomeLabel::Jungle
        }
    } else if temperature < 0.4 || height > 0.9 {
        BiomeLabel::Snow
    } else if height < 0.85 {
        BiomeLabel::Hills
    } else {
        BiomeLabel::Mountains
    }
}

pub fn generate(width: usize, height: usize, seeds: &WorldSeeds) -> Tilemap<BiomeLabel> {
    let height_field = coherent_field(width, height, seeds.height, HEIGHT_RADIUS, HEIGHT_MODIFIER);
    let variety = super::variety_channel(width, height, seeds);
    let temperature = latitude_gradient(width, height);

    super::classify_cells(width, height, |x, y| {
        classify(*height_field.get(x, y), *variety.get(x, y), *temperature.get(x, y))
    })
}
