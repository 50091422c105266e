//! Pangea: one dominant central landmass with moisture bands

use crate::biomes::BiomeLabel;
use crate::seeds::WorldSeeds;
use crate::shaping::apply_central_continent;
use crate::synthesis::coherent_field;
use crate::tilemap::Tilemap;

const HEIGHT_RADIUS: usize = 6;
const HEIGHT_MODIFIER: f32 = 0.9;
const CONTINENT_STRENGTH: f32 = 0.7;
const MOISTURE_RADIUS: usize = 3;
const MOISTURE_MODIFIER: f32 = 0.7;

const DRY: f32 = 0.3;
const WET: f32 = 0.6;
const SNOW_LINE: f32 = 0.85;

pub fn classify(height: f32, variety: f32, moisture: f32) -> BiomeLabel {
    if height < 0.25 {
        return if height < 0.1 {
            BiomeLabel::DeepWater
        } else {
            BiomeLabel::ShallowWater
        };
    }
    if height < 0.35 {
        return BiomeLabel::Sand;
    }
    if height > SNOW_LINE {
        return BiomeLabel::Snow;
    }

    if moisture < DRY {
        if variety < 0.3 {
            BiomeLabel::Desert
        } else {
            BiomeLabel::Savanna
        }
    } else if moisture < WET {
        if variety < 0.5 {
            BiomeLabel::Grass
        } else if height > 0.7 {
            BiomeLabel::Hills
        } else {
            BiomeLabel::Forest
        }
    } else if variety < 0.3 {
        BiomeLabel::Swamp
    } else if variety < 0.7 {
        BiomeLabel::Forest
    } else if height > 0.8 {
        BiomeLabel::Mountains
    } else {
        BiomeLabel::Jungle
    }
}

pub fn generate(width: usize, height: usize, seeds: &WorldSeeds) -> Tilemap<BiomeLabel> {
    let mut height_field = coherent_field(width, height, seeds.height, HEIGHT_RADIUS, HEIGHT_MODIFIER);
    apply_central_continent(&mut height_field, CONTINENT_STRENGTH);
    let variety = super::variety_channel(width, height, seeds);
    let moisture = coherent_field(width, height, seeds.moisture, MOISTURE_RADIUS, MOISTURE_MODIFIER);

    super::classify_cells(width, height, |x, y| {
        classify(*height_field.get(x, y), *variety.get(x, y), *moisture.get(x, y))
    })
}
