//! Archipelago: many small landmasses from a radially faded height field

use crate::biomes::BiomeLabel;
use crate::seeds::WorldSeeds;
use crate::shaping::apply_radial_gradient;
use crate::synthesis::coherent_field;
use crate::tilemap::Tilemap;

const HEIGHT_RADIUS: usize = 3;
const HEIGHT_MODIFIER: f32 = 0.7;
const RADIAL_STRENGTH: f32 = 0.4;

pub fn classify(height: f32, variety: f32) -> BiomeLabel {
    if height < 0.3 {
        if height < 0.15 {
            BiomeLabel::DeepWater
        } else {
            BiomeLabel::ShallowWater
        }
    } else if height < 0.4 {
        BiomeLabel::Sand
    } else if height < 0.7 {
        if variety < 0.4 {
            BiomeLabel::Grass
        } else if variety < 0.8 {
            BiomeLabel::Forest
        } else {
            BiomeLabel::Jungle
        }
    } else if variety < 0.5 {
        BiomeLabel::Hills
    } else {
        BiomeLabel::Mountains
    }
}

pub fn generate(width: usize, height: usize, seeds: &WorldSeeds) -> Tilemap<BiomeLabel> {
    let mut height_field = coherent_field(width, height, seeds.height, HEIGHT_RADIUS, HEIGHT_MODIFIER);
    apply_radial_gradient(&mut height_field, RADIAL_STRENGTH);
    let variety = super::variety_channel(width, height, seeds);

    super::classify_cells(width, height, |x, y| {
        classify(*height_field.get(x, y), *variety.get(x, y))
    })
}
