//! Volcanic: faded island terrain with a high-frequency volcanic overlay

use crate::biomes::BiomeLabel;
use crate::seeds::WorldSeeds;
use crate::shaping::apply_radial_gradient;
use crate::synthesis::{coherent_field, fbm_field, FbmParams, GradientNoise};
use crate::tilemap::Tilemap;

const HEIGHT_RADIUS: usize = 4;
const HEIGHT_MODIFIER: f32 = 0.8;
const RADIAL_STRENGTH: f32 = 0.5;
const VARIETY_RADIUS: usize = 3;
const VARIETY_MODIFIER: f32 = 0.6;

const VOLCANIC_FBM: FbmParams = FbmParams {
    frequency: 0.15,
    octaves: 4,
    persistence: 0.5,
};

pub const LAVA_VOLCANISM: f32 = 0.85;
pub const LAVA_MIN_HEIGHT: f32 = 0.6;
const ASH_VOLCANISM: f32 = 0.75;
const SNOW_LINE: f32 = 0.9;
const BARE_PEAK_VOLCANISM: f32 = 0.7;

pub fn classify(height: f32, variety: f32, volcanic: f32) -> BiomeLabel {
    if height < 0.3 {
        return if height < 0.15 {
            BiomeLabel::DeepWater
        } else {
            BiomeLabel::ShallowWater
        };
    }
    if height < 0.4 {
        return BiomeLabel::Sand;
    }
    // Peaks stay bare where the ground is volcanic
    if height > SNOW_LINE && volcanic < BARE_PEAK_VOLCANISM {
        return BiomeLabel::Snow;
    }

    if volcanic > LAVA_VOLCANISM && height > LAVA_MIN_HEIGHT {
        BiomeLabel::Lava
    } else if volcanic > ASH_VOLCANISM {
        BiomeLabel::Hills
    } else if variety < 0.5 {
        BiomeLabel::Grass
    } else if variety < 0.8 {
        BiomeLabel::Forest
    } else if height > 0.8 {
        BiomeLabel::Mountains
    } else {
        BiomeLabel::Jungle
    }
}

pub fn generate(width: usize, height: usize, seeds: &WorldSeeds) -> Tilemap<BiomeLabel> {
    let mut height_field = coherent_field(width, height, seeds.height, HEIGHT_RADIUS, HEIGHT_MODIFIER);
    apply_radial_gradient(&mut height_field, RADIAL_STRENGTH);
    let variety = coherent_field(width, height, seeds.variety, VARIETY_RADIUS, VARIETY_MODIFIER);
    let volcanic = fbm_field(&GradientNoise::new(seeds.volcanic), width, height, &VOLCANIC_FBM);

    super::classify_cells(width, height, |x, y| {
        classify(*height_field.get(x, y), *variety.get(x, y), *volcanic.get(x, y))
    })
}
