//! Per-world-type generation recipes
//!
//! Each recipe is a pure function of grid size and seeds: it synthesizes its
//! noise channels, shapes them, and classifies every tile with an ordered
//! threshold cascade. Structural passes run afterwards in `structures`.

pub mod archipelago;
pub mod classic;
pub mod continents;
pub mod islands;
pub mod pangea;
pub mod volcanic;

use crate::biomes::BiomeLabel;
use crate::seeds::WorldSeeds;
use crate::synthesis::coherent_field;
use crate::tilemap::Tilemap;
use crate::world::WorldType;

/// A generation recipe: `(width, height, seeds) -> tiles`.
pub type Recipe = fn(usize, usize, &WorldSeeds) -> Tilemap<BiomeLabel>;

/// Strategy table mapping every world type to its recipe.
pub const RECIPES: [(WorldType, Recipe); 6] = [
    (WorldType::Classic, classic::generate),
    (WorldType::Archipelago, archipelago::generate),
    (WorldType::Continents, continents::generate),
    (WorldType::Pangea, pangea::generate),
    (WorldType::Islands, islands::generate),
    (WorldType::Volcanic, volcanic::generate),
];

pub fn recipe_for(world_type: WorldType) -> Recipe {
    match world_type {
        WorldType::Classic => classic::generate,
        WorldType::Archipelago => archipelago::generate,
        WorldType::Continents => continents::generate,
        WorldType::Pangea => pangea::generate,
        WorldType::Islands => islands::generate,
        WorldType::Volcanic => volcanic::generate,
    }
}

const VARIETY_RADIUS: usize = 4;
const VARIETY_MODIFIER: f32 = 0.6;

/// Biome-variety channel shared by the field-based recipes.
pub(crate) fn variety_channel(width: usize, height: usize, seeds: &WorldSeeds) -> Tilemap<f32> {
    coherent_field(width, height, seeds.variety, VARIETY_RADIUS, VARIETY_MODIFIER)
}

/// Build a tile grid by classifying every cell.
pub(crate) fn classify_cells(
    width: usize,
    height: usize,
    mut classify: impl FnMut(usize, usize) -> BiomeLabel,
) -> Tilemap<BiomeLabel> {
    let mut tiles = Tilemap::new_with(width, height, BiomeLabel::DeepWater);
    for (x, y, tile) in tiles.iter_mut() {
        *tile = classify(x, y);
    }
    tiles
}
