//! Structural post-processing
//!
//! Runs after biome classification and mutates the tile grid in place:
//! - Beaches along every shoreline
//! - Volcano craters and lava flows (Volcanic worlds)
//! - Mountain ranges (Pangea worlds)
//! - Wall structures (Continents worlds)
//!
//! Later passes overwrite earlier labels. All randomness comes from the
//! stream passed in by the caller.

pub mod beaches;
pub mod mountains;
pub mod shapes;
pub mod volcanoes;
pub mod walls;

use rand::Rng;

use crate::biomes::BiomeLabel;
use crate::tilemap::Tilemap;
use crate::world::WorldType;

pub use beaches::add_beaches;
pub use mountains::{add_mountain_ranges, MountainRange};
pub use volcanoes::{add_volcanoes, Crater};
pub use walls::{add_walls, Wall, WallShape};

/// What the post-processing passes stamped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructureReport {
    pub beach_tiles: usize,
    pub craters: Vec<Crater>,
    pub ranges: Vec<MountainRange>,
    pub walls: Vec<Wall>,
}

/// Water mask of the grid as it stands before any structure is stamped.
pub fn water_mask(tiles: &Tilemap<BiomeLabel>) -> Tilemap<bool> {
    let data = tiles.iter().map(|(_, _, biome)| biome.is_water()).collect();
    Tilemap::from_vec(tiles.width, tiles.height, data)
}

/// Apply beaches, then the pass belonging to `world_type`.
pub fn apply_finishing_touches(
    tiles: &mut Tilemap<BiomeLabel>,
    world_type: WorldType,
    rng: &mut impl Rng,
) -> StructureReport {
    let water = water_mask(tiles);
    let mut report = StructureReport {
        beach_tiles: add_beaches(tiles),
        ..Default::default()
    };

    match world_type {
        WorldType::Volcanic => report.craters = add_volcanoes(tiles, &water, rng),
        WorldType::Pangea => report.ranges = add_mountain_ranges(tiles, rng),
        WorldType::Continents => report.walls = add_walls(tiles, rng),
        WorldType::Classic | WorldType::Archipelago | WorldType::Islands => {}
    }

    tracing::debug!(
        world_type = %world_type,
        beaches = report.beach_tiles,
        craters = report.craters.len(),
        ranges = report.ranges.len(),
        walls = report.walls.len(),
        "applied structures"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::recipe_for;
    use crate::seeds::WorldSeeds;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn finished(world_type: WorldType, seed: u64) -> (Tilemap<BiomeLabel>, Tilemap<BiomeLabel>, StructureReport) {
        let seeds = WorldSeeds::from_master(seed);
        let before = recipe_for(world_type)(64, 48, &seeds);
        let mut after = before.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seeds.structures);
        let report = apply_finishing_touches(&mut after, world_type, &mut rng);
        (before, after, report)
    }

    #[test]
    fn test_passes_match_world_type() {
        for &world_type in WorldType::all() {
            let (_, _, report) = finished(world_type, 11);
            assert_eq!(!report.craters.is_empty(), world_type == WorldType::Volcanic);
            assert_eq!(!report.ranges.is_empty(), world_type == WorldType::Pangea);
            assert_eq!(!report.walls.is_empty(), world_type == WorldType::Continents);
        }
    }

    #[test]
    fn test_walls_only_on_continents() {
        for &world_type in WorldType::all() {
            let (_, after, _) = finished(world_type, 5);
            let has_wall = after.iter().any(|(_, _, b)| *b == BiomeLabel::Wall);
            assert_eq!(has_wall, world_type == WorldType::Continents, "{:?}", world_type);
        }
    }

    #[test]
    fn test_lava_containment() {
        for seed in [1u64, 8, 64, 512, 4096, 32768] {
            let (before, after, report) = finished(WorldType::Volcanic, seed);

            for (x, y, biome) in after.iter() {
                if before.get(x, y).is_water() {
                    assert!(biome.is_water(), "water at ({}, {}) was overwritten", x, y);
                }
                if *biome != BiomeLabel::Lava {
                    continue;
                }
                let from_field = *before.get(x, y) == BiomeLabel::Lava;
                let from_crater = report.craters.iter().any(|c| c.covers(x, y));
                let from_flow = report.craters.iter().any(|c| c.flow.contains(&(x, y)));
                assert!(from_field || from_crater || from_flow, "stray lava at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_water_mask() {
        let mut tiles = Tilemap::new_with(3, 1, BiomeLabel::Grass);
        tiles.set(1, 0, BiomeLabel::ShallowWater);
        let mask = water_mask(&tiles);
        assert_eq!(mask.as_slice(), &[false, true, false]);
    }
}
