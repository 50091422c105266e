//! World generation entry points
//!
//! Bundles a generated biome grid with the seeds that produced it, and
//! exposes the pipeline: recipe classification followed by structural passes.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::biomes::BiomeLabel;
use crate::error::{check_dimensions, Result, WorldGenError};
use crate::recipes::recipe_for;
use crate::seeds::WorldSeeds;
use crate::structures::{apply_finishing_touches, StructureReport};
use crate::tilemap::{TileGrid, Tilemap};

/// The closed set of generation recipes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldType {
    Classic,
    Archipelago,
    Continents,
    Pangea,
    Islands,
    Volcanic,
}

impl WorldType {
    pub fn all() -> &'static [WorldType] {
        &[
            WorldType::Classic,
            WorldType::Archipelago,
            WorldType::Continents,
            WorldType::Pangea,
            WorldType::Islands,
            WorldType::Volcanic,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorldType::Classic => "classic",
            WorldType::Archipelago => "archipelago",
            WorldType::Continents => "continents",
            WorldType::Pangea => "pangea",
            WorldType::Islands => "islands",
            WorldType::Volcanic => "volcanic",
        }
    }

    /// Uniformly random world type.
    pub fn random(rng: &mut impl Rng) -> Self {
        let all = Self::all();
        all[rng.gen_range(0..all.len())]
    }
}

impl fmt::Display for WorldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorldType {
    type Err = WorldGenError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        WorldType::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| WorldGenError::UnknownWorldType(s.to_string()))
    }
}

/// A generated world and everything needed to recreate it.
#[derive(Clone, Debug)]
pub struct WorldData {
    /// Seeds used for generation (allows recreation)
    pub seeds: WorldSeeds,
    pub world_type: WorldType,
    pub width: usize,
    pub height: usize,
    /// Final biome labels
    pub tiles: Tilemap<BiomeLabel>,
    /// What the structural passes stamped
    pub structures: StructureReport,
}

impl WorldData {
    /// Convenience accessor for master seed
    pub fn seed(&self) -> u64 {
        self.seeds.master
    }
}

/// Run the full pipeline for one world.
pub fn build_world(width: usize, height: usize, world_type: WorldType, seed: u64) -> Result<WorldData> {
    check_dimensions(width, height)?;

    let seeds = WorldSeeds::from_master(seed);
    tracing::debug!(%world_type, %seeds, width, height, "classifying biomes");
    let mut tiles = recipe_for(world_type)(width, height, &seeds);

    let mut rng = ChaCha8Rng::seed_from_u64(seeds.structures);
    let structures = apply_finishing_touches(&mut tiles, world_type, &mut rng);

    tracing::info!(%world_type, seed, width, height, "generated world");

    Ok(WorldData {
        seeds,
        world_type,
        width,
        height,
        tiles,
        structures,
    })
}

/// Generate a biome grid. Identical arguments always give identical grids.
pub fn generate_tiles(width: usize, height: usize, world_type: WorldType, seed: u64) -> Result<Tilemap<BiomeLabel>> {
    build_world(width, height, world_type, seed).map(|world| world.tiles)
}

/// Overwrite every cell of `grid` with a freshly generated world.
///
/// Without a seed one is drawn from the thread RNG. The seed used is returned
/// so callers can reproduce the world. `mark_dirty` is called once on success;
/// on error the grid is left untouched.
pub fn generate_world<G: TileGrid + ?Sized>(grid: &mut G, world_type: WorldType, seed: Option<u64>) -> Result<u64> {
    let seed = seed.unwrap_or_else(rand::random);
    let tiles = generate_tiles(grid.width(), grid.height(), world_type, seed)?;

    for (x, y, &biome) in tiles.iter() {
        grid.set_tile(x, y, biome);
    }
    grid.mark_dirty();

    Ok(seed)
}

/// Generator that remembers its seed between runs.
///
/// Without an explicit seed the first run draws one and keeps it, so
/// regenerating reproduces the same world until `clear_seed` is called.
#[derive(Clone, Debug, Default)]
pub struct WorldGenerator {
    seed: Option<u64>,
}

impl WorldGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    pub fn clear_seed(&mut self) {
        self.seed = None;
    }

    pub fn generate_world<G: TileGrid + ?Sized>(&mut self, grid: &mut G, world_type: WorldType) -> Result<u64> {
        let seed = generate_world(grid, world_type, self.seed)?;
        self.seed = Some(seed);
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::render_ascii_map;
    use rayon::prelude::*;

    // 10x10 maps for seed 42. Any change to seeding, noise or thresholds shows up here.
    const CLASSIC_42: &str = "\
;;...;\"T~~
\";:.:;\"T:.
\"\":::\"TTtT
TTTTTTTttt
TTTTTTtt^^
TTT^TTtt^#
.TT^ttTT^#
::TtttTT^#
\":::..~::#
\":.~~~~.:#
";

    const ARCHIPELAGO_42: &str = "\
..~~~..~~~
:.~~~::.~~
T::.:TTT::
TTTTTTtttt
:TTTTttttt
~.Tt^tttt^
~.T^^ttT^^
~.Ttt:.TT^
..~~~~~.T^
..~~~~~~TT
";

    #[test]
    fn test_classic_seed_42_is_reproducible() {
        let tiles = generate_tiles(10, 10, WorldType::Classic, 42).unwrap();
        assert_eq!(tiles.as_slice().len(), 100);
        assert_eq!(render_ascii_map(&tiles), CLASSIC_42);
    }

    #[test]
    fn test_archipelago_seed_42_is_reproducible() {
        let tiles = generate_tiles(10, 10, WorldType::Archipelago, 42).unwrap();
        assert_eq!(render_ascii_map(&tiles), ARCHIPELAGO_42);
    }

    #[test]
    fn test_every_type_is_deterministic() {
        for &world_type in WorldType::all() {
            let a = generate_tiles(50, 40, world_type, 1234).unwrap();
            let b = generate_tiles(50, 40, world_type, 1234).unwrap();
            assert_eq!(a, b, "{} differs between runs", world_type);
        }
    }

    #[test]
    fn test_seed_changes_output() {
        for &world_type in WorldType::all() {
            let a = generate_tiles(50, 40, world_type, 1).unwrap();
            let b = generate_tiles(50, 40, world_type, 2).unwrap();
            assert_ne!(a, b, "{} ignored its seed", world_type);
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        for (w, h) in [(0, 10), (10, 0), (0, 0)] {
            let err = generate_tiles(w, h, WorldType::Classic, 1).unwrap_err();
            assert!(matches!(err, WorldGenError::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn test_parse_world_types() {
        for &world_type in WorldType::all() {
            assert_eq!(world_type.name().parse::<WorldType>().unwrap(), world_type);
            assert_eq!(world_type.to_string().to_uppercase().parse::<WorldType>().unwrap(), world_type);
        }
        assert_eq!(" pangea ".parse::<WorldType>().unwrap(), WorldType::Pangea);
    }

    #[test]
    fn test_unknown_world_type_fails_closed() {
        let err = "tundra".parse::<WorldType>().unwrap_err();
        assert!(matches!(err, WorldGenError::UnknownWorldType(ref name) if name == "tundra"));
        assert!("".parse::<WorldType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&WorldType::Archipelago).unwrap();
        assert_eq!(json, "\"archipelago\"");
        let back: WorldType = serde_json::from_str("\"volcanic\"").unwrap();
        assert_eq!(back, WorldType::Volcanic);
    }

    #[test]
    fn test_random_type_covers_all() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(WorldType::random(&mut rng));
        }
        assert_eq!(seen.len(), WorldType::all().len());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential: Vec<_> = WorldType::all()
            .iter()
            .map(|&t| generate_tiles(40, 30, t, 77).unwrap())
            .collect();
        let parallel: Vec<_> = WorldType::all()
            .par_iter()
            .map(|&t| generate_tiles(40, 30, t, 77).unwrap())
            .collect();
        assert_eq!(sequential, parallel);

        let seeds: Vec<u64> = (0..16).collect();
        let par: Vec<_> = seeds
            .par_iter()
            .map(|&s| generate_tiles(24, 24, WorldType::Islands, s).unwrap())
            .collect();
        for (seed, tiles) in seeds.iter().zip(&par) {
            assert_eq!(*tiles, generate_tiles(24, 24, WorldType::Islands, *seed).unwrap());
        }
    }

    #[test]
    fn test_world_data_keeps_seeds() {
        let world = build_world(30, 20, WorldType::Volcanic, 99).unwrap();
        assert_eq!(world.seed(), 99);
        assert_eq!(world.seeds, WorldSeeds::from_master(99));
        assert_eq!((world.width, world.height), (30, 20));
        assert!(!world.structures.craters.is_empty());
    }

    /// Grid that records how often it was invalidated.
    struct CountingGrid {
        tiles: Tilemap<BiomeLabel>,
        dirty: usize,
    }

    impl TileGrid for CountingGrid {
        fn width(&self) -> usize {
            self.tiles.width
        }
        fn height(&self) -> usize {
            self.tiles.height
        }
        fn get_tile(&self, x: usize, y: usize) -> BiomeLabel {
            *self.tiles.get(x, y)
        }
        fn set_tile(&mut self, x: usize, y: usize, biome: BiomeLabel) {
            self.tiles.set(x, y, biome);
        }
        fn mark_dirty(&mut self) {
            self.dirty += 1;
        }
    }

    #[test]
    fn test_generate_world_overwrites_grid() {
        let mut grid = CountingGrid {
            tiles: Tilemap::new_with(20, 15, BiomeLabel::Wall),
            dirty: 0,
        };
        let seed = generate_world(&mut grid, WorldType::Archipelago, Some(5)).unwrap();

        assert_eq!(seed, 5);
        assert_eq!(grid.dirty, 1);
        assert_eq!(grid.tiles, generate_tiles(20, 15, WorldType::Archipelago, 5).unwrap());
        assert!(grid.tiles.iter().all(|(_, _, b)| *b != BiomeLabel::Wall));
    }

    #[test]
    fn test_failed_generation_leaves_grid_clean() {
        let mut grid = CountingGrid {
            tiles: Tilemap::new_with(0, 5, BiomeLabel::Grass),
            dirty: 0,
        };
        assert!(generate_world(&mut grid, WorldType::Classic, Some(1)).is_err());
        assert_eq!(grid.dirty, 0);
    }

    #[test]
    fn test_generate_world_draws_seed() {
        let mut grid = Tilemap::new_with(12, 12, BiomeLabel::Grass);
        let seed = generate_world(&mut grid, WorldType::Pangea, None).unwrap();
        assert_eq!(grid, generate_tiles(12, 12, WorldType::Pangea, seed).unwrap());
    }

    #[test]
    fn test_generator_persists_seed() {
        let mut generator = WorldGenerator::new();
        assert_eq!(generator.seed(), None);

        let mut first = Tilemap::new_with(16, 16, BiomeLabel::Grass);
        let seed = generator.generate_world(&mut first, WorldType::Continents).unwrap();
        assert_eq!(generator.seed(), Some(seed));

        let mut second = Tilemap::new_with(16, 16, BiomeLabel::Grass);
        generator.generate_world(&mut second, WorldType::Continents).unwrap();
        assert_eq!(first, second);

        generator.set_seed(3);
        generator.generate_world(&mut second, WorldType::Continents).unwrap();
        assert_eq!(second, generate_tiles(16, 16, WorldType::Continents, 3).unwrap());

        generator.clear_seed();
        assert_eq!(generator.seed(), None);
        assert_eq!(WorldGenerator::with_seed(8).seed(), Some(8));
    }
}
