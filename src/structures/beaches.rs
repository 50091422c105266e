//! Beach dilation
//!
//! Grass touching water becomes sand. Neighbours are read from a snapshot, so
//! a cell converted earlier in the scan never influences a later one.

use crate::biomes::BiomeLabel;
use crate::tilemap::Tilemap;

/// Relabel every grass tile with a water tile among its 8 neighbours as sand.
/// Returns the number of tiles changed.
pub fn add_beaches(tiles: &mut Tilemap<BiomeLabel>) -> usize {
    let shore: Vec<(usize, usize)> = tiles
        .iter()
        .filter(|(_, _, biome)| **biome == BiomeLabel::Grass)
        .filter(|&(x, y, _)| {
            tiles
                .neighbors_8(x, y)
                .into_iter()
                .any(|(nx, ny)| tiles.get(nx, ny).is_water())
        })
        .map(|(x, y, _)| (x, y))
        .collect();

    for &(x, y) in &shore {
        tiles.set(x, y, BiomeLabel::Sand);
    }

    shore.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(labels: &[BiomeLabel]) -> Tilemap<BiomeLabel> {
        Tilemap::from_vec(labels.len(), 1, labels.to_vec())
    }

    #[test]
    fn test_grass_next_to_water_becomes_sand() {
        use BiomeLabel::*;
        let mut tiles = strip(&[DeepWater, Grass, Grass, Grass, ShallowWater]);
        assert_eq!(add_beaches(&mut tiles), 2);
        assert_eq!(tiles.as_slice(), &[DeepWater, Sand, Grass, Sand, ShallowWater]);
    }

    #[test]
    fn test_only_grass_is_converted() {
        use BiomeLabel::*;
        let mut tiles = strip(&[DeepWater, Forest, Jungle, Desert, ShallowWater]);
        assert_eq!(add_beaches(&mut tiles), 0);
        assert_eq!(tiles.as_slice(), &[DeepWater, Forest, Jungle, Desert, ShallowWater]);
    }

    #[test]
    fn test_diagonal_neighbours_count() {
        let mut tiles = Tilemap::new_with(3, 3, BiomeLabel::Grass);
        tiles.set(2, 2, BiomeLabel::DeepWater);
        add_beaches(&mut tiles);
        assert_eq!(*tiles.get(1, 1), BiomeLabel::Sand);
        assert_eq!(*tiles.get(0, 0), BiomeLabel::Grass);
        assert_eq!(*tiles.get(2, 0), BiomeLabel::Grass);
    }

    #[test]
    fn test_idempotent() {
        use crate::recipes::classic;
        use crate::seeds::WorldSeeds;

        for seed in [3u64, 99, 4096] {
            let mut once = classic::generate(48, 32, &WorldSeeds::from_master(seed));
            add_beaches(&mut once);
            let mut twice = once.clone();
            assert_eq!(add_beaches(&mut twice), 0);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_no_wraparound() {
        use BiomeLabel::*;
        let mut tiles = strip(&[Grass, Grass, Grass, DeepWater]);
        add_beaches(&mut tiles);
        assert_eq!(*tiles.get(0, 0), Grass);
    }
}
