//! Islands: open ocean with independently stamped circular islands
//!
//! Unlike the other recipes there is no single shaped field. Each island gets
//! its own noise channel blended with a linear falloff from its centre, and is
//! labelled in concentric bands.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::biomes::BiomeLabel;
use crate::seeds::WorldSeeds;
use crate::synthesis::coherent_field;
use crate::tilemap::Tilemap;

const MIN_ISLANDS: usize = 10;
const MAX_ISLANDS: usize = 20;
const MIN_RADIUS: usize = 3;
const NOISE_RADIUS: usize = 2;
const NOISE_MODIFIER: f32 = 0.5;
/// Weight of the distance falloff against island noise.
const FALLOFF_WEIGHT: f32 = 0.7;

/// Placement of one island.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Island {
    pub center_x: usize,
    pub center_y: usize,
    pub radius: usize,
    pub noise_seed: u64,
}

impl Island {
    pub fn distance_to(&self, x: usize, y: usize) -> f32 {
        let dx = x as f32 - self.center_x as f32;
        let dy = y as f32 - self.center_y as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Draw island count, centres and radii. Centres keep an eighth of the map
/// clear on every side.
pub fn place_islands(width: usize, height: usize, seeds: &WorldSeeds, rng: &mut impl Rng) -> Vec<Island> {
    let count = rng.gen_range(MIN_ISLANDS..=MAX_ISLANDS);
    let max_radius = (width.min(height) / 8).max(MIN_RADIUS);

    (0..count)
        .map(|i| Island {
            center_x: rng.gen_range(width / 8..=width * 7 / 8),
            center_y: rng.gen_range(height / 8..=height * 7 / 8),
            radius: rng.gen_range(MIN_RADIUS..=max_radius),
            noise_seed: seeds.island(i),
        })
        .collect()
}

/// Label for a blended island value, or `None` outside the island's shallows.
pub fn classify(value: f32, rng: &mut impl Rng) -> Option<BiomeLabel> {
    if value > 0.7 {
        Some(if rng.gen_bool(0.3) { BiomeLabel::Mountains } else { BiomeLabel::Forest })
    } else if value > 0.5 {
        Some(if rng.gen_bool(0.7) { BiomeLabel::Grass } else { BiomeLabel::Forest })
    } else if value > 0.4 {
        Some(BiomeLabel::Sand)
    } else if value > 0.35 {
        Some(BiomeLabel::ShallowWater)
    } else {
        None
    }
}

/// Stamp one island. Only tiles within `radius` of the centre are written.
pub fn stamp_island(tiles: &mut Tilemap<BiomeLabel>, island: &Island, rng: &mut impl Rng) {
    let (width, height) = (tiles.width, tiles.height);
    let noise = coherent_field(width, height, island.noise_seed, NOISE_RADIUS, NOISE_MODIFIER);
    let radius = island.radius as f32;

    let x0 = island.center_x.saturating_sub(island.radius);
    let x1 = (island.center_x + island.radius).min(width - 1);
    let y0 = island.center_y.saturating_sub(island.radius);
    let y1 = (island.center_y + island.radius).min(height - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let distance = island.distance_to(x, y);
            if distance > radius {
                continue;
            }
            let falloff = 1.0 - distance / radius;
            let value = falloff * FALLOFF_WEIGHT + *noise.get(x, y) * (1.0 - FALLOFF_WEIGHT);
            if let Some(label) = classify(value, rng) {
                tiles.set(x, y, label);
            }
        }
    }
}

/// Generate the island world and return the placements used.
pub fn generate_with_layout(width: usize, height: usize, seeds: &WorldSeeds) -> (Tilemap<BiomeLabel>, Vec<Island>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seeds.islands);
    let mut tiles = Tilemap::new_with(width, height, BiomeLabel::DeepWater);

    let islands = place_islands(width, height, seeds, &mut rng);
    for island in &islands {
        stamp_island(&mut tiles, island, &mut rng);
    }
    tracing::debug!(count = islands.len(), "stamped islands");

    (tiles, islands)
}

pub fn generate(width: usize, height: usize, seeds: &WorldSeeds) -> Tilemap<BiomeLabel> {
    generate_with_layout(width, height, seeds).0
}
