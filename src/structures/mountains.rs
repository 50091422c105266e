//! Mountain ranges: wandering ridges with a snow spine

use rand::Rng;

use super::shapes::{disk_with_distance, Heading};
use crate::biomes::BiomeLabel;
use crate::tilemap::Tilemap;

const MIN_RANGES: usize = 2;
const MAX_RANGES: usize = 5;
const MIN_LENGTH: usize = 10;
const MAX_LENGTH: usize = 30;
const MIN_WIDTH: i32 = 1;
const MAX_WIDTH: i32 = 3;
const SNOW_ZONE: f32 = 0.3;
const MOUNTAIN_ZONE: f32 = 0.7;
const TURN_CHANCE: f64 = 0.2;
const MAX_TURN: f32 = 0.3;

/// The ridge line of one stamped range.
#[derive(Clone, Debug, PartialEq)]
pub struct MountainRange {
    pub spine: Vec<(usize, usize)>,
}

/// Label for a tile at `dist` from the ridge line of a cross-section `width` wide.
pub fn zone(dist: f32, width: i32) -> BiomeLabel {
    let w = width as f32;
    if dist < w * SNOW_ZONE {
        BiomeLabel::Snow
    } else if dist < w * MOUNTAIN_ZONE {
        BiomeLabel::Mountains
    } else {
        BiomeLabel::Hills
    }
}

/// Stamp 2-5 ranges starting in the central half of the map.
pub fn add_mountain_ranges(tiles: &mut Tilemap<BiomeLabel>, rng: &mut impl Rng) -> Vec<MountainRange> {
    let (width, height) = (tiles.width, tiles.height);
    let count = rng.gen_range(MIN_RANGES..=MAX_RANGES);

    (0..count)
        .map(|_| {
            let x = rng.gen_range(width / 4..=width * 3 / 4) as i32;
            let y = rng.gen_range(height / 4..=height * 3 / 4) as i32;
            let length = rng.gen_range(MIN_LENGTH..=MAX_LENGTH);
            stamp_range(tiles, x, y, length, rng)
        })
        .collect()
}

fn stamp_range(tiles: &mut Tilemap<BiomeLabel>, start_x: i32, start_y: i32, length: usize, rng: &mut impl Rng) -> MountainRange {
    let mut heading = Heading::random(rng);
    let (mut x, mut y) = (start_x, start_y);
    let mut spine = Vec::with_capacity(length);

    for _ in 0..length {
        let width = rng.gen_range(MIN_WIDTH..=MAX_WIDTH);
        for (px, py, dist) in disk_with_distance(x, y, width) {
            tiles.set_clipped(px, py, zone(dist, width));
        }
        spine.push((x as usize, y as usize));

        (x, y) = heading.advance(x, y);
        if !tiles.in_bounds(x, y) {
            break;
        }
        heading.maybe_wobble(TURN_CHANCE, MAX_TURN, rng);
    }

    MountainRange { spine }
}
