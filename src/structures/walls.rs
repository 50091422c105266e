//! Wall structures: straight runs, rings and rectangular enclosures

use rand::Rng;

use super::shapes::{rectangle_outline, ring, Heading};
use crate::biomes::BiomeLabel;
use crate::tilemap::Tilemap;

const MIN_STRUCTURES: usize = 3;
const MAX_STRUCTURES: usize = 8;
const RING_TOLERANCE: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallShape {
    Line { length: usize },
    Circle { radius: i32 },
    Rectangle { width: i32, height: i32 },
}

impl WallShape {
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..=2) {
            0 => WallShape::Line { length: rng.gen_range(5..=15) },
            1 => WallShape::Circle { radius: rng.gen_range(3..=7) },
            _ => WallShape::Rectangle {
                width: rng.gen_range(4..=10),
                height: rng.gen_range(4..=10),
            },
        }
    }
}

/// A placed wall structure, anchored at its start (line) or centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    pub x: usize,
    pub y: usize,
    pub shape: WallShape,
}

/// Stamp 3-8 wall structures in the central half of the map, overwriting
/// whatever is underneath.
pub fn add_walls(tiles: &mut Tilemap<BiomeLabel>, rng: &mut impl Rng) -> Vec<Wall> {
    let (width, height) = (tiles.width, tiles.height);
    let count = rng.gen_range(MIN_STRUCTURES..=MAX_STRUCTURES);

    (0..count)
        .map(|_| {
            let x = rng.gen_range(width / 4..=width * 3 / 4);
            let y = rng.gen_range(height / 4..=height * 3 / 4);
            let shape = WallShape::random(rng);

            let (cx, cy) = (x as i32, y as i32);
            match shape {
                WallShape::Line { length } => wall_line(tiles, cx, cy, length, rng),
                WallShape::Circle { radius } => {
                    for (px, py) in ring(cx, cy, radius, RING_TOLERANCE) {
                        tiles.set_clipped(px, py, BiomeLabel::Wall);
                    }
                }
                WallShape::Rectangle { width, height } => {
                    for (px, py) in rectangle_outline(cx, cy, width, height) {
                        tiles.set_clipped(px, py, BiomeLabel::Wall);
                    }
                }
            }

            Wall { x, y, shape }
        })
        .collect()
}

/// Straight single-tile run in a random direction, stopping at the map edge.
fn wall_line(tiles: &mut Tilemap<BiomeLabel>, start_x: i32, start_y: i32, length: usize, rng: &mut impl Rng) {
    let heading = Heading::random(rng);
    let (mut x, mut y) = (start_x, start_y);

    for _ in 0..length {
        tiles.set_clipped(x, y, BiomeLabel::Wall);
        (x, y) = heading.advance(x, y);
        if !tiles.in_bounds(x, y) {
            break;
        }
    }
}
