//! Volcano craters and lava flows

use rand::Rng;

use super::shapes::{disk_with_distance, Heading};
use crate::biomes::BiomeLabel;
use crate::tilemap::Tilemap;

const MIN_CRATERS: usize = 3;
const MAX_CRATERS: usize = 8;
const MIN_CRATER_RADIUS: i32 = 2;
const MAX_CRATER_RADIUS: i32 = 4;
/// Fraction of the crater radius filled with lava; the rest is rim.
const LAVA_CORE: f32 = 0.6;
const MIN_FLOW: usize = 5;
const MAX_FLOW: usize = 15;
const FLOW_TURN_CHANCE: f64 = 0.3;
const FLOW_MAX_TURN: f32 = 0.5;

/// One stamped volcano and the tiles its lava flow covered.
#[derive(Clone, Debug, PartialEq)]
pub struct Crater {
    pub x: usize,
    pub y: usize,
    pub radius: i32,
    pub flow: Vec<(usize, usize)>,
}

impl Crater {
    pub fn covers(&self, x: usize, y: usize) -> bool {
        let dx = x as f32 - self.x as f32;
        let dy = y as f32 - self.y as f32;
        (dx * dx + dy * dy).sqrt() <= self.radius as f32
    }
}

/// Stamp 3-8 craters in the central half of the map, each with one lava flow.
///
/// Tiles flagged in `water` are left untouched and stop any flow that reaches them.
pub fn add_volcanoes(tiles: &mut Tilemap<BiomeLabel>, water: &Tilemap<bool>, rng: &mut impl Rng) -> Vec<Crater> {
    let (width, height) = (tiles.width, tiles.height);
    let count = rng.gen_range(MIN_CRATERS..=MAX_CRATERS);

    (0..count)
        .map(|_| {
            let x = rng.gen_range(width / 4..=width * 3 / 4);
            let y = rng.gen_range(height / 4..=height * 3 / 4);
            let radius = rng.gen_range(MIN_CRATER_RADIUS..=MAX_CRATER_RADIUS);

            stamp_crater(tiles, water, x as i32, y as i32, radius);

            let length = rng.gen_range(MIN_FLOW..=MAX_FLOW);
            let flow = lava_flow(tiles, water, x as i32, y as i32, length, rng);

            Crater { x, y, radius, flow }
        })
        .collect()
}

fn stamp_crater(tiles: &mut Tilemap<BiomeLabel>, water: &Tilemap<bool>, x: i32, y: i32, radius: i32) {
    let core = radius as f32 * LAVA_CORE;
    for (px, py, dist) in disk_with_distance(x, y, radius) {
        if !water.in_bounds(px, py) || *water.get(px as usize, py as usize) {
            continue;
        }
        let label = if dist < core { BiomeLabel::Lava } else { BiomeLabel::Mountains };
        tiles.set_clipped(px, py, label);
    }
}

/// Walk away from the crater laying lava. The walk ends after `length` steps,
/// on leaving the map, or on reaching water.
fn lava_flow(
    tiles: &mut Tilemap<BiomeLabel>,
    water: &Tilemap<bool>,
    start_x: i32,
    start_y: i32,
    length: usize,
    rng: &mut impl Rng,
) -> Vec<(usize, usize)> {
    let mut heading = Heading::random(rng);
    let (mut x, mut y) = (start_x, start_y);
    let mut path = Vec::with_capacity(length);

    for _ in 0..length {
        (x, y) = heading.advance(x, y);
        if !tiles.in_bounds(x, y) || *water.get(x as usize, y as usize) {
            break;
        }
        tiles.set(x as usize, y as usize, BiomeLabel::Lava);
        path.push((x as usize, y as usize));

        heading.maybe_wobble(FLOW_TURN_CHANCE, FLOW_MAX_TURN, rng);
    }

    path
}
