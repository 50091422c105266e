//! Shape primitives for stamping structures onto a tile grid
//!
//! All shapes are returned as signed points so callers can clip them against
//! the map with `Tilemap::set_clipped`.

use std::f32::consts::TAU;

use rand::Rng;

/// Points of a filled disk together with their distance from the centre.
pub fn disk_with_distance(center_x: i32, center_y: i32, radius: i32) -> Vec<(i32, i32, f32)> {
    let mut points = Vec::new();
    let r = radius as f32;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist <= r {
                points.push((center_x + dx, center_y + dy, dist));
            }
        }
    }

    points
}

/// Points whose distance from the centre is within `tolerance` of `radius`.
pub fn ring(center_x: i32, center_y: i32, radius: i32, tolerance: f32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let r = radius as f32;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if (dist - r).abs() < tolerance {
                points.push((center_x + dx, center_y + dy));
            }
        }
    }

    points
}

/// Border of a rectangle centred on a point. The outline spans
/// `width + 1` by `height + 1` tiles, corners included once.
pub fn rectangle_outline(center_x: i32, center_y: i32, width: i32, height: i32) -> Vec<(i32, i32)> {
    let start_x = center_x - width / 2;
    let start_y = center_y - height / 2;
    let end_x = start_x + width;
    let end_y = start_y + height;

    let mut points = Vec::new();
    for x in start_x..=end_x {
        points.push((x, start_y));
        points.push((x, end_y));
    }
    for y in start_y + 1..end_y {
        points.push((start_x, y));
        points.push((end_x, y));
    }

    points
}

/// A heading on the tile grid: a continuous angle snapped to one of the
/// eight neighbouring steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    pub angle: f32,
    pub dx: i32,
    pub dy: i32,
}

impl Heading {
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            dx: angle.cos().round() as i32,
            dy: angle.sin().round() as i32,
        }
    }

    /// Uniformly random direction.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen_range(0.0..TAU))
    }

    /// Rotate by `delta` radians and re-snap the step.
    pub fn turn(&mut self, delta: f32) {
        *self = Self::new(self.angle + delta);
    }

    /// With probability `chance`, turn by a uniform amount in `[-max_turn, max_turn]`.
    pub fn maybe_wobble(&mut self, chance: f64, max_turn: f32, rng: &mut impl Rng) {
        if rng.gen_bool(chance) {
            self.turn(rng.gen_range(-max_turn..=max_turn));
        }
    }

    pub fn advance(&self, x: i32, y: i32) -> (i32, i32) {
        (x + self.dx, y + self.dy)
    }
}
