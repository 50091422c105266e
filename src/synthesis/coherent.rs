//! Coherent value-noise grids
//!
//! Coarse, blobby fields used for height, biome variety and moisture channels.
//! Random values are placed on a lattice every `radius` tiles and interpolated
//! between; `modifier` controls how much of the raw lattice survives against a
//! 3x3-smoothed copy of it.

use std::f32::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::shaping::normalize_field;
use crate::tilemap::Tilemap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoherentNoise {
    pub seed: u64,
    /// Lattice spacing in tiles (0 is treated as 1)
    pub radius: usize,
    /// 0.0 = fully smoothed blobs, 1.0 = raw lattice contrast
    pub modifier: f32,
}

impl CoherentNoise {
    pub fn new(seed: u64, radius: usize, modifier: f32) -> Self {
        Self { seed, radius, modifier }
    }

    /// Generate a `width x height` field stretched to [0, 1].
    pub fn generate(&self, width: usize, height: usize) -> Tilemap<f32> {
        let radius = self.radius.max(1);
        let modifier = self.modifier.clamp(0.0, 1.0);

        // Lattice points covering the grid, plus a one-point border for smoothing.
        let cols = width / radius + 2;
        let rows = height / radius + 2;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut lattice = Tilemap::new_with(cols + 2, rows + 2, 0.0f32);
        for (_, _, v) in lattice.iter_mut() {
            *v = rng.gen::<f32>();
        }

        let mut smooth = Tilemap::new_with(cols, rows, 0.0f32);
        for (gx, gy, v) in smooth.iter_mut() {
            let (cx, cy) = (gx + 1, gy + 1);
            let corners = *lattice.get(cx - 1, cy - 1)
                + *lattice.get(cx + 1, cy - 1)
                + *lattice.get(cx - 1, cy + 1)
                + *lattice.get(cx + 1, cy + 1);
            let sides = *lattice.get(cx - 1, cy)
                + *lattice.get(cx + 1, cy)
                + *lattice.get(cx, cy - 1)
                + *lattice.get(cx, cy + 1);
            *v = corners / 16.0 + sides / 8.0 + *lattice.get(cx, cy) / 4.0;
        }

        let mut field = Tilemap::new_with(width, height, 0.0f32);
        for (x, y, value) in field.iter_mut() {
            let gx = x / radius;
            let gy = y / radius;
            let tx = cosine_weight((x % radius) as f32 / radius as f32);
            let ty = cosine_weight((y % radius) as f32 / radius as f32);

            let smooth_v = bilerp(
                *smooth.get(gx, gy),
                *smooth.get(gx + 1, gy),
                *smooth.get(gx, gy + 1),
                *smooth.get(gx + 1, gy + 1),
                tx,
                ty,
            );
            let raw_v = bilerp(
                *lattice.get(gx + 1, gy + 1),
                *lattice.get(gx + 2, gy + 1),
                *lattice.get(gx + 1, gy + 2),
                *lattice.get(gx + 2, gy + 2),
                tx,
                ty,
            );

            *value = smooth_v + (raw_v - smooth_v) * modifier;
        }

        normalize_field(&mut field);
        field
    }
}

#[inline]
fn cosine_weight(t: f32) -> f32 {
    (1.0 - (t * PI).cos()) * 0.5
}

#[inline]
fn bilerp(v00: f32, v10: f32, v01: f32, v11: f32, tx: f32, ty: f32) -> f32 {
    let top = v00 + (v10 - v00) * tx;
    let bottom = v01 + (v11 - v01) * tx;
    top + (bottom - top) * ty
}

/// Shorthand for `CoherentNoise::new(seed, radius, modifier).generate(width, height)`.
pub fn coherent_field(width: usize, height: usize, seed: u64, radius: usize, modifier: f32) -> Tilemap<f32> {
    CoherentNoise::new(seed, radius, modifier).generate(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_identical_for_same_parameters() {
        let a = coherent_field(40, 30, 77, 3, 0.7);
        let b = coherent_field(40, 30, 77, 3, 0.7);
        let bits_a: Vec<u32> = a.as_slice().iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u32> = b.as_slice().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_seed_changes_field() {
        let a = coherent_field(40, 30, 77, 3, 0.7);
        let b = coherent_field(40, 30, 78, 3, 0.7);
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_in_unit_range() {
        let field = coherent_field(64, 48, 5, 4, 0.6);
        let (min_v, max_v) = field.min_max();
        assert!(min_v >= 0.0 && max_v <= 1.0);
        assert!(min_v.abs() < 1e-6);
        assert!((max_v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_points_take_lattice_values() {
        // With modifier 1 the field is the raw lattice at multiples of radius, so
        // neighbouring tiles between lattice points stay between their endpoints.
        let field = coherent_field(13, 1, 9, 4, 1.0);
        for x in 0..4 {
            let lo = field.get(0, 0).min(*field.get(4, 0));
            let hi = field.get(0, 0).max(*field.get(4, 0));
            let v = *field.get(x, 0);
            assert!(v >= lo - 1e-6 && v <= hi + 1e-6);
        }
    }

    #[test]
    fn test_larger_radius_is_smoother() {
        let roughness = |field: &Tilemap<f32>| -> f32 {
            let mut total = 0.0;
            for y in 0..field.height {
                for x in 1..field.width {
                    total += (field.get(x, y) - field.get(x - 1, y)).abs();
                }
            }
            total
        };
        let fine = coherent_field(60, 40, 3, 1, 0.7);
        let coarse = coherent_field(60, 40, 3, 6, 0.7);
        assert!(roughness(&coarse) < roughness(&fine));
    }

    #[test]
    fn test_tiny_and_degenerate_grids() {
        let one = coherent_field(1, 1, 1, 3, 0.5);
        assert_eq!(*one.get(0, 0), 0.5);

        let zero_radius = coherent_field(5, 5, 1, 0, 0.5);
        assert_eq!(zero_radius, coherent_field(5, 5, 1, 1, 0.5));
    }
}
