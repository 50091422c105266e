//! Field shaping operators
//!
//! Deterministic transforms applied to noise fields before classification.
//! None of these touch a biome grid.

use crate::tilemap::Tilemap;

/// Inner disk of the central continent, as a fraction of the corner distance.
const CONTINENT_CORE: f32 = 0.4;
/// Outer edge of the transition ring.
const CONTINENT_SHELF: f32 = 0.7;
const CONTINENT_CORE_LIFT: f32 = 0.5;
const CONTINENT_OCEAN_DROP: f32 = -0.2;

/// Distance of (x, y) from the grid centre and the centre-to-corner distance.
fn center_distance(x: usize, y: usize, width: usize, height: usize) -> (f32, f32) {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt();
    let dx = x as f32 - cx;
    let dy = y as f32 - cy;
    ((dx * dx + dy * dy).sqrt(), max_dist)
}

/// Lower values towards the edges: subtracts `distance_ratio * strength`.
pub fn apply_radial_gradient(field: &mut Tilemap<f32>, strength: f32) {
    let (width, height) = (field.width, field.height);
    for (x, y, value) in field.iter_mut() {
        let (dist, max_dist) = center_distance(x, y, width, height);
        *value -= dist / max_dist * strength;
    }
}

/// Bias added at a given distance ratio by the central continent operator,
/// before scaling by strength.
pub fn continent_factor(ratio: f32) -> f32 {
    if ratio < CONTINENT_CORE {
        CONTINENT_CORE_LIFT
    } else if ratio < CONTINENT_SHELF {
        let t = (ratio - CONTINENT_CORE) / (CONTINENT_SHELF - CONTINENT_CORE);
        CONTINENT_CORE_LIFT + (CONTINENT_OCEAN_DROP - CONTINENT_CORE_LIFT) * t
    } else {
        CONTINENT_OCEAN_DROP
    }
}

/// Raise a central disk, ramp down through a ring, and sink the outer zone.
pub fn apply_central_continent(field: &mut Tilemap<f32>, strength: f32) {
    let (width, height) = (field.width, field.height);
    for (x, y, value) in field.iter_mut() {
        let (dist, max_dist) = center_distance(x, y, width, height);
        *value += continent_factor(dist / max_dist) * strength;
    }
}

/// Temperature proxy: 0 at the equator row, 1 at the top and bottom edges.
pub fn latitude_gradient(width: usize, height: usize) -> Tilemap<f32> {
    let half = height as f32 / 2.0;
    let mut field = Tilemap::new_with(width, height, 0.0f32);
    for (_, y, value) in field.iter_mut() {
        *value = (y as f32 - half).abs() / half;
    }
    field
}

/// Stretch a field linearly to [0, 1]. A constant field becomes 0.5.
pub fn normalize_field(field: &mut Tilemap<f32>) {
    let (min_v, max_v) = field.min_max();
    let range = max_v - min_v;
    if range <= f32::EPSILON {
        field.fill(0.5);
        return;
    }
    for (_, _, value) in field.iter_mut() {
        *value = (*value - min_v) / range;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_gradient_center_untouched() {
        let mut field = Tilemap::new_with(10, 10, 1.0f32);
        apply_radial_gradient(&mut field, 0.4);
        // (5, 5) is the exact centre of a 10x10 grid
        assert_eq!(*field.get(5, 5), 1.0);
        // (0, 0) is a corner: full strength removed
        assert!((*field.get(0, 0) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_radial_gradient_decreases_outward() {
        // 20x20 has its centre exactly on (10, 10)
        let mut field = Tilemap::new_with(20, 20, 0.0f32);
        apply_radial_gradient(&mut field, 1.0);
        let mut prev = *field.get(10, 10);
        assert_eq!(prev, 0.0);
        for x in 11..20 {
            let v = *field.get(x, 10);
            assert!(v < prev);
            prev = v;
        }
    }

    #[test]
    fn test_continent_zones() {
        assert_eq!(continent_factor(0.0), 0.5);
        assert_eq!(continent_factor(0.39), 0.5);
        assert!((continent_factor(0.55) - 0.15).abs() < 1e-5);
        assert!((continent_factor(0.6999) - -0.2).abs() < 1e-3);
        assert_eq!(continent_factor(0.7), -0.2);
        assert_eq!(continent_factor(1.0), -0.2);
    }

    #[test]
    fn test_central_continent_scales_by_strength() {
        let mut field = Tilemap::new_with(20, 20, 0.0f32);
        apply_central_continent(&mut field, 0.7);
        assert!((*field.get(10, 10) - 0.35).abs() < 1e-6);
        assert!((*field.get(0, 0) - -0.14).abs() < 1e-6);
    }

    #[test]
    fn test_latitude_gradient() {
        let field = latitude_gradient(3, 10);
        assert_eq!(*field.get(0, 5), 0.0);
        assert_eq!(*field.get(2, 0), 1.0);
        assert!((*field.get(1, 9) - 0.8).abs() < 1e-6);
        for x in 0..3 {
            assert_eq!(field.get(x, 3), field.get(0, 3));
        }
    }

    #[test]
    fn test_normalize() {
        let mut field = Tilemap::from_vec(2, 2, vec![2.0f32, 4.0, 3.0, 6.0]);
        normalize_field(&mut field);
        assert_eq!(field.as_slice(), &[0.0, 0.5, 0.25, 1.0]);

        let mut flat = Tilemap::new_with(3, 3, 7.0f32);
        normalize_field(&mut flat);
        assert!(flat.as_slice().iter().all(|&v| v == 0.5));
    }
}
