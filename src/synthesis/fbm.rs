use noise::NoiseFn;

use crate::shaping::normalize_field;
use crate::tilemap::Tilemap;

/// Fractional Brownian Motion noise.
///
/// Sums `octaves` samples at doubling frequency, scaling each by `persistence`
/// relative to the previous one, and divides by the total amplitude used so
/// the result stays within the source noise range.
pub fn fbm(
    noise: &impl NoiseFn<f64, 2>,
    x: f64,
    y: f64,
    octaves: u32,
    persistence: f64,
) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves.max(1) {
        total += amplitude * noise.get([x * frequency, y * frequency]);
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= 2.0;
    }

    total / max_value
}

/// Parameters for sampling a whole fBm field.
#[derive(Clone, Copy, Debug)]
pub struct FbmParams {
    /// Noise-space units per tile (higher = finer detail)
    pub frequency: f64,
    pub octaves: u32,
    pub persistence: f64,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            frequency: 0.1,
            octaves: 4,
            persistence: 0.5,
        }
    }
}

/// Sample fBm at every tile and stretch the result to [0, 1].
pub fn fbm_field(
    noise: &impl NoiseFn<f64, 2>,
    width: usize,
    height: usize,
    params: &FbmParams,
) -> Tilemap<f32> {
    let mut field = Tilemap::new_with(width, height, 0.0f32);
    for (x, y, value) in field.iter_mut() {
        // Half-tile offset keeps samples off the integer lattice, where every octave is zero.
        let nx = (x as f64 + 0.5) * params.frequency;
        let ny = (y as f64 + 0.5) * params.frequency;
        *value = fbm(noise, nx, ny, params.octaves, params.persistence) as f32;
    }
    normalize_field(&mut field);
    field
}
