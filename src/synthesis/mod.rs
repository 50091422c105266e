//! Noise field synthesis
//!
//! - Gradient noise primitive with a seeded permutation table
//! - Fractal (fBm) compositor over any `noise::NoiseFn`
//! - Coherent value-noise grids for coarse per-world channels

pub mod coherent;
pub mod fbm;
pub mod gradient;

pub use coherent::{coherent_field, CoherentNoise};
pub use fbm::{fbm, fbm_field, FbmParams};
pub use gradient::GradientNoise;
