//! Error types for world generation and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldGenError {
    /// Width or height was zero.
    #[error("invalid grid dimensions {width}x{height}: both must be greater than zero")]
    InvalidDimensions { width: usize, height: usize },

    /// A world type name did not match any known recipe.
    #[error("unknown world type '{0}' (expected one of: classic, archipelago, continents, pangea, islands, volcanic)")]
    UnknownWorldType(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WorldGenError>;

/// Reject empty grids before any field is allocated.
pub fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(WorldGenError::InvalidDimensions { width, height });
    }
    Ok(())
}
