//! Procedural tile-world generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod biomes;
pub mod config;
pub mod error;
pub mod export;
pub mod recipes;
pub mod seeds;
pub mod shaping;
pub mod structures;
pub mod synthesis;
pub mod tilemap;
pub mod world;

pub use biomes::BiomeLabel;
pub use error::{Result, WorldGenError};
pub use tilemap::{TileGrid, Tilemap};
pub use world::{generate_tiles, generate_world, WorldGenerator, WorldType};
