use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::biomes::BiomeLabel;
use crate::error::{Result, WorldGenError};
use crate::tilemap::Tilemap;
use crate::world::{WorldData, WorldType};

/// Pixel size of a `width`x`height` map at `scale`, or `None` if it does not fit in `u32`.
fn scaled_dimensions(width: usize, height: usize, scale: u32) -> Option<(u32, u32)> {
    let width = u32::try_from(width).ok()?.checked_mul(scale)?;
    let height = u32::try_from(height).ok()?.checked_mul(scale)?;
    Some((width, height))
}

/// Render a biome grid with one `scale`x`scale` block of pixels per tile.
pub fn render_biome_map(tiles: &Tilemap<BiomeLabel>, scale: u32) -> Result<RgbImage> {
    let scale = scale.max(1);
    let (width, height) = scaled_dimensions(tiles.width, tiles.height, scale).ok_or_else(|| {
        WorldGenError::Config(format!(
            "png scale {} too large for a {}x{} map",
            scale, tiles.width, tiles.height
        ))
    })?;
    let mut img: RgbImage = ImageBuffer::new(width, height);

    for (x, y, biome) in tiles.iter() {
        let (r, g, b) = biome.color();
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(x as u32 * scale + dx, y as u32 * scale + dy, Rgb([r, g, b]));
            }
        }
    }

    Ok(img)
}

/// Export a biome grid as a PNG using biome colours.
pub fn export_biome_map(tiles: &Tilemap<BiomeLabel>, path: impl AsRef<Path>, scale: u32) -> Result<()> {
    render_biome_map(tiles, scale)?.save(path)?;
    Ok(())
}

/// On-disk JSON form of a generated world. Rows are listed top to bottom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldFile {
    pub seed: u64,
    pub world_type: WorldType,
    pub width: usize,
    pub height: usize,
    pub rows: Vec<Vec<BiomeLabel>>,
}

impl WorldFile {
    pub fn from_world(world: &WorldData) -> Self {
        let rows = world
            .tiles
            .as_slice()
            .chunks(world.width)
            .map(|row| row.to_vec())
            .collect();
        Self {
            seed: world.seed(),
            world_type: world.world_type,
            width: world.width,
            height: world.height,
            rows,
        }
    }

    pub fn to_tilemap(&self) -> Tilemap<BiomeLabel> {
        let data = self.rows.iter().flatten().copied().collect();
        Tilemap::from_vec(self.width, self.height, data)
    }
}

pub fn export_json(world: &WorldData, path: impl AsRef<Path>) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, &WorldFile::from_world(world))?;
    Ok(())
}

pub fn load_json(path: impl AsRef<Path>) -> Result<WorldFile> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
