//! ASCII rendering and export module for world maps
//!
//! Provides functions to render biome grids as ASCII text and export to files.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::biomes::BiomeLabel;
use crate::tilemap::Tilemap;
use crate::world::WorldData;

/// Get ASCII character for a biome
pub fn biome_char(biome: &BiomeLabel) -> char {
    match biome {
        // Water
        BiomeLabel::DeepWater => '~',
        BiomeLabel::ShallowWater => '.',

        // Lowlands
        BiomeLabel::Sand => ':',
        BiomeLabel::Grass => '"',
        BiomeLabel::Forest => 'T',
        BiomeLabel::Jungle => 't',
        BiomeLabel::Savanna => ';',
        BiomeLabel::Desert => 'd',
        BiomeLabel::Swamp => 'S',

        // Highlands
        BiomeLabel::Hills => 'n',
        BiomeLabel::Mountains => '^',
        BiomeLabel::Snow => '#',

        // Structures
        BiomeLabel::Lava => '@',
        BiomeLabel::Wall => 'W',
    }
}

/// Render a map to ASCII string
pub fn render_ascii_map(tiles: &Tilemap<BiomeLabel>) -> String {
    let mut result = String::with_capacity((tiles.width + 1) * tiles.height);

    for y in 0..tiles.height {
        for x in 0..tiles.width {
            result.push(biome_char(tiles.get(x, y)));
        }
        result.push('\n');
    }

    result
}

/// Generate legend for biome characters
pub fn biome_legend() -> String {
    let mut legend = String::from("=== BIOME LEGEND ===\n");
    for (i, biome) in BiomeLabel::all().iter().enumerate() {
        legend.push_str(&format!("  {} {:14}", biome_char(biome), biome.display_name()));
        if i % 4 == 3 {
            legend.push('\n');
        }
    }
    if !legend.ends_with('\n') {
        legend.push('\n');
    }
    legend
}

/// Calculate biome statistics
pub fn calculate_biome_stats(tiles: &Tilemap<BiomeLabel>) -> HashMap<BiomeLabel, usize> {
    let mut stats = HashMap::new();
    for (_, _, biome) in tiles.iter() {
        *stats.entry(*biome).or_insert(0) += 1;
    }
    stats
}

/// Biome counts sorted by count descending, ties by label order.
pub fn sorted_biome_stats(tiles: &Tilemap<BiomeLabel>) -> Vec<(BiomeLabel, usize)> {
    let mut sorted: Vec<_> = calculate_biome_stats(tiles).into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    sorted
}

/// Human-readable statistics block.
pub fn format_biome_stats(tiles: &Tilemap<BiomeLabel>) -> String {
    let total = (tiles.width * tiles.height).max(1);
    let walkable = tiles.iter().filter(|(_, _, b)| b.is_walkable()).count();
    let water = tiles.iter().filter(|(_, _, b)| b.is_water()).count();

    let mut out = String::new();
    out.push_str(&format!("Total tiles: {}\n", total));
    out.push_str(&format!("Water: {} ({:.1}%)\n", water, 100.0 * water as f64 / total as f64));
    out.push_str(&format!("Walkable: {} ({:.1}%)\n", walkable, 100.0 * walkable as f64 / total as f64));
    out.push_str("Biome Distribution:\n");
    for (biome, count) in sorted_biome_stats(tiles) {
        let pct = 100.0 * count as f64 / total as f64;
        out.push_str(&format!("  {:14} {} {:>6} ({:>5.1}%)\n", biome.display_name(), biome_char(&biome), count, pct));
    }
    out
}

/// Export world data to ASCII file
pub fn export_world_file(world: &WorldData, path: impl AsRef<Path>, verbose: bool) -> io::Result<()> {
    let mut file = File::create(path)?;

    // Header
    writeln!(file, "=== WORLD FILE ===")?;
    writeln!(file, "Seed: {}", world.seed())?;
    writeln!(file, "Type: {}", world.world_type)?;
    writeln!(file, "Size: {}x{}", world.width, world.height)?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    writeln!(file, "=== MAP ===")?;
    write!(file, "{}", render_ascii_map(&world.tiles))?;
    writeln!(file)?;

    write!(file, "{}", biome_legend())?;
    writeln!(file)?;

    writeln!(file, "=== STATISTICS ===")?;
    write!(file, "{}", format_biome_stats(&world.tiles))?;
    let report = &world.structures;
    writeln!(file, "Beach tiles: {}", report.beach_tiles)?;
    if !report.craters.is_empty() {
        writeln!(file, "Craters: {}", report.craters.len())?;
    }
    if !report.ranges.is_empty() {
        writeln!(file, "Mountain ranges: {}", report.ranges.len())?;
    }
    if !report.walls.is_empty() {
        writeln!(file, "Wall structures: {}", report.walls.len())?;
    }

    if verbose {
        writeln!(file)?;
        writeln!(file, "=== TILE DATA ===")?;
        writeln!(file, "[x,y,biome,walkable]")?;
        for (x, y, biome) in world.tiles.iter() {
            writeln!(file, "{},{},{},{}", x, y, biome.display_name(), biome.is_walkable())?;
        }
    }

    Ok(())
}

// ============================================================================
// COLORIZED ASCII RENDERING
// ============================================================================

/// Get foreground color for a biome (lighter/contrasting color for the character)
pub fn biome_fg_color(biome: &BiomeLabel) -> (u8, u8, u8) {
    let (r, g, b) = biome.color();
    let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    if luminance > 128.0 {
        (r.saturating_sub(60), g.saturating_sub(60), b.saturating_sub(60))
    } else {
        (r.saturating_add(80), g.saturating_add(80), b.saturating_add(80))
    }
}

/// Format a single character with ANSI true color (24-bit) - foreground and background
pub fn ansi_colored_char(ch: char, fg: (u8, u8, u8), bg: (u8, u8, u8)) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        fg.0, fg.1, fg.2,
        bg.0, bg.1, bg.2,
        ch
    )
}

/// Format a string with ANSI true color (24-bit) - foreground only
pub fn ansi_fg_colored(text: &str, fg: (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", fg.0, fg.1, fg.2, text)
}

/// Render a colorized ASCII map to string with ANSI codes
pub fn render_colored_ascii_map(tiles: &Tilemap<BiomeLabel>) -> String {
    // Each cell needs ~40 bytes for ANSI codes
    let mut result = String::with_capacity(tiles.width * tiles.height * 45);

    for y in 0..tiles.height {
        for x in 0..tiles.width {
            let biome = tiles.get(x, y);
            result.push_str(&ansi_colored_char(biome_char(biome), biome_fg_color(biome), biome.color()));
        }
        result.push_str("\x1b[0m\n");
    }

    result
}

/// Generate colorized legend for biome characters
pub fn biome_legend_colored() -> String {
    let mut legend = String::from("\x1b[1m=== BIOME LEGEND ===\x1b[0m\n");
    for chunk in BiomeLabel::all().chunks(4) {
        let entries: Vec<String> = chunk
            .iter()
            .map(|biome| {
                let swatch = ansi_colored_char(biome_char(biome), biome_fg_color(biome), biome.color());
                format!("{} {:14}", swatch, ansi_fg_colored(biome.display_name(), biome.color()))
            })
            .collect();
        legend.push_str("  ");
        legend.push_str(&entries.join(" "));
        legend.push('\n');
    }
    legend
}
