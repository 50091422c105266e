//! Debug script to dump every world type for one seed as ASCII

use std::fs::File;
use std::io::{self, Write};

use rpg_worldgen::ascii::{biome_legend, format_biome_stats, render_ascii_map};
use rpg_worldgen::world::{build_world, WorldType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let width = 100;
    let height = 70;
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(12345);

    let mut file = File::create("world_debug.txt")?;
    writeln!(file, "=== WORLD DEBUG MAPS ({}x{}) seed={} ===", width, height, seed)?;
    writeln!(file)?;
    write!(file, "{}", biome_legend())?;

    for &world_type in WorldType::all() {
        let world = build_world(width, height, world_type, seed)?;
        write_section(&mut file, &world.world_type.to_string().to_uppercase(), &render_ascii_map(&world.tiles))?;
        write!(file, "{}", format_biome_stats(&world.tiles))?;
        println!("Wrote {}", world_type);
    }

    println!("Output written to world_debug.txt");
    Ok(())
}

fn write_section(file: &mut File, title: &str, body: &str) -> io::Result<()> {
    writeln!(file)?;
    writeln!(file, "=== {} ===", title)?;
    write!(file, "{}", body)
}
