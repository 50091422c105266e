use std::error::Error;

use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use rpg_worldgen::ascii;
use rpg_worldgen::config::GeneratorConfig;
use rpg_worldgen::export;
use rpg_worldgen::world::{build_world, WorldData, WorldType};

#[derive(Parser, Debug)]
#[command(name = "rpg_worldgen")]
#[command(about = "Generate procedural tile worlds from a seed")]
struct Args {
    /// Width of the map in tiles (default: 100)
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Height of the map in tiles (default: 70)
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// World type: classic, archipelago, continents, pangea, islands, volcanic or random
    #[arg(short = 't', long)]
    world_type: Option<String>,

    /// Load settings from a JSON file; other flags override it
    #[arg(long)]
    config: Option<String>,

    /// Print the map as ASCII
    #[arg(long)]
    ascii: bool,

    /// Print the map with ANSI colours
    #[arg(long)]
    color: bool,

    /// Print the biome legend
    #[arg(long)]
    legend: bool,

    /// Print biome statistics
    #[arg(long)]
    stats: bool,

    /// Export the map as a PNG
    #[arg(long)]
    export_png: Option<String>,

    /// Pixels per tile for PNG export
    #[arg(long, default_value = "8")]
    png_scale: u32,

    /// Export the tile grid as JSON
    #[arg(long)]
    export_json: Option<String>,

    /// Export the map, legend and statistics to a text file
    #[arg(long)]
    export_text: Option<String>,

    /// Generate every world type with the same seed
    #[arg(long)]
    all: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Merge the config file (if any) with command-line overrides.
fn resolve_config(args: &Args) -> Result<GeneratorConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(name) = &args.world_type {
        config.world_type = if name.eq_ignore_ascii_case("random") {
            WorldType::random(&mut rand::thread_rng())
        } else {
            name.parse()?
        };
    }

    config.validate()?;
    Ok(config)
}

fn print_world(world: &WorldData, args: &Args) {
    if args.color {
        print!("{}", ascii::render_colored_ascii_map(&world.tiles));
    } else if args.ascii {
        print!("{}", ascii::render_ascii_map(&world.tiles));
    }

    if args.legend {
        if args.color {
            print!("{}", ascii::biome_legend_colored());
        } else {
            print!("{}", ascii::biome_legend());
        }
    }

    if args.stats {
        print!("{}", ascii::format_biome_stats(&world.tiles));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();
    let config = resolve_config(&args)?;

    let seed = config.seed.unwrap_or_else(rand::random);
    println!("Generating world with seed: {}", seed);
    println!("Map size: {}x{}", config.width, config.height);

    if args.all {
        println!("Generating all {} world types...", WorldType::all().len());
        let worlds = WorldType::all()
            .par_iter()
            .map(|&world_type| build_world(config.width, config.height, world_type, seed))
            .collect::<Result<Vec<_>, _>>()?;

        for world in &worlds {
            println!();
            println!("=== {} ===", world.world_type);
            print_world(world, &args);
            if !args.stats {
                let stats = ascii::sorted_biome_stats(&world.tiles);
                if let Some((biome, count)) = stats.first() {
                    println!("Dominant biome: {} ({} tiles)", biome.display_name(), count);
                }
            }
        }
        return Ok(());
    }

    println!("World type: {}", config.world_type);
    let world = build_world(config.width, config.height, config.world_type, seed)?;

    let report = &world.structures;
    println!("Beaches: {} tiles", report.beach_tiles);
    match config.world_type {
        WorldType::Volcanic => println!("Stamped {} craters", report.craters.len()),
        WorldType::Pangea => println!("Stamped {} mountain ranges", report.ranges.len()),
        WorldType::Continents => println!("Stamped {} wall structures", report.walls.len()),
        _ => {}
    }

    print_world(&world, &args);

    if let Some(path) = &args.export_png {
        println!("Exporting PNG to {}...", path);
        export::export_biome_map(&world.tiles, path, args.png_scale)?;
    }

    if let Some(path) = &args.export_json {
        println!("Exporting JSON to {}...", path);
        export::export_json(&world, path)?;
    }

    if let Some(path) = &args.export_text {
        println!("Exporting text map to {}...", path);
        ascii::export_world_file(&world, path, false)?;
    }

    println!("Done.");
    Ok(())
}
