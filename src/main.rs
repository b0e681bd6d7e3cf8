//! # Delve Entry Point
//!
//! Generates one dungeon from command line options and prints it as an ASCII
//! map or a JSON report.

use clap::{Parser, ValueEnum};
use delve::{
    config, generation::utils, render_ascii, select_spawn_cells, BspDungeonGenerator,
    DelveResult, GenerationConfig, Generator, LayoutReport,
};
use log::{info, LevelFilter};
use std::path::PathBuf;

/// Command line arguments for the Delve dungeon generator.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(about = "Binary space partition dungeon generator")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON generation config; explicit flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Map height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Minimum room edge length
    #[arg(long)]
    min_room_size: Option<u32>,

    /// Maximum room edge length
    #[arg(long)]
    max_room_size: Option<u32>,

    /// Maximum partition depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Corridor width in cells
    #[arg(long)]
    corridor_width: Option<u32>,

    /// Clearance required around the player spawn cell
    #[arg(long, default_value_t = config::DEFAULT_SPAWN_PADDING)]
    padding: u32,

    /// Number of enemy spawn cells to pick outside the player's room
    #[arg(long, default_value_t = 0)]
    enemies: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

fn main() -> DelveResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Delve v{}", delve::VERSION);

    let config = build_config(&args)?;
    run(&args, &config)
}

/// Initializes env_logger. `RUST_LOG` takes precedence over `--log-level`.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

/// Defaults, then the config file, then explicit flags.
fn build_config(args: &Args) -> DelveResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading generation config from {}", path.display());
            GenerationConfig::from_json_file(path)?
        }
        None => GenerationConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(min_room_size) = args.min_room_size {
        config.min_room_size = min_room_size;
    }
    if let Some(max_room_size) = args.max_room_size {
        config.max_room_size = max_room_size;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(corridor_width) = args.corridor_width {
        config.corridor_width = corridor_width;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args, config: &GenerationConfig) -> DelveResult<()> {
    info!("Generating dungeon with seed: {}", config.seed);

    let generator = BspDungeonGenerator::new();
    let mut rng = utils::create_rng(config);
    let layout = generator.generate(config, &mut rng)?;

    let player = layout.spawn_position(args.padding);
    let player_room = player.and_then(|cell| layout.find_room_containing(cell));
    let enemies = select_spawn_cells(
        layout.rooms(),
        layout.grid(),
        player_room,
        args.enemies,
        config::DEFAULT_PLACEMENT_TRIES,
        &mut rng,
    );

    match player {
        Some(cell) => info!("Player spawn at {}", cell),
        None => info!("No rooms generated, no player spawn"),
    }

    match args.format {
        OutputFormat::Ascii => {
            let enemy_cells: Vec<_> = enemies.iter().map(|point| point.cell).collect();
            print!("{}", render_ascii(&layout, player, &enemy_cells));
        }
        OutputFormat::Json => {
            println!("{}", LayoutReport::new(&layout, player, &enemies).to_json()?);
        }
    }

    Ok(())
}
