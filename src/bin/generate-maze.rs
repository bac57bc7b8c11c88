//! CLI for maze generation

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use lattice_maze::{
    config::{MazeConfig, ASCII_STYLE, UNICODE_STYLE},
    maze_generator::Algorithm,
    renderer::Renderer,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Generate a maze with the given algorithm and dimensions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generation algorithm
    #[arg(short, long, value_enum)]
    algorithm: Algorithm,

    /// Inner maze width, border excluded
    #[arg(short, long, allow_hyphen_values = true)]
    width: i64,

    /// Inner maze height, border excluded
    #[arg(long, allow_hyphen_values = true)]
    height: i64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Use Unicode characters for the maze display
    #[arg(short, long)]
    unicode: bool,

    /// Write the maze here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, env = "MAZE_CONFIG")]
    config: Option<PathBuf>,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MazeConfig::load(path)?,
        None => MazeConfig::default(),
    };
    let style = config
        .styles
        .get(if args.unicode { UNICODE_STYLE } else { ASCII_STYLE })?;

    let mut rng = if let Some(state) = args.seed {
        StdRng::seed_from_u64(state)
    } else {
        StdRng::from_entropy()
    };
    let maze = args
        .algorithm
        .generator(&config)
        .generate(args.width, args.height, &mut rng)?;
    info!(
        "Generated {}x{} maze with {:?}",
        maze.width(),
        maze.height(),
        args.algorithm
    );

    let renderer = if args.unicode {
        Renderer::connected(style)
    } else {
        Renderer::plain(style)
    };
    let rendered = renderer.render(&maze);

    match &args.output {
        Some(output) => fs::write(output, rendered)
            .with_context(|| format!("Failed to save maze to file {}", output.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}
