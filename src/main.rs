//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use lattice_maze::{
    config::{MazeConfig, ASCII_STYLE, UNICODE_STYLE},
    maze_solver::Solver,
    parser::parse_maze,
    renderer::Renderer,
    Point,
};
use log::info;

/// Find a way through a maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Solving algorithm
    #[arg(short, long, value_enum)]
    algorithm: Solver,

    /// File, where to read the maze. Use `-` for stdin.
    #[arg(short, long)]
    file: PathBuf,

    /// Start point, format: x,y
    #[arg(short, long, allow_hyphen_values = true)]
    start: Point,

    /// End point, format: x,y
    #[arg(short, long, allow_hyphen_values = true)]
    end: Point,

    /// Use Unicode characters for the maze display
    #[arg(short, long)]
    unicode: bool,

    /// Write the solved maze here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, env = "MAZE_CONFIG")]
    config: Option<PathBuf>,
}

/// Read maze from file, print the solved maze
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

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Error reading maze file {}", args.file.display()))?
    };
    let maze = parse_maze(&text, style, &config)
        .with_context(|| format!("Invalid maze in {}", args.file.display()))?;
    info!("Loaded {}x{} maze", maze.width(), maze.height());

    let path = args.algorithm.solver().solve(&maze, args.start, args.end);
    if path.is_empty() {
        info!("Search finished without reaching {}", args.end);
        eprintln!("No path found from {} to {}", args.start, args.end);
    } else {
        info!("Path of {} steps", path.steps());
    }

    let renderer = if args.unicode {
        Renderer::connected(style)
    } else {
        Renderer::plain(style)
    };
    let rendered = renderer.render_solution(&maze, &path);

    match &args.output {
        Some(output) => fs::write(output, rendered)
            .with_context(|| format!("Failed to save maze to file {}", output.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}
