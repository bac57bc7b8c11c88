//! Maze generation
//!
//! Generators carve passages on a lattice of every second square, starting
//! at the first interior square. A carved square and its lattice neighbours
//! always keep a wall square between them unless a passage is opened there.

use rand::{Rng, RngCore};

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::grid::{Maze, MazeBuilder, Point};

mod dfs;
mod kruskal;
mod prim;

pub use dfs::DfsGenerator;
pub use kruskal::KruskalGenerator;
pub use prim::PrimGenerator;

/// Something that produces a maze from inner dimensions
pub trait MazeGenerator {
    /// Generate a maze with the given inner `width` and `height`
    ///
    /// Returns [MazeError::InvalidDimension] if either dimension is not positive.
    fn generate(&self, width: i64, height: i64, rng: &mut dyn RngCore) -> Result<Maze, MazeError>;
}

/// Available generation algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Randomized depth-first search
    Dfs,
    /// Randomized Prim's algorithm
    Prim,
    /// Randomized Kruskal's algorithm
    Kruskal,
}

impl Algorithm {
    /// Generator for this algorithm, using the border width from `config`
    pub fn generator(self, config: &MazeConfig) -> Box<dyn MazeGenerator> {
        let border_width = config.border_width;
        match self {
            Algorithm::Dfs => Box::new(DfsGenerator { border_width }),
            Algorithm::Prim => Box::new(PrimGenerator { border_width }),
            Algorithm::Kruskal => Box::new(KruskalGenerator { border_width }),
        }
    }
}

/// Random lattice square inside the border of `builder`
fn random_start_point(builder: &MazeBuilder, rng: &mut dyn RngCore) -> Point {
    let border = builder.border_width();
    let inner_width = builder.width() - 2 * border;
    let inner_height = builder.height() - 2 * border;
    let x = border + 2 * rng.gen_range(0..=(inner_width - 1) / 2);
    let y = border + 2 * rng.gen_range(0..=(inner_height - 1) / 2);
    Point::new(x as i32, y as i32)
}
