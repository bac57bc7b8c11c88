//! Randomized depth-first search

use std::collections::HashSet;

use log::debug;
use rand::RngCore;

use super::{random_start_point, MazeGenerator};
use crate::error::MazeError;
use crate::grid::{CellType, Direction, Maze, MazeBuilder};

/// Carve passages with an explicit stack, trying directions in random order
///
/// Every lattice square is opened exactly once, through the first passage
/// that discovers it, so the result is a perfect maze.
#[derive(Debug, Clone, Copy)]
pub struct DfsGenerator {
    pub border_width: usize,
}

impl Default for DfsGenerator {
    fn default() -> Self {
        Self { border_width: 1 }
    }
}

impl MazeGenerator for DfsGenerator {
    fn generate(&self, width: i64, height: i64, rng: &mut dyn RngCore) -> Result<Maze, MazeError> {
        let mut builder = MazeBuilder::new(width, height, self.border_width)?;
        let start = random_start_point(&builder, rng);

        builder.set_cell(start, CellType::Passable);
        let mut visited = HashSet::from([start]);
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            for direction in Direction::shuffled(rng) {
                let neighbour = current.step(direction, 2);

                // A failed write means the neighbour is outside the interior
                if visited.contains(&neighbour)
                    || !builder.set_cell(neighbour, CellType::Passable)
                {
                    continue;
                }

                builder.set_cell(current.step(direction, 1), CellType::Passable);
                visited.insert(neighbour);
                stack.push(neighbour);
            }
        }

        debug!(
            "DFS generated {}x{} maze from {start}, {} lattice squares",
            width,
            height,
            visited.len()
        );
        Ok(builder.build())
    }
}
