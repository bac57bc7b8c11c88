//! Randomized Prim's algorithm

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use log::debug;
use rand::{Rng, RngCore};

use super::{random_start_point, MazeGenerator};
use crate::error::MazeError;
use crate::grid::{CellType, Direction, Maze, MazeBuilder, Node, Point};

/// Grow a spanning tree from the start square, always extending the frontier
/// square with the lowest random weight
///
/// Directions are visited in fixed order; all variety comes from the weights.
#[derive(Debug, Clone, Copy)]
pub struct PrimGenerator {
    pub border_width: usize,
}

impl Default for PrimGenerator {
    fn default() -> Self {
        Self { border_width: 1 }
    }
}

impl MazeGenerator for PrimGenerator {
    fn generate(&self, width: i64, height: i64, rng: &mut dyn RngCore) -> Result<Maze, MazeError> {
        let mut builder = MazeBuilder::new(width, height, self.border_width)?;
        let start = random_start_point(&builder, rng);

        let mut parent: Vec<Option<Point>> = vec![None; builder.width() * builder.height()];
        let mut visited = HashSet::new();
        let mut frontier = BinaryHeap::from([Reverse(Node::new(start, rng.gen()))]);

        while let Some(Reverse(Node { point: current, .. })) = frontier.pop() {
            if !visited.insert(current) {
                continue;
            }

            for direction in Direction::ALL {
                let neighbour = current.step(direction, 2);
                if !builder.is_in_bounds(neighbour) || visited.contains(&neighbour) {
                    continue;
                }
                frontier.push(Reverse(Node::new(neighbour, rng.gen())));
                let i = builder.flat_index(neighbour);
                parent[i] = Some(current);
            }

            if let Some(previous) = parent[builder.flat_index(current)] {
                builder.set_cell(current.midpoint(previous), CellType::Passable);
            }
            builder.set_cell(current, CellType::Passable);
        }

        debug!(
            "Prim generated {}x{} maze from {start}, {} lattice squares",
            width,
            height,
            visited.len()
        );
        Ok(builder.build())
    }
}
