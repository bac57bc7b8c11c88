//! Dijkstra's algorithm

use super::{best_first, Heuristic, MazeSolver, Path};
use crate::grid::{Maze, Point};

/// Uniform-cost search: best-first with a heuristic of zero
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSolver;

impl Heuristic for DijkstraSolver {
    fn heuristic(&self, _a: Point, _b: Point) -> u64 {
        0
    }
}

impl MazeSolver for DijkstraSolver {
    fn solve(&self, maze: &Maze, start: Point, end: Point) -> Path {
        best_first::search("Dijkstra", self, maze, start, end)
    }
}
