//! A* search

use super::{best_first, Heuristic, MazeSolver, Path};
use crate::grid::{Maze, Point};

/// Best-first search guided by Manhattan distance
///
/// Manhattan distance never overestimates on a four-connected grid with unit
/// moves, so the returned path is a shortest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarSolver;

impl Heuristic for AStarSolver {
    fn heuristic(&self, a: Point, b: Point) -> u64 {
        a.manhattan(b)
    }
}

impl MazeSolver for AStarSolver {
    fn solve(&self, maze: &Maze, start: Point, end: Point) -> Path {
        best_first::search("A*", self, maze, start, end)
    }
}
