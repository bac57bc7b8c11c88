//! Breadth-first search

use std::collections::VecDeque;

use log::debug;

use super::{endpoints_are_valid, trace_back, MazeSolver, Path};
use crate::grid::{Maze, Point};

/// Level-order search; the first time `end` is dequeued the path is shortest
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSolver;

impl MazeSolver for BfsSolver {
    fn solve(&self, maze: &Maze, start: Point, end: Point) -> Path {
        if !endpoints_are_valid(maze, start, end) {
            return Path::default();
        }

        let size = maze.width() * maze.height();
        let mut came_from: Vec<Option<Point>> = vec![None; size];
        let mut visited = vec![false; size];
        let mut queue = VecDeque::from([start]);
        if let Some(i) = maze.index(start) {
            visited[i] = true;
        }

        let mut expanded = 0;
        while let Some(current) = queue.pop_front() {
            if current == end {
                let path = trace_back(maze, &came_from, end);
                debug!("BFS expanded {expanded} squares, path has {} points", path.len());
                return path;
            }
            expanded += 1;

            for neighbour in maze.passable_neighbours(current) {
                let Some(i) = maze.index(neighbour) else {
                    continue;
                };
                if visited[i] {
                    continue;
                }
                visited[i] = true;
                came_from[i] = Some(current);
                queue.push_back(neighbour);
            }
        }

        debug!("BFS expanded {expanded} squares, {end} not reachable from {start}");
        Path::default()
    }
}
