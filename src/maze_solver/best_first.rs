//! Best-first search shared by Dijkstra and A*

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use super::{endpoints_are_valid, trace_back, Heuristic, Path};
use crate::grid::{Maze, Node, Point};

/// Every move between neighbouring squares costs the same
const EDGE_COST: u64 = 1;

/// Larger than any reachable path cost
const UNREACHED: u64 = u64::MAX;

/// Expand squares in order of `cost so far + heuristic`
///
/// With an admissible `heuristic` the first time `end` is popped its path is
/// a shortest one.
pub(super) fn search<H: Heuristic + ?Sized>(
    name: &str,
    heuristic: &H,
    maze: &Maze,
    start: Point,
    end: Point,
) -> Path {
    if !endpoints_are_valid(maze, start, end) {
        return Path::default();
    }

    let size = maze.width() * maze.height();
    let mut came_from: Vec<Option<Point>> = vec![None; size];
    let mut min_cost = vec![UNREACHED; size];
    let mut visited = vec![false; size];

    if let Some(i) = maze.index(start) {
        min_cost[i] = 0;
    }
    let mut frontier = BinaryHeap::from([Reverse(Node::new(
        start,
        heuristic.heuristic(start, end),
    ))]);

    let mut expanded = 0;
    while let Some(Reverse(Node { point: current, .. })) = frontier.pop() {
        if current == end {
            let path = trace_back(maze, &came_from, end);
            debug!("{name} expanded {expanded} squares, path has {} points", path.len());
            return path;
        }

        let Some(ci) = maze.index(current) else {
            continue;
        };
        // Stale queue entry
        if visited[ci] {
            continue;
        }
        visited[ci] = true;
        expanded += 1;

        for neighbour in maze.passable_neighbours(current) {
            let Some(ni) = maze.index(neighbour) else {
                continue;
            };
            if visited[ni] {
                continue;
            }

            let cost = min_cost[ci] + EDGE_COST;
            if cost < min_cost[ni] {
                came_from[ni] = Some(current);
                min_cost[ni] = cost;
                frontier.push(Reverse(Node::new(
                    neighbour,
                    cost + heuristic.heuristic(neighbour, end),
                )));
            }
        }
    }

    debug!("{name} expanded {expanded} squares, {end} not reachable from {start}");
    Path::default()
}
