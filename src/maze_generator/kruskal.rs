//! Randomized Kruskal's algorithm

use itertools::iproduct;
use log::debug;
use rand::{seq::SliceRandom, RngCore};

use super::MazeGenerator;
use crate::error::MazeError;
use crate::grid::{CellType, Direction, Maze, MazeBuilder, Point};
use crate::union_find::UnionFind;

/// Two lattice squares and the wall square between them
#[derive(Debug, Clone, Copy)]
struct Edge {
    first: Point,
    mid: Point,
    second: Point,
}

/// Open walls in random order whenever they join two separate regions
#[derive(Debug, Clone, Copy)]
pub struct KruskalGenerator {
    pub border_width: usize,
}

impl Default for KruskalGenerator {
    fn default() -> Self {
        Self { border_width: 1 }
    }
}

impl KruskalGenerator {
    /// Lattice squares inside the border, row by row
    fn lattice(builder: &MazeBuilder) -> Vec<Point> {
        let b = builder.border_width();
        let xs = (b..builder.width() - b).step_by(2);
        let ys = (b..builder.height() - b).step_by(2);
        iproduct!(ys, xs)
            .map(|(y, x)| Point::new(x as i32, y as i32))
            .collect()
    }

    /// Every edge to the right and downwards between lattice squares
    fn edges(builder: &MazeBuilder, lattice: &[Point]) -> Vec<Edge> {
        iproduct!(lattice.iter().copied(), [Direction::Right, Direction::Down])
            .filter_map(|(first, direction)| {
                let second = first.step(direction, 2);
                builder.is_in_bounds(second).then(|| Edge {
                    first,
                    mid: first.step(direction, 1),
                    second,
                })
            })
            .collect()
    }
}

impl MazeGenerator for KruskalGenerator {
    fn generate(&self, width: i64, height: i64, rng: &mut dyn RngCore) -> Result<Maze, MazeError> {
        let mut builder = MazeBuilder::new(width, height, self.border_width)?;

        let lattice = Self::lattice(&builder);
        let mut edges = Self::edges(&builder, &lattice);
        edges.shuffle(rng);

        // Every lattice square is a vertex of the spanning tree, including
        // the lone one of a maze with no edges at all
        for point in &lattice {
            builder.set_cell(*point, CellType::Passable);
        }

        let mut regions = UnionFind::new(builder.width() * builder.height());
        let mut opened = 0;
        for edge in &edges {
            let a = builder.flat_index(edge.first);
            let b = builder.flat_index(edge.second);
            if regions.connected(a, b) {
                continue;
            }
            builder.set_cell(edge.first, CellType::Passable);
            builder.set_cell(edge.mid, CellType::Passable);
            builder.set_cell(edge.second, CellType::Passable);
            regions.union(a, b);
            opened += 1;
        }

        debug!(
            "Kruskal generated {}x{} maze, opened {} of {} walls",
            width,
            height,
            opened,
            edges.len()
        );
        Ok(builder.build())
    }
}
