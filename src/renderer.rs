//! Turning mazes and solutions into text

use itertools::Itertools;

use crate::config::Style;
use crate::grid::{CellType, Direction, Maze, Point};
use crate::maze_solver::Path;

/// Renders mazes one character per square, one line per row
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    style: &'a Style,
    /// Draw walls with the connection glyph matching their wall neighbours
    connected_walls: bool,
}

impl<'a> Renderer<'a> {
    /// Every wall drawn with the plain wall symbol
    pub fn plain(style: &'a Style) -> Self {
        Self {
            style,
            connected_walls: false,
        }
    }

    /// Walls drawn with box-drawing connections
    pub fn connected(style: &'a Style) -> Self {
        Self {
            style,
            connected_walls: true,
        }
    }

    /// Render the maze as it is
    pub fn render(&self, maze: &Maze) -> String {
        self.render_with(maze, |_| None)
    }

    /// Render the maze with `path` drawn over it
    ///
    /// The first point is the entrance, the last one the exit. Walls are
    /// never drawn over.
    pub fn render_solution(&self, maze: &Maze, path: &Path) -> String {
        let points = path.points();
        let last = points.len().saturating_sub(1);
        let mut overlay = vec![None; maze.width() * maze.height()];
        for (i, point) in points.iter().enumerate() {
            let marker = if i == last {
                CellType::Exit
            } else if i == 0 {
                CellType::Enter
            } else {
                CellType::Path
            };
            if let Some(index) = maze.index(*point) {
                overlay[index] = Some(marker);
            }
        }
        self.render_with(maze, |point| maze.index(point).and_then(|i| overlay[i]))
    }

    fn render_with(&self, maze: &Maze, overlay: impl Fn(Point) -> Option<CellType>) -> String {
        maze.rows()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        let point = Point::new(x as i32, y as i32);
                        match cell {
                            CellType::Wall => self.wall_symbol(maze, point),
                            _ => self.style.symbol(overlay(point).unwrap_or(*cell)),
                        }
                    })
                    .collect::<String>()
            })
            .map(|line| line + "\n")
            .join("")
    }

    fn wall_symbol(&self, maze: &Maze, point: Point) -> char {
        if !self.connected_walls {
            return self.style.symbol(CellType::Wall);
        }
        self.style.connection(&connection_pattern(maze, point))
    }
}

/// Wall neighbours of `point` as `1`/`0` in [Direction::ALL] order
fn connection_pattern(maze: &Maze, point: Point) -> String {
    Direction::ALL
        .into_iter()
        .map(|d| match maze.get(point.step(d, 1)) {
            Some(CellType::Wall) => '1',
            _ => '0',
        })
        .collect()
}
