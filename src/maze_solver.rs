//! Maze solving
//!
//! All solvers share one contract: both endpoints must be passable squares
//! inside the maze, otherwise the result is an empty [Path]. An empty path
//! also means that `end` cannot be reached from `start`.

use crate::grid::{Maze, Point};

mod astar;
mod best_first;
mod bfs;
mod dijkstra;

pub use astar::AStarSolver;
pub use bfs::BfsSolver;
pub use dijkstra::DijkstraSolver;

/// Squares from start to end, both included
///
/// Empty when there is no way through, a single point when start and end
/// coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Point>);

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves along the path
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

/// Something that finds a way from `start` to `end`
pub trait MazeSolver {
    fn solve(&self, maze: &Maze, start: Point, end: Point) -> Path;
}

/// Estimate of the remaining cost between two squares
pub trait Heuristic {
    fn heuristic(&self, a: Point, b: Point) -> u64;
}

/// Available solving algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Solver {
    /// A* with Manhattan distance
    Astar,
    /// Dijkstra's algorithm
    Dijkstra,
    /// Breadth-first search
    Bfs,
}

impl Solver {
    pub fn solver(self) -> Box<dyn MazeSolver> {
        match self {
            Solver::Astar => Box::new(AStarSolver),
            Solver::Dijkstra => Box::new(DijkstraSolver),
            Solver::Bfs => Box::new(BfsSolver),
        }
    }
}

/// Whether both endpoints are passable squares of `maze`
fn endpoints_are_valid(maze: &Maze, start: Point, end: Point) -> bool {
    maze.is_passable(start) && maze.is_passable(end)
}

/// Walk `came_from` back from `end` until a square without predecessor
///
/// `came_from` is indexed by [Maze::index].
fn trace_back(maze: &Maze, came_from: &[Option<Point>], end: Point) -> Path {
    let mut points = vec![end];
    let mut current = end;
    while let Some(previous) = maze.index(current).and_then(|i| came_from[i]) {
        points.push(previous);
        current = previous;
    }
    points.reverse();
    Path(points)
}

#[cfg(test)]
pub(crate) mod tests {
    use indoc::indoc;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::config::{MazeConfig, Style};
    use crate::maze_generator::Algorithm;
    use crate::parser::parse_maze;

    pub fn ascii_maze(text: &str) -> Maze {
        parse_maze(text, &Style::ascii(), &MazeConfig::default()).unwrap()
    }

    /// U-shaped corridor from (1,1) to (3,3)
    pub fn simple_maze() -> Maze {
        ascii_maze(indoc! {"
            #####
            #   #
            ### #
            #   #
            #####
        "})
    }

    /// Two routes from (1,1) to (5,1), the direct one has five squares
    pub fn optimal_path_maze() -> Maze {
        ascii_maze(indoc! {"
            #######
            #     #
            ## # ##
            #     #
            #######
        "})
    }

    /// Two sealed pockets
    pub fn impossible_maze() -> Maze {
        ascii_maze(indoc! {"
            #######
            #  #  #
            #  #  #
            #######
        "})
    }

    pub fn all_solvers() -> Vec<(Solver, Box<dyn MazeSolver>)> {
        [Solver::Bfs, Solver::Dijkstra, Solver::Astar]
            .into_iter()
            .map(|s| (s, s.solver()))
            .collect()
    }

    pub fn assert_valid_path(maze: &Maze, path: &Path, start: Point, end: Point) {
        let points = path.points();
        assert_eq!(points.first(), Some(&start));
        assert_eq!(points.last(), Some(&end));
        assert!(points.iter().all(|p| maze.is_passable(*p)));
        assert!(points.windows(2).all(|w| w[0].is_adjacent(w[1])));
    }

    #[test]
    fn finds_path_in_simple_maze() {
        let maze = simple_maze();
        let (start, end) = (Point::new(1, 1), Point::new(3, 3));
        for (kind, solver) in all_solvers() {
            let path = solver.solve(&maze, start, end);
            assert_valid_path(&maze, &path, start, end);
            assert_eq!(
                path.points(),
                [
                    Point::new(1, 1),
                    Point::new(2, 1),
                    Point::new(3, 1),
                    Point::new(3, 2),
                    Point::new(3, 3),
                ],
                "{kind:?}"
            );
        }
    }

    #[test]
    fn finds_optimal_path() {
        let maze = optimal_path_maze();
        let (start, end) = (Point::new(1, 1), Point::new(5, 1));
        for (kind, solver) in all_solvers() {
            let path = solver.solve(&maze, start, end);
            assert_valid_path(&maze, &path, start, end);
            assert_eq!(path.len(), 5, "{kind:?}");
            assert_eq!(path.steps(), 4, "{kind:?}");
        }
    }

    #[test]
    fn no_path_between_pockets() {
        let maze = impossible_maze();
        for (kind, solver) in all_solvers() {
            let path = solver.solve(&maze, Point::new(1, 1), Point::new(5, 2));
            assert!(path.is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn start_equals_end() {
        let maze = simple_maze();
        let point = Point::new(1, 1);
        for (kind, solver) in all_solvers() {
            assert_eq!(solver.solve(&maze, point, point).points(), [point], "{kind:?}");
        }
    }

    #[test]
    fn invalid_endpoints_give_empty_path() {
        let maze = simple_maze();
        let valid = Point::new(1, 1);
        let wall = Point::new(0, 0);
        let cases = [
            (wall, valid),
            (valid, wall),
            (wall, Point::new(0, 1)),
            (Point::new(-1, 1), valid),
            (valid, Point::new(10, 10)),
            (Point::new(-1, 1), Point::new(10, 10)),
        ];
        for (kind, solver) in all_solvers() {
            for (start, end) in cases {
                assert!(
                    solver.solve(&maze, start, end).is_empty(),
                    "{kind:?} {start} -> {end}"
                );
            }
        }
    }

    #[test]
    fn solvers_agree_on_generated_mazes() {
        let config = MazeConfig::default();
        for algorithm in [Algorithm::Dfs, Algorithm::Prim, Algorithm::Kruskal] {
            let generator = algorithm.generator(&config);
            for seed in 0..50 {
                let maze = generator
                    .generate(15, 11, &mut StdRng::seed_from_u64(seed))
                    .unwrap();
                let (start, end) = (Point::new(1, 1), Point::new(15, 11));

                let bfs = BfsSolver.solve(&maze, start, end);
                let dijkstra = DijkstraSolver.solve(&maze, start, end);
                let astar = AStarSolver.solve(&maze, start, end);

                assert_valid_path(&maze, &bfs, start, end);
                assert_valid_path(&maze, &dijkstra, start, end);
                assert_valid_path(&maze, &astar, start, end);
                assert_eq!(bfs.len(), dijkstra.len());
                assert_eq!(astar.len(), dijkstra.len());
            }
        }
    }

    #[test]
    fn trace_back_stops_at_start() {
        let maze = simple_maze();
        let mut came_from = vec![None; maze.width() * maze.height()];
        came_from[maze.index(Point::new(2, 1)).unwrap()] = Some(Point::new(1, 1));
        came_from[maze.index(Point::new(3, 1)).unwrap()] = Some(Point::new(2, 1));

        let path = trace_back(&maze, &came_from, Point::new(3, 1));
        assert_eq!(
            path.points(),
            [Point::new(1, 1), Point::new(2, 1), Point::new(3, 1)]
        );
    }
}
