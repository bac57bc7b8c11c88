//! Generate rectangular grid mazes and find ways through them
//!
//! Mazes are generated with randomized depth-first search, Prim's or
//! Kruskal's algorithm and solved with breadth-first search, Dijkstra's
//! algorithm or A*.
//!
//! # Examples
//! ## Generate and solve a maze
//! ```
//! use lattice_maze::config::MazeConfig;
//! use lattice_maze::grid::Point;
//! use lattice_maze::maze_generator::Algorithm;
//! use lattice_maze::maze_solver::Solver;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = MazeConfig::default();
//! let mut rng = StdRng::seed_from_u64(7);
//! let maze = Algorithm::Kruskal
//!     .generator(&config)
//!     .generate(9, 9, &mut rng)
//!     .unwrap();
//!
//! let path = Solver::Astar
//!     .solver()
//!     .solve(&maze, Point::new(1, 1), Point::new(9, 9));
//! assert_eq!(path.points().first(), Some(&Point::new(1, 1)));
//! assert_eq!(path.points().last(), Some(&Point::new(9, 9)));
//! ```
//!
//! ## Solve a maze read from text
//! ```
//! use lattice_maze::config::{MazeConfig, Style};
//! use lattice_maze::grid::Point;
//! use lattice_maze::maze_solver::{BfsSolver, MazeSolver};
//! use lattice_maze::parser::parse_maze;
//! use lattice_maze::renderer::Renderer;
//!
//! let text = "
//! ########
//! ##     #
//! ## ### #
//! ##   # #
//! ########";
//! let style = Style::ascii();
//! let maze = parse_maze(text.trim(), &style, &MazeConfig::default()).unwrap();
//! let path = BfsSolver.solve(&maze, Point::new(1, 3), Point::new(5, 3));
//! assert_eq!(path.len(), 9);
//!
//! print!("{}", Renderer::plain(&style).render_solution(&maze, &path));
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod maze_solver;
pub mod parser;
pub mod renderer;
pub mod union_find;

pub use error::{ConfigError, MazeError, ParseError};
pub use grid::{CellType, Maze, MazeBuilder, Point};
pub use maze_solver::Path;
