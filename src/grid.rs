//! Grid model: cell states, coordinates and the bordered maze

use std::fmt;
use std::str::FromStr;

use rand::{seq::SliceRandom, RngCore};

use crate::error::{MazeError, PointParseError};

/// State of a single maze square
///
/// Freshly generated mazes only contain [CellType::Wall] and
/// [CellType::Passable]; the rest are overlay markers for solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Wall,
    Passable,
    Path,
    Enter,
    Exit,
}

/// Location in the maze, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point `steps` squares away in `direction`
    pub fn step(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }

    /// Manhattan distance `|dx| + |dy|`
    pub fn manhattan(self, other: Point) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Whether the points share an edge
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parse `x,y`, surrounding whitespace allowed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| PointParseError::Format(s.to_string()))?;
        if y.contains(',') {
            return Err(PointParseError::Format(s.to_string()));
        }
        let parse = |v: &str| {
            v.trim()
                .parse::<i32>()
                .map_err(|_| PointParseError::Number(s.to_string()))
        };
        Ok(Point::new(parse(x)?, parse(y)?))
    }
}

/// The four orthogonal moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Fixed iteration order, also the bit order of wall connection patterns
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Column and row offsets `(dx, dy)`
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    /// All directions in random order
    pub fn shuffled(rng: &mut dyn RngCore) -> [Direction; 4] {
        let mut directions = Self::ALL;
        directions.shuffle(rng);
        directions
    }
}

/// Point paired with a priority, ordered by weight first
///
/// Wrap in [std::cmp::Reverse] to pop the lowest weight from a
/// [std::collections::BinaryHeap].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Node {
    pub weight: u64,
    pub point: Point,
}

impl Node {
    pub fn new(point: Point, weight: u64) -> Self {
        Self { weight, point }
    }
}

/// Finished, immutable maze including its wall border
///
/// Only constructed through [MazeBuilder].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// Row-major cells, `width * height` entries
    cells: Vec<CellType>,
    width: usize,
    height: usize,
    border_width: usize,
}

impl Maze {
    /// Total width, border included
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total height, border included
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn border_width(&self) -> usize {
        self.border_width
    }

    /// Flat index of `point`, `None` when outside the grid
    pub fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Cell at `point`, `None` when outside the grid
    pub fn get(&self, point: Point) -> Option<CellType> {
        self.index(point).map(|i| self.cells[i])
    }

    pub fn is_passable(&self, point: Point) -> bool {
        self.get(point) == Some(CellType::Passable)
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellType]> {
        self.cells.chunks(self.width)
    }

    /// Every point of the grid in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Point::new(x as i32, y as i32)))
    }

    /// Passable orthogonal neighbours of `point`
    pub fn passable_neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |d| point.step(d, 1))
            .filter(|n| self.is_passable(*n))
    }
}

/// Staging area for building a [Maze] cell by cell
///
/// All cells start as walls. Writes outside the interior are ignored, so the
/// border ring stays intact whatever the caller does.
#[derive(Debug)]
pub struct MazeBuilder {
    cells: Vec<CellType>,
    width: usize,
    height: usize,
    border_width: usize,
}

impl MazeBuilder {
    /// Create a builder for a maze with the given inner dimensions
    ///
    /// The total dimensions grow by `2 * border_width` in both directions.
    ///
    /// Returns [MazeError::InvalidDimension] if `width` or `height` is not
    /// positive, or if the bordered grid does not fit [Point] coordinates.
    pub fn new(width: i64, height: i64, border_width: usize) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimension { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }

        // Totals and cell count must stay addressable with i32 coordinates
        let total = |inner: i64| {
            i64::try_from(border_width)
                .ok()
                .and_then(|b| b.checked_mul(2))
                .and_then(|b| inner.checked_add(b))
                .filter(|t| *t <= i64::from(i32::MAX))
        };
        let (Some(total_width), Some(total_height)) = (total(width), total(height)) else {
            return Err(invalid);
        };
        let Some(len) = total_width
            .checked_mul(total_height)
            .filter(|len| *len <= i64::from(i32::MAX))
        else {
            return Err(invalid);
        };
        let (total_width, total_height) = (total_width as usize, total_height as usize);

        Ok(Self {
            cells: vec![CellType::Wall; len as usize],
            width: total_width,
            height: total_height,
            border_width,
        })
    }

    /// Total width, border included
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total height, border included
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn border_width(&self) -> usize {
        self.border_width
    }

    /// Whether `point` lies strictly inside the border ring
    pub fn is_in_bounds(&self, point: Point) -> bool {
        let b = self.border_width as i64;
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        x >= b && x < self.width as i64 - b && y >= b && y < self.height as i64 - b
    }

    /// Write `cell_type` at `point`
    ///
    /// Returns `false` and leaves the grid untouched when `point` is out of bounds.
    pub fn set_cell(&mut self, point: Point, cell_type: CellType) -> bool {
        if !self.is_in_bounds(point) {
            return false;
        }
        let i = point.y as usize * self.width + point.x as usize;
        self.cells[i] = cell_type;
        true
    }

    /// Flat index `y * width + x` over the total grid
    pub(crate) fn flat_index(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// Freeze the builder into a finished maze
    pub fn build(self) -> Maze {
        Maze {
            cells: self.cells,
            width: self.width,
            height: self.height,
            border_width: self.border_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_non_positive_dimensions() {
        assert_eq!(
            MazeBuilder::new(0, 5, 1).unwrap_err(),
            MazeError::InvalidDimension {
                width: 0,
                height: 5
            }
        );
        assert!(MazeBuilder::new(5, -1, 1).is_err());
    }

    #[test]
    fn builder_rejects_dimensions_beyond_coordinates() {
        assert!(MazeBuilder::new(i64::MAX / 2, 3, 1).is_err());
        assert!(MazeBuilder::new(3, i64::MAX, 1).is_err());
        assert!(MazeBuilder::new(3_000_000_000, 1, 1).is_err());
        assert!(MazeBuilder::new(i64::from(i32::MAX) - 1, 1, 1).is_err());
        assert!(MazeBuilder::new(100_000, 100_000, 1).is_err());
        assert!(MazeBuilder::new(3, 3, usize::MAX).is_err());
        assert_eq!(
            MazeBuilder::new(i64::MAX, 3, 1).unwrap_err(),
            MazeError::InvalidDimension {
                width: i64::MAX,
                height: 3
            }
        );
    }

    #[test]
    fn builder_adds_border_to_dimensions() {
        let builder = MazeBuilder::new(10, 7, 2).unwrap();
        assert_eq!(builder.width(), 14);
        assert_eq!(builder.height(), 11);

        let maze = builder.build();
        assert!(maze
            .rows()
            .flatten()
            .all(|cell| *cell == CellType::Wall));
    }

    #[test]
    fn writes_outside_interior_are_ignored() {
        let mut builder = MazeBuilder::new(3, 3, 1).unwrap();
        assert!(builder.set_cell(Point::new(1, 1), CellType::Passable));
        assert!(builder.set_cell(Point::new(3, 3), CellType::Passable));
        assert!(!builder.set_cell(Point::new(0, 1), CellType::Passable));
        assert!(!builder.set_cell(Point::new(4, 2), CellType::Passable));
        assert!(!builder.set_cell(Point::new(-1, -1), CellType::Passable));

        let maze = builder.build();
        assert_eq!(maze.get(Point::new(1, 1)), Some(CellType::Passable));
        assert_eq!(maze.get(Point::new(0, 1)), Some(CellType::Wall));
        assert_eq!(maze.get(Point::new(4, 2)), Some(CellType::Wall));
        assert_eq!(maze.get(Point::new(5, 0)), None);
    }

    #[test]
    fn bounds_follow_border_width() {
        let builder = MazeBuilder::new(2, 2, 2).unwrap();
        assert!(!builder.is_in_bounds(Point::new(1, 2)));
        assert!(builder.is_in_bounds(Point::new(2, 2)));
        assert!(builder.is_in_bounds(Point::new(3, 3)));
        assert!(!builder.is_in_bounds(Point::new(4, 3)));
    }

    #[test]
    fn parse_point() {
        assert_eq!("3,4".parse::<Point>(), Ok(Point::new(3, 4)));
        assert_eq!(" -1 , 2 ".parse::<Point>(), Ok(Point::new(-1, 2)));
        assert!(matches!("3".parse::<Point>(), Err(PointParseError::Format(_))));
        assert!(matches!("1,2,3".parse::<Point>(), Err(PointParseError::Format(_))));
        assert!(matches!("a,2".parse::<Point>(), Err(PointParseError::Number(_))));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::new(1, 1).manhattan(Point::new(4, 5)), 7);
        assert_eq!(Point::new(4, 5).manhattan(Point::new(1, 1)), 7);
        assert!(Point::new(2, 3).is_adjacent(Point::new(2, 4)));
        assert!(!Point::new(2, 3).is_adjacent(Point::new(3, 4)));
    }
}
