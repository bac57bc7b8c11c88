//! Reading mazes from text

use crate::config::{MazeConfig, Style};
use crate::error::ParseError;
use crate::grid::{Maze, MazeBuilder, Point};

/// Parse a maze, one line per row and one character per square
///
/// Characters are looked up in `style`; anything unknown becomes a wall.
/// The outer `config.border_width` ring is always wall, whatever the text
/// says there.
///
/// # Examples
/// ```
/// use lattice_maze::config::{MazeConfig, Style};
/// use lattice_maze::grid::{CellType, Point};
/// use lattice_maze::parser::parse_maze;
///
/// let text = "#####\n#   #\n#####\n";
/// let maze = parse_maze(text, &Style::ascii(), &MazeConfig::default()).unwrap();
/// assert_eq!(maze.width(), 5);
/// assert_eq!(maze.get(Point::new(2, 1)), Some(CellType::Passable));
/// ```
pub fn parse_maze(text: &str, style: &Style, config: &MazeConfig) -> Result<Maze, ParseError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    let width = rows.first().map(Vec::len).ok_or(ParseError::Empty)?;
    if width == 0 {
        return Err(ParseError::Empty);
    }
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, len)| *len != width)
    {
        return Err(ParseError::RaggedRow {
            row,
            expected: width,
            found,
        });
    }

    let border = i64::try_from(config.border_width)
        .unwrap_or(i64::MAX)
        .saturating_mul(2);
    let mut builder = MazeBuilder::new(
        (width as i64).saturating_sub(border),
        (rows.len() as i64).saturating_sub(border),
        config.border_width,
    )?;
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.iter().enumerate() {
            builder.set_cell(Point::new(x as i32, y as i32), style.cell_type(*c));
        }
    }
    Ok(builder.build())
}
