//! Error types

use thiserror::Error;

/// Errors raised while constructing a maze
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error(
        "Maze width and height must be bigger than zero and fit the grid, got {width}x{height}"
    )]
    InvalidDimension { width: i64, height: i64 },
}

/// Errors raised while reading a maze from text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Maze input is empty")]
    Empty,
    #[error(
        "Row {row} has {found} cells, expected {expected}; \
         all maze rows must have the same length"
    )]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Maze is too small for its border: {0}")]
    Dimension(#[from] MazeError),
}

/// Errors raised while resolving configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown rendering style '{name}'. Available styles: {available}")]
    UnknownStyle { name: String, available: String },
    #[error("Border width must be at least 1")]
    ZeroBorder,
}

/// Errors raised while reading a point from its `x,y` text form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointParseError {
    #[error("Invalid point format: '{0}', expected format: x,y")]
    Format(String),
    #[error("Invalid number in point: '{0}'")]
    Number(String),
}
