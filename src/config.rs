//! Configuration: border width and rendering styles
//!
//! Configuration is a plain value handed to whoever needs it. The defaults
//! can be overridden by a JSON file such as
//!
//! ```json
//! {
//!     "border_width": 1,
//!     "styles": {
//!         "dots": {
//!             "symbols": { "wall": "o", "passable": " ", "path": "*", "enter": "A", "exit": "B" }
//!         }
//!     }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::CellType;

/// Name of the plain ASCII style
pub const ASCII_STYLE: &str = "ascii";
/// Name of the box-drawing style
pub const UNICODE_STYLE: &str = "unicode";

/// Character for every cell state
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Symbols {
    pub wall: char,
    pub passable: char,
    pub path: char,
    pub enter: char,
    pub exit: char,
}

/// One named rendering style
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Style {
    pub symbols: Symbols,
    /// Wall glyphs keyed by neighbour pattern, e.g. `"1100"` for a vertical
    /// wall. Pattern order is up, down, right, left; `1` marks a wall.
    #[serde(default)]
    pub connections: HashMap<String, char>,
}

impl Style {
    pub fn ascii() -> Self {
        Self {
            symbols: Symbols {
                wall: '#',
                passable: ' ',
                path: '.',
                enter: 'S',
                exit: 'E',
            },
            connections: HashMap::new(),
        }
    }

    pub fn unicode() -> Self {
        let connections = [
            ("0000", '■'),
            ("1000", '╵'),
            ("0100", '╷'),
            ("0010", '╶'),
            ("0001", '╴'),
            ("1100", '│'),
            ("0011", '─'),
            ("1010", '└'),
            ("1001", '┘'),
            ("0110", '┌'),
            ("0101", '┐'),
            ("1110", '├'),
            ("1101", '┤'),
            ("1011", '┴'),
            ("0111", '┬'),
            ("1111", '┼'),
        ]
        .into_iter()
        .map(|(pattern, c)| (pattern.to_string(), c))
        .collect();

        Self {
            symbols: Symbols {
                wall: '█',
                passable: ' ',
                path: '•',
                enter: 'S',
                exit: 'E',
            },
            connections,
        }
    }

    /// Display character for `cell_type`
    pub fn symbol(&self, cell_type: CellType) -> char {
        match cell_type {
            CellType::Wall => self.symbols.wall,
            CellType::Passable => self.symbols.passable,
            CellType::Path => self.symbols.path,
            CellType::Enter => self.symbols.enter,
            CellType::Exit => self.symbols.exit,
        }
    }

    /// Cell state for a display character; unknown characters are walls
    pub fn cell_type(&self, c: char) -> CellType {
        [
            CellType::Passable,
            CellType::Path,
            CellType::Enter,
            CellType::Exit,
            CellType::Wall,
        ]
        .into_iter()
        .find(|t| self.symbol(*t) == c)
        .unwrap_or(CellType::Wall)
    }

    /// Wall glyph for a neighbour pattern, the plain wall symbol if unmapped
    pub fn connection(&self, pattern: &str) -> char {
        self.connections
            .get(pattern)
            .copied()
            .unwrap_or(self.symbols.wall)
    }
}

/// Styles by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles(BTreeMap<String, Style>);

impl Styles {
    /// Look up a style by name
    pub fn get(&self, name: &str) -> Result<&Style, ConfigError> {
        self.0.get(name).ok_or_else(|| ConfigError::UnknownStyle {
            name: name.to_string(),
            available: self.0.keys().join(", "),
        })
    }

    /// Add or replace styles by name
    pub fn extend(&mut self, styles: impl IntoIterator<Item = (String, Style)>) {
        self.0.extend(styles);
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self(BTreeMap::from([
            (ASCII_STYLE.to_string(), Style::ascii()),
            (UNICODE_STYLE.to_string(), Style::unicode()),
        ]))
    }
}

/// Settings shared by generation, parsing and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Width of the wall ring around the maze interior
    pub border_width: usize,
    pub styles: Styles,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            border_width: 1,
            styles: Styles::default(),
        }
    }
}

/// On-disk form, every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    border_width: Option<usize>,
    #[serde(default)]
    styles: BTreeMap<String, Style>,
}

impl MazeConfig {
    /// Parse JSON configuration on top of the defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = serde_json::from_str(json).context("Invalid maze configuration")?;

        let mut config = Self::default();
        if let Some(border_width) = file.border_width {
            if border_width == 0 {
                return Err(ConfigError::ZeroBorder.into());
            }
            config.border_width = border_width;
        }
        config.styles.extend(file.styles);
        Ok(config)
    }

    /// Read configuration from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MazeConfig::default();
        assert_eq!(config.border_width, 1);
        assert_eq!(config.styles.get(ASCII_STYLE).unwrap(), &Style::ascii());
        assert_eq!(config.styles.get(UNICODE_STYLE).unwrap().connections.len(), 16);
    }

    #[test]
    fn unknown_style() {
        let err = Styles::default().get("fancy").unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownStyle {
                name: "fancy".to_string(),
                available: "ascii, unicode".to_string()
            }
        );
    }

    #[test]
    fn symbols_map_both_ways() {
        let style = Style::ascii();
        assert_eq!(style.symbol(CellType::Path), '.');
        assert_eq!(style.cell_type(' '), CellType::Passable);
        assert_eq!(style.cell_type('E'), CellType::Exit);
        assert_eq!(style.cell_type('#'), CellType::Wall);
        assert_eq!(style.cell_type('?'), CellType::Wall);
    }

    #[test]
    fn missing_connection_falls_back_to_wall() {
        assert_eq!(Style::ascii().connection("1100"), '#');
        assert_eq!(Style::unicode().connection("1100"), '│');
        assert_eq!(Style::unicode().connection("bogus"), '█');
    }

    #[test]
    fn json_overrides_defaults() {
        let config = MazeConfig::from_json(
            r#"{
                "border_width": 2,
                "styles": {
                    "dots": {
                        "symbols": {
                            "wall": "o",
                            "passable": " ",
                            "path": "*",
                            "enter": "A",
                            "exit": "B"
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.border_width, 2);
        assert_eq!(config.styles.get("dots").unwrap().symbol(CellType::Wall), 'o');
        assert!(config.styles.get(ASCII_STYLE).is_ok());
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(MazeConfig::from_json("{}").unwrap(), MazeConfig::default());
    }

    #[test]
    fn zero_border_is_rejected() {
        assert!(MazeConfig::from_json(r#"{ "border_width": 0 }"#).is_err());
        assert!(MazeConfig::from_json(r#"{ "border": 1 }"#).is_err());
    }
}
