//! The character grid.

use std::fmt;
use std::fs;
use std::path::Path;

use glyphwalk_core::{Position, START};

use crate::error::MapLoadError;

/// A map: ordered rows of single characters.
///
/// Rows keep their own lengths (jagged maps are normal, since trailing
/// spaces are often trimmed by editors). Lookups are bounds-checked and
/// treat "past the end of this row" exactly like "outside the grid".
///
/// # Examples
///
/// ```
/// use glyphwalk_core::Position;
/// use glyphwalk_map::Grid;
///
/// let grid = Grid::from_lines(["  @-x", "  |"]);
/// assert_eq!(grid.char_at(Position::new(2, 0)), Some('@'));
/// assert_eq!(grid.char_at(Position::new(4, 1)), None); // past row end
/// assert_eq!(grid.char_at(Position::new(-1, 0)), None);
/// assert_eq!(grid.find_start(), Some(Position::new(2, 0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Wrap pre-split rows.
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// Build a grid from one string per row. Every character is kept,
    /// including trailing spaces.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rows: lines
                .into_iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
        }
    }

    /// Parse map text: one row per line, `\n` or `\r\n` separated.
    ///
    /// A trailing newline does not produce an extra empty row.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapLoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::parse(&text);
        tracing::debug!(
            path = %path.display(),
            rows = grid.row_count(),
            "loaded map"
        );
        Ok(grid)
    }

    /// The character at `position`, or `None` when the row is out of
    /// range or the column is past that row's end.
    pub fn char_at(&self, position: Position) -> Option<char> {
        let (column, row) = position.to_indices()?;
        self.rows.get(row)?.get(column).copied()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// `true` when the grid holds no characters at all.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// A single row, if present.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Every cell with its position, in row-major order.
    ///
    /// Cells whose column or row does not fit a [`Position`] coordinate
    /// are skipped; [`char_at`](Self::char_at) cannot reach them either.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map_while(|(r, row)| Some((coord(r)?, row)))
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map_while(move |(c, &ch)| Some((Position::new(coord(c)?, r), ch)))
            })
    }

    /// Positions holding `target`, in row-major order.
    pub fn positions_of(&self, target: char) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(move |&(_, ch)| ch == target)
            .map(|(pos, _)| pos)
    }

    /// The first start character in row-major order.
    ///
    /// Does not check that the start is unique; see
    /// [`validate`](crate::validate()).
    pub fn find_start(&self) -> Option<Position> {
        self.positions_of(START).next()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

fn coord(index: usize) -> Option<i32> {
    i32::try_from(index).ok()
}

impl From<Vec<Vec<char>>> for Grid {
    fn from(rows: Vec<Vec<char>>) -> Self {
        Self::new(rows)
    }
}
