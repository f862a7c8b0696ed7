//! Grid positions.

use std::fmt;

use crate::direction::Direction;

/// A cell coordinate `(column, row)`, zero-indexed from the top-left.
///
/// Positions are plain values and may point outside any grid: stepping
/// left from column 0 yields column -1, which every grid lookup treats
/// as "no character present".
///
/// # Examples
///
/// ```
/// use glyphwalk_core::{Direction, Position};
///
/// let p = Position::new(2, 0);
/// assert_eq!(p.step(Direction::Right), Position::new(3, 0));
/// assert_eq!(p.step(Direction::Up), Position::new(2, -1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index (x).
    pub column: i32,
    /// Row index (y).
    pub row: i32,
}

impl Position {
    /// Create a position from a column and a row.
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The adjacent position one cell away in `direction`.
    ///
    /// Saturates at the `i32` limits instead of overflowing; such
    /// positions are off every grid anyway.
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.offset();
        Self {
            column: self.column.saturating_add(dc),
            row: self.row.saturating_add(dr),
        }
    }

    /// `(column, row)` as unsigned indices, or `None` if either is negative.
    pub fn to_indices(self) -> Option<(usize, usize)> {
        let column = usize::try_from(self.column).ok()?;
        let row = usize::try_from(self.row).ok()?;
        Some((column, row))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
