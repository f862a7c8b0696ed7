//! Whole-map static checks.
//!
//! Validation only looks at individual characters and counts. Whether
//! the path is connected, forks, or loops is left to traversal.

use glyphwalk_core::{CellKind, Position, WalkError};

use crate::grid::Grid;

/// Facts gathered while validating a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapSummary {
    /// The unique start position.
    pub start: Position,
    /// Number of end characters (at least one).
    pub end_count: usize,
    /// Number of letter cells.
    pub letter_count: usize,
    /// Number of rows.
    pub row_count: usize,
}

/// Check that `grid` is a well-formed map.
///
/// Scans every cell in row-major order. The first character that is
/// neither a space nor a path character fails immediately with
/// [`WalkError::InvalidCharacter`]. After the scan, start and end
/// counts are checked in this order: [`WalkError::NoStart`],
/// [`WalkError::MultipleStarts`], [`WalkError::NoEnd`].
///
/// # Examples
///
/// ```
/// use glyphwalk_core::WalkError;
/// use glyphwalk_map::{validate, Grid};
///
/// let ok = Grid::from_lines(["@-A-x"]);
/// assert_eq!(validate(&ok).unwrap().letter_count, 1);
///
/// let no_end = Grid::from_lines(["@-A-+"]);
/// assert_eq!(validate(&no_end), Err(WalkError::NoEnd));
/// ```
pub fn validate(grid: &Grid) -> Result<MapSummary, WalkError> {
    let mut start: Option<Position> = None;
    let mut start_count = 0usize;
    let mut end_count = 0usize;
    let mut letter_count = 0usize;

    for (position, character) in grid.cells() {
        match CellKind::of(character) {
            CellKind::Start => {
                start_count += 1;
                start.get_or_insert(position);
            }
            CellKind::End => end_count += 1,
            CellKind::Letter(_) => letter_count += 1,
            CellKind::Foreign(character) => {
                tracing::debug!(%character, %position, "map rejected: invalid character");
                return Err(WalkError::InvalidCharacter {
                    character,
                    position,
                });
            }
            CellKind::Turn | CellKind::Horizontal | CellKind::Vertical | CellKind::Space => {}
        }
    }

    let start = match (start, start_count) {
        (Some(start), 1) => start,
        (None, _) => return Err(WalkError::NoStart),
        (Some(_), count) => return Err(WalkError::MultipleStarts { count }),
    };
    if end_count == 0 {
        return Err(WalkError::NoEnd);
    }

    Ok(MapSummary {
        start,
        end_count,
        letter_count,
        row_count: grid.row_count(),
    })
}
