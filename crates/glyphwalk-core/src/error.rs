//! Error taxonomy for map validation and traversal.
//!
//! Validation failures (`InvalidCharacter`, `NoStart`, `MultipleStarts`,
//! `NoEnd`) are found by a whole-map scan before walking. The remaining
//! variants only surface while walking, because dead ends and forks are
//! properties of the path's shape.

use thiserror::Error;

use crate::direction::Direction;
use crate::position::Position;

/// A map that cannot be walked from start to end.
///
/// Every failure aborts the walk; no partial result is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WalkError {
    /// A character that is neither a space nor a path character.
    #[error("invalid character '{character}' at {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position: Position,
    },
    /// The map has no start character.
    #[error("start position (@) not found")]
    NoStart,
    /// The map has more than one start character.
    #[error("multiple start positions found ({count})")]
    MultipleStarts {
        /// Number of start characters found.
        count: usize,
    },
    /// The map has no end character.
    #[error("end position (x) not found")]
    NoEnd,
    /// No neighbour of the start continues the path.
    #[error("no valid path from start position {start}")]
    NoValidPathFromStart {
        /// The start position.
        start: Position,
    },
    /// The next cell is off the grid, empty, or illegal for the direction of travel.
    #[error("path leads to invalid position {position} moving {direction}")]
    InvalidPosition {
        /// The cell that could not be entered.
        position: Position,
        /// The direction of travel.
        direction: Direction,
    },
    /// A turn offers no way on other than reversing.
    #[error("no valid turn at {position} (arrived moving {arrival})")]
    NoValidTurn {
        /// The turn cell.
        position: Position,
        /// The direction the walk arrived in.
        arrival: Direction,
    },
    /// The walk did not reach an end within the step bound.
    #[error("maximum steps exceeded ({limit}); possible loop")]
    MaxStepsExceeded {
        /// The configured step bound.
        limit: usize,
    },
}

impl WalkError {
    /// `true` for failures found by the static map scan rather than by walking.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCharacter { .. } | Self::NoStart | Self::MultipleStarts { .. } | Self::NoEnd
        )
    }
}
