//! Cardinal travel directions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Cardinal direction of travel on the grid.
///
/// The declaration order is the fixed tie-break order used whenever
/// several directions are tried in turn: up, down, left, right.
///
/// # Examples
///
/// ```
/// use glyphwalk_core::Direction;
///
/// assert_eq!(Direction::Up.opposite(), Direction::Down);
/// assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
/// assert_eq!(Direction::ALL[0], Direction::Up);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0 (row - 1).
    Up = 0,
    /// Away from row 0 (row + 1).
    Down = 1,
    /// Towards column 0 (column - 1).
    Left = 2,
    /// Away from column 0 (column + 1).
    Right = 3,
}

impl Direction {
    /// Every direction in tie-break order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the `(column_offset, row_offset)` for one step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// `true` for left and right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// `true` for up and down.
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text did not name a direction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction '{input}' (expected up, down, left or right)")]
pub struct ParseDirectionError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDirectionError {
                input: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_tie_break_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for d in Direction::ALL {
            let (dc, dr) = d.offset();
            let (oc, or) = d.opposite().offset();
            assert_eq!((dc + oc, dr + or), (0, 0));
        }
    }

    #[test]
    fn axes_partition_directions() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
    }

    #[test]
    fn parse_accepts_any_case_and_whitespace() {
        assert_eq!(" UP ".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("Down".parse::<Direction>(), Ok(Direction::Down));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "north".parse::<Direction>().unwrap_err();
        assert_eq!(err.input, "north");
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        }
    }
}
