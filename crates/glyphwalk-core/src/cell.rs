//! Character classification and the per-step legality predicate.
//!
//! Everything here is a pure function of a single character (and, for
//! legality, the direction of travel). Grid context such as crossings
//! lives in the engine's traversal rules.

use crate::direction::Direction;

/// The start marker. Exactly one per valid map.
pub const START: char = '@';
/// The end marker. At least one per valid map.
pub const END: char = 'x';
/// A turn (junction) cell.
pub const TURN: char = '+';
/// A straight segment travelled left/right.
pub const HORIZONTAL: char = '-';
/// A straight segment travelled up/down.
pub const VERTICAL: char = '|';
/// Empty space. Not a path character, but allowed anywhere in a map.
pub const SPACE: char = ' ';

/// Classification of a single map character.
///
/// # Examples
///
/// ```
/// use glyphwalk_core::CellKind;
///
/// assert_eq!(CellKind::of('@'), CellKind::Start);
/// assert_eq!(CellKind::of('Q'), CellKind::Letter('Q'));
/// assert!(CellKind::of('q').is_foreign());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// `@`
    Start,
    /// `x`
    End,
    /// `+`
    Turn,
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `A`-`Z`
    Letter(char),
    /// ` `
    Space,
    /// Anything else; rejected by map validation.
    Foreign(char),
}

impl CellKind {
    /// Classify a character.
    pub fn of(c: char) -> Self {
        match c {
            START => CellKind::Start,
            END => CellKind::End,
            TURN => CellKind::Turn,
            HORIZONTAL => CellKind::Horizontal,
            VERTICAL => CellKind::Vertical,
            SPACE => CellKind::Space,
            'A'..='Z' => CellKind::Letter(c),
            other => CellKind::Foreign(other),
        }
    }

    /// `true` for `-` and `|`.
    pub fn is_straight(self) -> bool {
        matches!(self, CellKind::Horizontal | CellKind::Vertical)
    }

    /// `true` for characters map validation rejects.
    pub fn is_foreign(self) -> bool {
        matches!(self, CellKind::Foreign(_))
    }
}

/// `true` for `A`-`Z`, `+`, `-`, `|`, the start and the end character.
pub fn is_path_character(c: char) -> bool {
    !matches!(CellKind::of(c), CellKind::Space | CellKind::Foreign(_))
}

/// `true` for `A`-`Z` only.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Whether a character adjacent to the start can begin the walk.
///
/// Straight segments of either orientation, turns and letters qualify;
/// the end character and spaces do not.
pub fn opens_from_start(c: char) -> bool {
    matches!(
        CellKind::of(c),
        CellKind::Horizontal | CellKind::Vertical | CellKind::Turn | CellKind::Letter(_)
    )
}

/// Whether a cell holding `c` may be entered while travelling in `direction`.
///
/// Letters, the end character and `+` are legal from any side; `-` only
/// when moving left or right; `|` only when moving up or down. An absent
/// character (off the grid or past a row's end), a space, the start
/// character or anything else is illegal.
///
/// # Examples
///
/// ```
/// use glyphwalk_core::{is_legal_for_direction, Direction};
///
/// assert!(is_legal_for_direction(Some('-'), Direction::Left));
/// assert!(!is_legal_for_direction(Some('-'), Direction::Up));
/// assert!(is_legal_for_direction(Some('+'), Direction::Up));
/// assert!(!is_legal_for_direction(None, Direction::Right));
/// ```
pub fn is_legal_for_direction(c: Option<char>, direction: Direction) -> bool {
    let Some(c) = c else {
        return false;
    };
    match CellKind::of(c) {
        CellKind::Letter(_) | CellKind::End | CellKind::Turn => true,
        CellKind::Horizontal => direction.is_horizontal(),
        CellKind::Vertical => direction.is_vertical(),
        CellKind::Start | CellKind::Space | CellKind::Foreign(_) => false,
    }
}
