//! Traversal rules shared by the solver and the walker.
//!
//! These are the grid-aware counterparts of
//! [`is_legal_for_direction`]: which cell can be entered, which way a
//! walk leaves its start, and which way it leaves a turn.

use glyphwalk_core::{
    is_legal_for_direction, opens_from_start, CellKind, Direction, Position, WalkError,
};
use glyphwalk_map::Grid;
use smallvec::SmallVec;

/// The character at `target` if a walk moving in `direction` may enter it.
///
/// Starts from [`is_legal_for_direction`]. With `crossings` enabled, a
/// straight segment lying across the direction of travel is also
/// enterable when the cell beyond it continues the path in the same
/// direction (the walk passes over the other segment).
pub fn can_enter(
    grid: &Grid,
    target: Position,
    direction: Direction,
    crossings: bool,
) -> Option<char> {
    let c = grid.char_at(target);
    if is_legal_for_direction(c, direction) {
        return c;
    }
    let c = c?;
    if crossings && CellKind::of(c).is_straight() {
        let beyond = grid.char_at(target.step(direction));
        if is_legal_for_direction(beyond, direction) {
            return Some(c);
        }
    }
    None
}

/// The direction a walk leaves `start` in.
///
/// Tries up, down, left, right and picks the first neighbour holding a
/// straight segment (either orientation), a turn, or a letter.
pub fn initial_direction(grid: &Grid, start: Position) -> Result<Direction, WalkError> {
    Direction::ALL
        .into_iter()
        .find(|&d| grid.char_at(start.step(d)).is_some_and(opens_from_start))
        .ok_or(WalkError::NoValidPathFromStart { start })
}

/// Exit directions considered at a turn, in the order they are tried.
///
/// Straight ahead first, then the rest of up, down, left, right, never
/// the reverse of `arrival`.
pub fn exit_candidates(arrival: Direction) -> SmallVec<[Direction; 4]> {
    let mut out: SmallVec<[Direction; 4]> = SmallVec::new();
    out.push(arrival);
    out.extend(
        Direction::ALL
            .into_iter()
            .filter(|&d| d != arrival && d != arrival.opposite()),
    );
    out
}

/// The direction a walk leaves the turn at `at` in, having arrived
/// moving `arrival`.
///
/// A turn that lines up with a straight continuation does not force an
/// actual turn. Genuine forks take the first candidate; dead ends fail
/// with [`WalkError::NoValidTurn`].
pub fn resolve_turn(
    grid: &Grid,
    at: Position,
    arrival: Direction,
    crossings: bool,
) -> Result<Direction, WalkError> {
    exit_candidates(arrival)
        .into_iter()
        .find(|&d| can_enter(grid, at.step(d), d, crossings).is_some())
        .ok_or(WalkError::NoValidTurn {
            position: at,
            arrival,
        })
}
