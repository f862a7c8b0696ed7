//! The per-walk accumulator.

use glyphwalk_core::{is_letter, Direction, Position, END, START};
use indexmap::IndexSet;

/// Progress of one walk: where it is, which way it faces, and what it
/// has seen so far.
///
/// The solver keeps one of these as a local, the walker as a session
/// field; both only ever grow it through the same `advance` step, so
/// path and letter bookkeeping cannot drift between the two modes.
///
/// Letters are credited once per *position*: walking back over a letter
/// cell appends it to the path again but not to the letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkState {
    position: Position,
    direction: Direction,
    path: String,
    letters: String,
    visited_letters: IndexSet<Position>,
    steps: usize,
    reached_end: bool,
}

impl WalkState {
    /// A fresh walk standing on the start cell.
    pub(crate) fn begin(start: Position, direction: Direction) -> Self {
        Self {
            position: start,
            direction,
            path: START.to_string(),
            letters: String::new(),
            visited_letters: IndexSet::new(),
            steps: 0,
            reached_end: false,
        }
    }

    /// Move onto `to`, which holds `c`, travelling in `direction`.
    ///
    /// Returns `true` when a letter was credited by this step.
    pub(crate) fn advance(&mut self, to: Position, c: char, direction: Direction) -> bool {
        self.position = to;
        self.direction = direction;
        self.path.push(c);
        self.steps += 1;
        if c == END {
            self.reached_end = true;
        }
        if is_letter(c) && self.visited_letters.insert(to) {
            self.letters.push(c);
            return true;
        }
        false
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Direction of the most recent step (the inferred initial direction
    /// before any step).
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Every character visited so far, starting with the start character.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Letters credited so far, in first-visit order.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Positions of credited letters, in credit order.
    pub fn visited_letters(&self) -> impl Iterator<Item = Position> + '_ {
        self.visited_letters.iter().copied()
    }

    /// Number of steps taken. Always `path().chars().count() - 1`.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the end character has been entered at some point.
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }
}
