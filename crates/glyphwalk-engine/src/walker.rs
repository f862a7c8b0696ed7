//! Interactive, caller-driven traversal.

use glyphwalk_core::{Direction, WalkError, END};
use glyphwalk_map::Grid;
use tracing::{debug, trace};

use crate::config::{EndPolicy, WalkConfig};
use crate::metrics::WalkMetrics;
use crate::observer::{NoopObserver, WalkObserver};
use crate::rules::{can_enter, initial_direction};
use crate::state::WalkState;

/// Result of one [`Walker::try_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The move was taken.
    Accepted,
    /// The move was taken and landed on the end character.
    ReachedEnd,
    /// The move was refused; nothing changed.
    Rejected,
}

impl MoveOutcome {
    /// `true` unless the move was rejected.
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// A walk session advanced one cell at a time.
///
/// The caller picks every direction; the walker never resolves turns
/// on its own. Each accepted move triggers
/// [`on_update`](WalkObserver::on_update), each rejection
/// [`on_wrong_move`](WalkObserver::on_wrong_move).
///
/// Unlike [`Solver`](crate::Solver), the walker does not validate the
/// whole map: it only needs a start and a way out of it.
pub struct Walker<O: WalkObserver = NoopObserver> {
    grid: Grid,
    config: WalkConfig,
    state: WalkState,
    observer: O,
    metrics: WalkMetrics,
}

impl Walker<NoopObserver> {
    /// Start a session without an observer, with the default configuration.
    pub fn new(grid: Grid) -> Result<Self, WalkError> {
        Self::initialize(grid, NoopObserver)
    }
}

impl<O: WalkObserver> Walker<O> {
    /// Start a session with the default configuration.
    pub fn initialize(grid: Grid, observer: O) -> Result<Self, WalkError> {
        Self::with_config(grid, observer, WalkConfig::default())
    }

    /// Start a session on the first start character of `grid`.
    ///
    /// Fails with [`WalkError::NoStart`] when there is none, and with
    /// [`WalkError::NoValidPathFromStart`] when nothing leads away from
    /// it. On success the observer receives the initial state.
    pub fn with_config(grid: Grid, mut observer: O, config: WalkConfig) -> Result<Self, WalkError> {
        let start = grid.find_start().ok_or(WalkError::NoStart)?;
        let direction = initial_direction(&grid, start)?;
        debug!(
            column = start.column,
            row = start.row,
            direction = %direction,
            "walk started"
        );
        let state = WalkState::begin(start, direction);
        observer.on_update(&state);
        Ok(Self {
            grid,
            config,
            state,
            observer,
            metrics: WalkMetrics::default(),
        })
    }

    /// Try to step one cell in `direction`.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.config.end_policy == EndPolicy::Halt && self.state.reached_end() {
            return self.reject(direction);
        }
        let target = self.state.position().step(direction);
        let Some(c) = can_enter(&self.grid, target, direction, self.config.crossings) else {
            return self.reject(direction);
        };

        let turned = direction != self.state.direction();
        let credited = self.state.advance(target, c, direction);
        self.metrics.record_step(c, credited, turned);
        trace!(column = target.column, row = target.row, character = %c, direction = %direction, "move");
        self.observer.on_update(&self.state);

        if c == END {
            debug!(steps = self.state.steps(), letters = self.state.letters(), "walk reached end");
            MoveOutcome::ReachedEnd
        } else {
            MoveOutcome::Accepted
        }
    }

    fn reject(&mut self, direction: Direction) -> MoveOutcome {
        self.metrics.rejected_moves += 1;
        let at = self.state.position();
        debug!(column = at.column, row = at.row, direction = %direction, "move rejected");
        self.observer.on_wrong_move(&self.state, direction);
        MoveOutcome::Rejected
    }

    /// Current walk state.
    pub fn state(&self) -> &WalkState {
        &self.state
    }

    /// The grid being walked.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Session configuration.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Counters since the session started.
    pub fn metrics(&self) -> &WalkMetrics {
        &self.metrics
    }

    /// Whether the end character has been entered.
    pub fn is_ended(&self) -> bool {
        self.state.reached_end()
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// End the session, handing back the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::FnObserver;
    use glyphwalk_core::Position;
    use glyphwalk_test_utils::maps;

    fn g(lines: &[&str]) -> Grid {
        Grid::from_lines(lines.iter().copied())
    }

    // ── initialize ──────────────────────────────────────────────

    #[test]
    fn starts_on_start_with_inferred_direction() {
        let w = Walker::new(g(maps::BASIC)).unwrap();
        assert_eq!(w.state().position(), Position::new(2, 0));
        assert_eq!(w.state().direction(), Direction::Right);
        assert_eq!(w.state().path(), "@");
        assert!(!w.is_ended());
    }

    #[test]
    fn no_start_fails() {
        assert!(matches!(
            Walker::new(g(maps::MISSING_START)),
            Err(WalkError::NoStart)
        ));
    }

    #[test]
    fn does_not_validate_whole_map() {
        // No end character anywhere: the solver refuses, the walker does not.
        let w = Walker::new(g(maps::MISSING_END)).unwrap();
        assert_eq!(w.state().path(), "@");
    }

    #[test]
    fn first_of_several_starts_is_used() {
        let w = Walker::new(g(maps::MULTIPLE_STARTS)).unwrap();
        assert_eq!(w.state().position(), Position::new(3, 0));
    }

    #[test]
    fn isolated_start_fails() {
        assert!(matches!(
            Walker::new(g(&["@ -"])),
            Err(WalkError::NoValidPathFromStart { .. })
        ));
    }

    // ── moves ───────────────────────────────────────────────────

    #[test]
    fn accepted_moves_extend_path() {
        let mut w = Walker::new(g(maps::BASIC)).unwrap();
        for expected in ["@-", "@--", "@---"] {
            assert_eq!(w.try_move(Direction::Right), MoveOutcome::Accepted);
            assert_eq!(w.state().path(), expected);
        }
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Accepted);
        assert_eq!(w.state().letters(), "A");
        assert_eq!(w.metrics().steps, 4);
    }

    #[test]
    fn rejected_move_leaves_state_unchanged() {
        let mut w = Walker::new(g(maps::BASIC)).unwrap();
        let before = w.state().clone();
        assert_eq!(w.try_move(Direction::Up), MoveOutcome::Rejected);
        assert_eq!(w.state(), &before);
        assert_eq!(w.metrics().rejected_moves, 1);
    }

    #[test]
    fn cannot_walk_back_onto_start() {
        let mut w = Walker::new(g(&["@-x"])).unwrap();
        w.try_move(Direction::Right);
        assert_eq!(w.try_move(Direction::Left), MoveOutcome::Rejected);
    }

    #[test]
    fn walker_does_not_resolve_turns() {
        let mut w = Walker::new(g(&["@+", " x"])).unwrap();
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Accepted);
        assert_eq!(w.state().direction(), Direction::Right);
        // Straight on is off the grid; the caller must turn.
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Rejected);
        assert_eq!(w.try_move(Direction::Down), MoveOutcome::ReachedEnd);
        assert!(w.is_ended());
    }

    #[test]
    fn vertical_bar_rejected_horizontally_by_default() {
        // Any straight segment opens the start, whatever its orientation.
        let mut w = Walker::new(g(&["@|x"])).unwrap();
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Rejected);

        let mut w = Walker::new(g(maps::BAR_ACROSS_RUN)).unwrap();
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Accepted);
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Rejected);
        assert_eq!(w.state().path(), "@-");
    }

    #[test]
    fn crossing_accepted_when_enabled() {
        let mut w = Walker::with_config(
            g(maps::BAR_ACROSS_RUN),
            NoopObserver,
            WalkConfig::with_crossings(),
        )
        .unwrap();
        for _ in 0..3 {
            assert_eq!(w.try_move(Direction::Right), MoveOutcome::Accepted);
        }
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::ReachedEnd);
        assert_eq!(w.state().path(), "@-|-x");
    }

    #[test]
    fn space_cell_rejected() {
        let mut w = Walker::new(g(&["@- -x"])).unwrap();
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Accepted);
        let before = w.state().clone();
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Rejected);
        assert_eq!(w.state(), &before);
        assert_eq!(w.state().position(), Position::new(1, 0));
    }

    // ── post-end policy ─────────────────────────────────────────

    #[test]
    fn open_policy_keeps_moving_after_end() {
        let mut w = Walker::new(g(&["@-x-"])).unwrap();
        w.try_move(Direction::Right);
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::ReachedEnd);
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Accepted);
        assert_eq!(w.state().path(), "@-x-");
        assert!(w.is_ended());
    }

    #[test]
    fn halt_policy_freezes_after_end() {
        let config = WalkConfig {
            end_policy: EndPolicy::Halt,
            ..WalkConfig::default()
        };
        let mut w = Walker::with_config(g(&["@-x-"]), NoopObserver, config).unwrap();
        w.try_move(Direction::Right);
        w.try_move(Direction::Right);
        assert_eq!(w.try_move(Direction::Right), MoveOutcome::Rejected);
        assert_eq!(w.state().path(), "@-x");
    }

    // ── observer ────────────────────────────────────────────────

    #[test]
    fn observer_sees_initial_state_and_every_event() {
        let mut paths = Vec::new();
        let mut wrong = Vec::new();
        {
            let observer = FnObserver::new(
                |s: &WalkState| paths.push(s.path().to_owned()),
                |s: &WalkState, d: Direction| wrong.push((s.path().to_owned(), d)),
            );
            let mut w = Walker::initialize(g(maps::BASIC), observer).unwrap();
            w.try_move(Direction::Up);
            w.try_move(Direction::Right);
        }
        assert_eq!(paths, vec!["@".to_owned(), "@-".to_owned()]);
        assert_eq!(wrong, vec![("@".to_owned(), Direction::Up)]);
    }

    #[test]
    fn outcome_acceptance() {
        assert!(MoveOutcome::Accepted.is_accepted());
        assert!(MoveOutcome::ReachedEnd.is_accepted());
        assert!(!MoveOutcome::Rejected.is_accepted());
    }
}
