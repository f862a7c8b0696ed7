//! One-shot traversal: validate a map, then walk it from start to end.

use glyphwalk_core::{Direction, Position, WalkError, END, TURN};
use glyphwalk_map::{validate, Grid};
use tracing::{debug, trace};

use crate::config::{ConfigError, WalkConfig};
use crate::metrics::WalkMetrics;
use crate::rules::{can_enter, initial_direction, resolve_turn};
use crate::state::WalkState;

/// Outcome of a successful solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathResult {
    /// Every character visited, start and end included.
    pub path: String,
    /// Letters credited, once per position, in first-visit order.
    pub letters: String,
}

/// A [`PathResult`] plus everything needed to reproduce the walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveTrace {
    /// Path and letters.
    pub result: PathResult,
    /// Start position.
    pub start: Position,
    /// Direction of the first step.
    pub initial_direction: Direction,
    /// Direction of every step, in order. `route.len()` equals the step count.
    pub route: Vec<Direction>,
    /// Counters for this solve.
    pub metrics: WalkMetrics,
}

/// Batch solver carrying a validated [`WalkConfig`].
///
/// Stateless between calls; every solve owns its accumulators, so one
/// `Solver` can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: WalkConfig,
}

impl Solver {
    /// Create a solver, rejecting an invalid configuration.
    pub fn new(config: WalkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this solver walks with.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Validate `grid` and walk it to the first end character reached.
    pub fn solve(&self, grid: &Grid) -> Result<PathResult, WalkError> {
        self.solve_traced(grid).map(|t| t.result)
    }

    /// Like [`solve`](Self::solve), also returning the route and metrics.
    pub fn solve_traced(&self, grid: &Grid) -> Result<SolveTrace, WalkError> {
        let summary = validate(grid)?;
        let start = summary.start;
        let initial = initial_direction(grid, start).inspect_err(|e| debug!(error = %e, "solve failed"))?;
        debug!(
            column = start.column,
            row = start.row,
            direction = %initial,
            "solve started"
        );

        let crossings = self.config.crossings;
        let mut state = WalkState::begin(start, initial);
        let mut direction = initial;
        let mut route = Vec::new();
        let mut metrics = WalkMetrics::default();

        while state.steps() < self.config.max_steps {
            let target = state.position().step(direction);
            let Some(c) = can_enter(grid, target, direction, crossings) else {
                debug!(
                    column = target.column,
                    row = target.row,
                    direction = %direction,
                    steps = state.steps(),
                    "solve failed: invalid position"
                );
                return Err(WalkError::InvalidPosition {
                    position: target,
                    direction,
                });
            };

            let turned = direction != state.direction();
            let credited = state.advance(target, c, direction);
            metrics.record_step(c, credited, turned);
            route.push(direction);
            trace!(column = target.column, row = target.row, character = %c, direction = %direction, "step");

            if c == END {
                debug!(steps = state.steps(), letters = state.letters(), "solve finished");
                return Ok(SolveTrace {
                    result: PathResult {
                        path: state.path().to_owned(),
                        letters: state.letters().to_owned(),
                    },
                    start,
                    initial_direction: initial,
                    route,
                    metrics,
                });
            }
            if c == TURN {
                direction = resolve_turn(grid, target, direction, crossings)
                    .inspect_err(|e| debug!(error = %e, "solve failed"))?;
                debug!(column = target.column, row = target.row, direction = %direction, "turn resolved");
            }
        }

        debug!(limit = self.config.max_steps, "solve failed: step limit");
        Err(WalkError::MaxStepsExceeded {
            limit: self.config.max_steps,
        })
    }
}

/// Solve `grid` with the default configuration.
pub fn solve(grid: &Grid) -> Result<PathResult, WalkError> {
    Solver::default().solve(grid)
}
