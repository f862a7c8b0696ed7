//! Recording a solve and replaying it through the walker.
//!
//! [`record_solve`] turns a [`Solver`] run into a route log;
//! [`replay_and_compare`] walks the log again with a fresh [`Walker`]
//! and stops at the first frame whose state hash does not match.

use std::io::{Read, Write};

use glyphwalk_core::{Direction, Position};
use glyphwalk_engine::{NoopObserver, SolveTrace, Solver, WalkConfig, Walker};
use glyphwalk_map::Grid;
use tracing::{debug, warn};

use crate::error::ReplayError;
use crate::hash::{grid_hash, state_hash};
use crate::reader::RouteReader;
use crate::types::RouteHeader;
use crate::writer::RouteWriter;

/// Why a replay stopped matching its log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// The log was recorded on a different grid.
    GridMismatch {
        /// Hash from the log header.
        recorded: u64,
        /// Hash of the grid being replayed.
        current: u64,
    },
    /// The walker starts somewhere else than the recorded start.
    StartMismatch {
        /// Start from the log header.
        recorded: Position,
        /// Start found by the walker.
        current: Position,
    },
    /// The walker refused the recorded move.
    MoveRejected {
        /// The recorded direction.
        direction: Direction,
    },
    /// The move was accepted but led to a different state.
    StateMismatch {
        /// Hash from the log.
        recorded: u64,
        /// Hash of the replayed state.
        replayed: u64,
    },
}

/// First divergence found while replaying a log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Step at which the divergence was found; 0 for header mismatches.
    pub step: u64,
    /// What diverged.
    pub kind: DivergenceKind,
}

/// Solve `grid` with `solver` and write its route to `sink`.
///
/// Each step is re-walked with a [`Walker`] using the solver's
/// configuration so the logged hashes are those a replay will compute.
pub fn record_solve<W: Write>(
    grid: &Grid,
    solver: &Solver,
    sink: W,
) -> Result<SolveTrace, ReplayError> {
    let trace = solver.solve_traced(grid)?;
    let header = RouteHeader {
        grid_hash: grid_hash(grid),
        start: trace.start,
    };
    let mut writer = RouteWriter::new(sink, &header)?;
    let mut walker = Walker::with_config(
        grid.clone(),
        NoopObserver,
        solver.config().clone(),
    )?;
    for &direction in &trace.route {
        if !walker.try_move(direction).is_accepted() {
            return Err(ReplayError::MalformedFrame {
                detail: format!(
                    "walker rejected solver step {} ({direction})",
                    walker.state().steps() + 1
                ),
            });
        }
        writer.write_step(direction, walker.state())?;
    }
    writer.flush()?;
    debug!(frames = writer.frames_written(), "route recorded");
    Ok(trace)
}

/// Replay a route log on `grid`, comparing state hashes at every step.
///
/// Returns `Ok(None)` when every frame matches, or `Ok(Some(report))`
/// at the first divergence. Frames must be numbered 1, 2, 3, ... in
/// order; anything else is [`ReplayError::MalformedFrame`].
pub fn replay_and_compare<R: Read>(
    mut reader: RouteReader<R>,
    grid: Grid,
    config: WalkConfig,
) -> Result<Option<DivergenceReport>, ReplayError> {
    let header = *reader.header();
    let current = grid_hash(&grid);
    if current != header.grid_hash {
        warn!(recorded = header.grid_hash, current, "route log grid mismatch");
        return Ok(Some(DivergenceReport {
            step: 0,
            kind: DivergenceKind::GridMismatch {
                recorded: header.grid_hash,
                current,
            },
        }));
    }

    let mut walker = Walker::with_config(grid, NoopObserver, config)?;
    let start = walker.state().position();
    if start != header.start {
        return Ok(Some(DivergenceReport {
            step: 0,
            kind: DivergenceKind::StartMismatch {
                recorded: header.start,
                current: start,
            },
        }));
    }

    let mut expected_step = 1u64;
    while let Some(frame) = reader.next_frame()? {
        if frame.step != expected_step {
            return Err(ReplayError::MalformedFrame {
                detail: format!("expected step {expected_step}, found {}", frame.step),
            });
        }
        expected_step += 1;

        if !walker.try_move(frame.direction).is_accepted() {
            warn!(step = frame.step, direction = %frame.direction, "replayed move rejected");
            return Ok(Some(DivergenceReport {
                step: frame.step,
                kind: DivergenceKind::MoveRejected {
                    direction: frame.direction,
                },
            }));
        }

        let replayed = state_hash(walker.state());
        if replayed != frame.state_hash {
            warn!(step = frame.step, "replayed state diverged");
            return Ok(Some(DivergenceReport {
                step: frame.step,
                kind: DivergenceKind::StateMismatch {
                    recorded: frame.state_hash,
                    replayed,
                },
            }));
        }
    }

    debug!(frames = reader.frames_read(), "replay matched");
    Ok(None)
}
