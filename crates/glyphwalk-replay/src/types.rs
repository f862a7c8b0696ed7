//! Data types of the route log format.

use glyphwalk_core::{Direction, Position};

/// Identifies the walk a log belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RouteHeader {
    /// [`grid_hash`](crate::grid_hash) of the walked grid.
    pub grid_hash: u64,
    /// Where the walk started.
    pub start: Position,
}

/// One recorded step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Step number, starting at 1.
    pub step: u64,
    /// Direction the step was taken in.
    pub direction: Direction,
    /// [`state_hash`](crate::state_hash) of the walk after the step.
    pub state_hash: u64,
}
