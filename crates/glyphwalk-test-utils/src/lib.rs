//! Test utilities for glyphwalk development.
//!
//! - [`maps`]: reference maps, as row slices, covering every success and
//!   failure mode of the solver.
//! - [`RecordingObserver`]: a [`WalkObserver`] that keeps every event.
//!
//! [`WalkObserver`]: glyphwalk_engine::WalkObserver

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod maps;
mod recording;

pub use recording::{Event, RecordingObserver};

use glyphwalk_map::Grid;

/// Build a [`Grid`] from a slice of row literals.
pub fn grid(lines: &[&str]) -> Grid {
    Grid::from_lines(lines.iter().copied())
}
