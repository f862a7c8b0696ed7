//! Batch solver and interactive walker for glyphwalk maps.
//!
//! Both modes follow the same traversal rules ([`rules`]) and keep their
//! progress in the same owned accumulator ([`WalkState`]), but never share
//! state with each other:
//!
//! - [`Solver`] validates a map and walks it from start to end in one call,
//!   resolving every turn itself.
//! - [`Walker`] is a session advanced one cell at a time by a caller that
//!   picks each direction, reporting every attempt to a [`WalkObserver`].
//!
//! # Example
//!
//! ```
//! use glyphwalk_engine::{solve, MoveOutcome, Walker};
//! use glyphwalk_core::Direction;
//! use glyphwalk_map::Grid;
//!
//! let grid = Grid::from_lines(["@-A-+", "    |", "    x"]);
//! let result = solve(&grid).unwrap();
//! assert_eq!(result.letters, "A");
//! assert_eq!(result.path, "@-A-+|x");
//!
//! let mut walker = Walker::new(grid).unwrap();
//! assert_eq!(walker.try_move(Direction::Up), MoveOutcome::Rejected);
//! assert_eq!(walker.try_move(Direction::Right), MoveOutcome::Accepted);
//! assert_eq!(walker.state().path(), "@-");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod observer;
pub mod rules;
pub mod solver;
pub mod state;
pub mod walker;

pub use config::{ConfigError, EndPolicy, WalkConfig, DEFAULT_MAX_STEPS};
pub use metrics::WalkMetrics;
pub use observer::{FnObserver, NoopObserver, WalkObserver};
pub use solver::{solve, PathResult, SolveTrace, Solver};
pub use state::WalkState;
pub use walker::{MoveOutcome, Walker};
