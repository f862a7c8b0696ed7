//! glyphwalk: follow a path drawn in ASCII art and collect the letters on it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all glyphwalk sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use glyphwalk::prelude::*;
//!
//! let grid = Grid::from_lines([
//!     "  @---A---+",
//!     "          |",
//!     "  x-B-+   C",
//!     "      |   |",
//!     "      +---+",
//! ]);
//! let result = solve(&grid).unwrap();
//! assert_eq!(result.letters, "ACB");
//! assert_eq!(result.path, "@---A---+|C|+---+|+-B-x");
//!
//! let mut walker = Walker::new(grid).unwrap();
//! assert_eq!(walker.try_move(Direction::Up), MoveOutcome::Rejected);
//! assert_eq!(walker.try_move(Direction::Right), MoveOutcome::Accepted);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `glyphwalk-core` | positions, directions, cell rules, `WalkError` |
//! | [`map`] | `glyphwalk-map` | `Grid`, map loading, validation |
//! | [`engine`] | `glyphwalk-engine` | solver, walker, observers, configuration |
//! | [`replay`] | `glyphwalk-replay` | route logs and deterministic replay |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and cell rules (`glyphwalk-core`).
pub use glyphwalk_core as types;

/// Grid model, loading and validation (`glyphwalk-map`).
pub use glyphwalk_map as map;

/// Batch solver and interactive walker (`glyphwalk-engine`).
///
/// [`engine::Solver`] walks a whole map in one call;
/// [`engine::Walker`] is driven one move at a time.
pub use glyphwalk_engine as engine;

/// Route logging and replay (`glyphwalk-replay`).
pub use glyphwalk_replay as replay;

/// Common imports for typical glyphwalk usage.
///
/// ```rust
/// use glyphwalk::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use glyphwalk_core::{Direction, Position, WalkError};

    // Map
    pub use glyphwalk_map::{validate, Grid, MapLoadError, MapSummary};

    // Engine
    pub use glyphwalk_engine::{
        solve, EndPolicy, MoveOutcome, NoopObserver, PathResult, Solver, WalkConfig,
        WalkMetrics, WalkObserver, WalkState, Walker,
    };
}
