//! Benchmark map profiles for glyphwalk.
//!
//! - [`serpentine_map`]: a single path folded into back-and-forth lanes,
//!   with letters sprinkled along it
//! - [`reference_profile`] / [`stress_profile`]: fixed serpentine sizes
//! - [`unbounded_solver`]: a solver whose step bound never trips on
//!   these maps

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use glyphwalk_engine::{Solver, WalkConfig};
use glyphwalk_map::Grid;

/// Build a serpentine map of `lanes` horizontal lanes, each `width`
/// cells wide, joined by one-cell vertical connectors at alternating
/// ends. The walk starts at the top left and ends at the far end of
/// the last lane.
///
/// `lanes` is raised to at least 1 and `width` to at least 3.
pub fn serpentine_map(lanes: usize, width: usize) -> Grid {
    let lanes = lanes.max(1);
    let width = width.max(3);
    let mut rows = Vec::with_capacity(lanes * 2 - 1);

    for lane in 0..lanes {
        let mut row = vec!['-'; width];
        for col in (3..width - 1).step_by(7) {
            row[col] = letter_for(lane * width + col);
        }

        let (entry, exit) = if lane % 2 == 0 {
            (0, width - 1)
        } else {
            (width - 1, 0)
        };
        row[entry] = if lane == 0 { '@' } else { '+' };
        row[exit] = if lane + 1 == lanes { 'x' } else { '+' };
        rows.push(row);

        if lane + 1 < lanes {
            let mut connector = vec![' '; width];
            connector[exit] = '|';
            rows.push(connector);
        }
    }

    Grid::new(rows)
}

fn letter_for(n: usize) -> char {
    char::from(b'A' + (n % 26) as u8)
}

/// Number of steps a solve of `serpentine_map(lanes, width)` takes.
pub fn serpentine_steps(lanes: usize, width: usize) -> usize {
    let lanes = lanes.max(1);
    let width = width.max(3);
    lanes * width + (lanes - 1) - 1
}

/// Reference profile: 10 lanes of 100 cells (~1K steps).
pub fn reference_profile() -> Grid {
    serpentine_map(10, 100)
}

/// Stress profile: 100 lanes of 1000 cells (~100K steps).
pub fn stress_profile() -> Grid {
    serpentine_map(100, 1000)
}

/// A solver with the step bound raised past any profile here.
pub fn unbounded_solver() -> Solver {
    Solver::new(WalkConfig {
        max_steps: usize::MAX,
        ..WalkConfig::default()
    })
    .unwrap_or_default()
}
