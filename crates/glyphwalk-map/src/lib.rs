//! Grid model, map loading and validation for glyphwalk.
//!
//! A [`Grid`] is an ordered list of rows of characters. Rows may have
//! different lengths; every lookup past a row's end or outside the grid
//! reports "no character" instead of failing.
//!
//! [`validate`] runs the cheap, map-wide checks (character legality,
//! exactly one start, at least one end) once, before any traversal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod validate;

pub use error::MapLoadError;
pub use grid::Grid;
pub use validate::{validate, MapSummary};
