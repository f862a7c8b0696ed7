//! Route logging and deterministic replay for glyphwalk walks.
//!
//! A route log records the direction of every step of a walk together
//! with a hash of the walk state after that step. Replaying the log
//! through a fresh [`Walker`](glyphwalk_engine::Walker) on the same grid
//! must reproduce every hash.
//!
//! # Architecture
//!
//! - [`RouteWriter`] records frames to any `Write` sink
//! - [`RouteReader`] plays back frames from any `Read` source
//! - [`record_solve`] solves a grid and logs its route in one call
//! - [`replay_and_compare`] re-walks a log and reports the first divergence
//!
//! # Format
//!
//! ```text
//! [MAGIC "GWLK"] [VERSION u8] [grid_hash u64] [start column i32] [start row i32]
//! [Frame 1] [Frame 2] ... [Frame N]
//! Frame = [step u64] [direction tag u8] [state_hash u64]
//! ```
//!
//! All integers are little-endian.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod compare;
pub mod error;
pub mod hash;
pub mod reader;
pub mod types;
pub mod writer;

pub use compare::{record_solve, replay_and_compare, DivergenceKind, DivergenceReport};
pub use error::ReplayError;
pub use hash::{grid_hash, state_hash};
pub use reader::{FrameIter, RouteReader};
pub use types::{Frame, RouteHeader};
pub use writer::RouteWriter;

/// Magic bytes at the start of every route log.
pub const MAGIC: [u8; 4] = *b"GWLK";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
