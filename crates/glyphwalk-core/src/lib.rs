//! Core types and cell rules for the glyphwalk path interpreter.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other glyphwalk crate: grid positions,
//! travel directions, character classification, the per-direction
//! legality predicate, and the walk error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod position;

pub use cell::{
    is_legal_for_direction, is_letter, is_path_character, opens_from_start, CellKind, END,
    HORIZONTAL, SPACE, START, TURN, VERTICAL,
};
pub use direction::{Direction, ParseDirectionError};
pub use error::WalkError;
pub use position::Position;
