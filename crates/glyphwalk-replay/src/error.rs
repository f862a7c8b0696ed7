//! Error types for route recording and replay.

use std::io;

use glyphwalk_core::WalkError;
use glyphwalk_engine::ConfigError;
use thiserror::Error;

/// Errors that can occur while recording, reading or replaying a route log.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// An I/O error occurred during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The stream does not start with the `b"GWLK"` magic bytes.
    #[error("invalid magic bytes (expected b\"GWLK\")")]
    InvalidMagic,
    /// The format version is not supported by this build.
    #[error("unsupported format version {found}")]
    UnsupportedVersion {
        /// The version found in the stream.
        found: u8,
    },
    /// A frame could not be decoded (truncated or out of sequence).
    #[error("malformed frame: {detail}")]
    MalformedFrame {
        /// What went wrong.
        detail: String,
    },
    /// A direction tag outside `0..=3`.
    #[error("unknown direction tag {tag}")]
    UnknownDirection {
        /// The unrecognized tag.
        tag: u8,
    },
    /// The walk being recorded or replayed failed.
    #[error(transparent)]
    Walk(#[from] WalkError),
    /// The walk configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
