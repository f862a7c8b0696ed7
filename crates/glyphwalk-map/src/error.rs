//! Error types for map loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A map file could not be read.
#[derive(Debug, Error)]
pub enum MapLoadError {
    /// An I/O error occurred while reading the file.
    #[error("failed to read map {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
