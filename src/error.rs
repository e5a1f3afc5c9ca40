use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the duplicate-image scan.
///
/// Only `Io` and `NotADirectory` are fatal to a scan; the per-file variants
/// are caught, logged, and skipped by the orchestrator.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure while reading the scan root
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scan root exists but is not a directory
    #[error("not a directory: '{0}'")]
    NotADirectory(PathBuf),

    /// A single file could not be decoded as an image
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The checkpoint file could not be written
    #[error("failed to write checkpoint '{path}': {source}")]
    Checkpoint {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A duplicate could not be moved into quarantine
    #[error("failed to relocate '{path}': {source}")]
    Relocate {
        path: PathBuf,
        source: std::io::Error,
    },
}
