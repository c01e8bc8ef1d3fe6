//! Error types for logcodeslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while acquiring or scanning log input.
///
/// Malformed log lines are never errors: they are skipped and accounted for
/// in [`ScanStats`](crate::ScanStats). Only input acquisition and caller
/// supplied configuration can fail.
#[derive(Error, Debug)]
pub enum LogcodesError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// A date range bound could not be parsed
    #[error("invalid timestamp '{0}': expected RFC 3339, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD'")]
    InvalidTimestamp(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
