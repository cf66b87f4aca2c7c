//! Error types for filemove

use std::path::PathBuf;
use thiserror::Error;

/// Error types for filemove operations
#[derive(Debug, Error)]
pub enum FileMoveError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source or destination root was not provided
    #[error("Source or destination folder not selected.")]
    MissingSelection,

    /// An existing destination file could not be removed
    #[error("Error deleting existing file {}: {source}", path.display())]
    DeletionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file could not be copied over
    #[error("Error copying file {label}: {source}")]
    CopyFailed {
        label: String,
        #[source]
        source: std::io::Error,
    },

    /// Source and destination resolve to the same file on disk
    #[error("Error copying file {label}: source and destination are the same file")]
    SameFile { label: String },

    /// Destination content differs from the source after copying
    #[error("Checksum mismatch after copying {label}")]
    ChecksumMismatch { label: String },

    /// The pass finished but some entries failed
    #[error("{failed} of {total} file(s) failed to copy")]
    EntriesFailed { failed: usize, total: usize },
}

impl FileMoveError {
    /// Check if this error means the caller never supplied usable roots
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            FileMoveError::MissingSelection | FileMoveError::Config(_)
        )
    }

    /// Short label used in logs and the JSON report
    pub fn kind_label(&self) -> &'static str {
        match self {
            FileMoveError::Io(_) => "io",
            FileMoveError::Config(_) => "config",
            FileMoveError::MissingSelection => "missing_selection",
            FileMoveError::DeletionFailed { .. } => "delete_failed",
            FileMoveError::CopyFailed { .. } => "copy_failed",
            FileMoveError::SameFile { .. } => "same_file",
            FileMoveError::ChecksumMismatch { .. } => "checksum_mismatch",
            FileMoveError::EntriesFailed { .. } => "entries_failed",
        }
    }
}
