//! SyncRequest - the two roots a pass runs against

use super::FileMoveError;
use crate::manifest::PROJECT_SUBDIR;
use std::path::{Path, PathBuf};

/// Source and destination roots for one sync pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Translation folder the files are read from
    pub source_root: PathBuf,

    /// Project folder as selected by the caller (without `Namdo`)
    pub destination_root: PathBuf,
}

impl SyncRequest {
    /// Build a request from two optional selections.
    ///
    /// Fails with [`FileMoveError::MissingSelection`] if either is absent.
    pub fn new(
        source_root: Option<PathBuf>,
        destination_root: Option<PathBuf>,
    ) -> Result<Self, FileMoveError> {
        match (source_root, destination_root) {
            (Some(source_root), Some(destination_root)) => Ok(Self {
                source_root,
                destination_root,
            }),
            _ => Err(FileMoveError::MissingSelection),
        }
    }

    /// Root the manifest is resolved against on the destination side
    pub fn target_root(&self) -> PathBuf {
        self.destination_root.join(PROJECT_SUBDIR)
    }

    /// Source root as a path
    pub fn source(&self) -> &Path {
        &self.source_root
    }
}
