//! SyncAction - what a dry run predicts for each manifest entry

use serde::Serialize;

/// Predicted action for one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SyncAction {
    /// Copy new file (exists in source, missing in destination)
    CopyNew,

    /// Replace an existing destination file.
    /// `identical` is only known when hashes were compared.
    Overwrite { identical: Option<bool> },

    /// Source file is absent; the copy would fail
    MissingSource,

    /// Destination directory is absent; the copy would fail
    MissingDestinationDir,

    /// Source and destination are the same file; the entry would fail
    SameFile,
}

impl SyncAction {
    /// Short uppercase tag for dry-run listings
    pub fn action_name(&self) -> &'static str {
        match self {
            SyncAction::CopyNew => "COPY",
            SyncAction::Overwrite { .. } => "UPDATE",
            SyncAction::MissingSource => "MISSING",
            SyncAction::MissingDestinationDir => "NO DIR",
            SyncAction::SameFile => "SAME",
        }
    }
}
