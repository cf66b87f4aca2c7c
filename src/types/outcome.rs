//! Per-entry outcomes and the accumulated result of a pass

use super::{FileMoveError, ManifestEntry};
use std::path::PathBuf;

/// What a successful copy did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Bytes written to the destination
    pub bytes: u64,
    /// A previous destination file was deleted first
    pub replaced: bool,
    /// Content was confirmed with a blake3 comparison
    pub verified: bool,
}

/// Outcome of one manifest entry
#[derive(Debug)]
pub struct EntryOutcome {
    pub entry: ManifestEntry,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub result: Result<CopyStats, FileMoveError>,
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Human-readable report line for this entry
    pub fn message(&self) -> String {
        match &self.result {
            Ok(_) => format!("File {} copied successfully.", self.entry.label()),
            Err(err) => err.to_string(),
        }
    }
}

/// Ordered outcomes of one pass, in manifest order
#[derive(Debug, Default)]
pub struct SyncResult {
    pub outcomes: Vec<EntryOutcome>,
}

impl SyncResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: EntryOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Total bytes written by successful copies
    pub fn bytes_copied(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|stats| stats.bytes)
            .sum()
    }

    /// One line per entry, newline-separated, in manifest order
    pub fn message(&self) -> String {
        self.outcomes
            .iter()
            .map(EntryOutcome::message)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
