//! Dry-run planning: predict what a pass would do without touching anything

use crate::executor::is_same_file;
use crate::hash::files_match;
use crate::manifest::manifest;
use crate::types::{ManifestEntry, SyncAction, SyncRequest};
use std::fs;
use std::path::{Path, PathBuf};

/// Predicted action for one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub entry: ManifestEntry,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub action: SyncAction,
}

/// Statistics about a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanStats {
    pub copy_count: usize,
    pub overwrite_count: usize,
    /// Overwrites whose destination already matches the source (verify only)
    pub identical_count: usize,
    /// Entries that would fail
    pub failure_count: usize,
    /// Bytes that would be written
    pub total_bytes: u64,
}

/// The predicted pass, in manifest order
#[derive(Debug, Clone, Default)]
pub struct SyncPlan {
    pub entries: Vec<PlannedEntry>,
    pub stats: PlanStats,
}

impl SyncPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry and update stats
    pub fn add_entry(&mut self, planned: PlannedEntry, bytes: u64) {
        match planned.action {
            SyncAction::CopyNew => {
                self.stats.copy_count += 1;
                self.stats.total_bytes += bytes;
            }
            SyncAction::Overwrite { identical } => {
                self.stats.overwrite_count += 1;
                self.stats.total_bytes += bytes;
                if identical == Some(true) {
                    self.stats.identical_count += 1;
                }
            }
            SyncAction::MissingSource
            | SyncAction::MissingDestinationDir
            | SyncAction::SameFile => {
                self.stats.failure_count += 1;
            }
        }
        self.entries.push(planned);
    }
}

/// Classify every manifest entry against the current filesystem.
///
/// With `compare_content`, existing destinations are hashed against their
/// source so unchanged files show up as identical.
pub fn plan_sync(request: &SyncRequest, compare_content: bool) -> SyncPlan {
    let target_root = request.target_root();
    let mut plan = SyncPlan::new();

    for entry in manifest() {
        let source = entry.resolve(request.source());
        let destination = entry.resolve(&target_root);
        let (action, bytes) = classify(&source, &destination, compare_content);
        plan.add_entry(
            PlannedEntry {
                entry: *entry,
                source,
                destination,
                action,
            },
            bytes,
        );
    }

    plan
}

fn classify(source: &Path, destination: &Path, compare_content: bool) -> (SyncAction, u64) {
    let bytes = match fs::metadata(source) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => return (SyncAction::MissingSource, 0),
    };

    if is_same_file(source, destination) {
        return (SyncAction::SameFile, 0);
    }

    if fs::symlink_metadata(destination).is_ok() {
        let identical = if compare_content {
            files_match(source, destination).ok()
        } else {
            None
        };
        return (SyncAction::Overwrite { identical }, bytes);
    }

    match destination.parent() {
        Some(parent) if parent.is_dir() => (SyncAction::CopyNew, bytes),
        _ => (SyncAction::MissingDestinationDir, 0),
    }
}
