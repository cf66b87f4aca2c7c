//! Executor module for the copy pass

pub mod copy;

use crate::hash::files_match;
use crate::manifest::manifest;
use crate::types::{CopyStats, EntryOutcome, FileMoveError, ManifestEntry, SyncRequest, SyncResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub use copy::copy_file_atomic;

/// Knobs for a sync pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Hash source and destination after each copy
    pub verify: bool,
}

/// Events emitted while the pass runs.
#[derive(Debug)]
pub enum ExecutionEvent<'a> {
    /// Entry processing started.
    EntryStart {
        index: usize,
        total: usize,
        entry: ManifestEntry,
    },
    /// Entry finished, successfully or not.
    EntryFinished {
        index: usize,
        total: usize,
        outcome: &'a EntryOutcome,
    },
    /// Every entry has been processed.
    Complete { succeeded: usize, failed: usize },
}

/// Optional callback used to receive execution events.
pub type ExecutionCallback = dyn Fn(&ExecutionEvent<'_>) + Send + Sync;

/// Copy every manifest entry from the source root into `destination/Namdo`.
///
/// Entries run sequentially in manifest order. A failing entry is recorded
/// and the pass moves on; nothing already copied is rolled back.
pub fn execute_sync(
    request: &SyncRequest,
    options: SyncOptions,
    on_event: Option<&ExecutionCallback>,
) -> SyncResult {
    let entries = manifest();
    let total = entries.len();
    let target_root = request.target_root();
    let mut result = SyncResult::new();

    debug!(
        source = %request.source_root.display(),
        destination = %target_root.display(),
        entries = total,
        "starting sync pass"
    );

    for (idx, entry) in entries.iter().enumerate() {
        let index = idx + 1;
        emit_event(
            on_event,
            ExecutionEvent::EntryStart {
                index,
                total,
                entry: *entry,
            },
        );

        let outcome = sync_entry(entry, request.source(), &target_root, options);
        match &outcome.result {
            Ok(stats) => info!(
                entry = %entry,
                bytes = stats.bytes,
                replaced = stats.replaced,
                "copied"
            ),
            Err(err) => warn!(entry = %entry, kind = err.kind_label(), "{err}"),
        }

        emit_event(
            on_event,
            ExecutionEvent::EntryFinished {
                index,
                total,
                outcome: &outcome,
            },
        );
        result.push(outcome);
    }

    emit_event(
        on_event,
        ExecutionEvent::Complete {
            succeeded: result.succeeded(),
            failed: result.failed(),
        },
    );

    result
}

/// Sync a single entry: delete whatever sits at the destination, then copy.
pub fn sync_entry(
    entry: &ManifestEntry,
    source_root: &Path,
    target_root: &Path,
    options: SyncOptions,
) -> EntryOutcome {
    let source = entry.resolve(source_root);
    let destination = entry.resolve(target_root);
    let result = copy_entry(entry, &source, &destination, options);

    EntryOutcome {
        entry: *entry,
        source,
        destination,
        result,
    }
}

fn copy_entry(
    entry: &ManifestEntry,
    source: &Path,
    destination: &Path,
    options: SyncOptions,
) -> Result<CopyStats, FileMoveError> {
    if is_same_file(source, destination) {
        return Err(FileMoveError::SameFile {
            label: entry.label(),
        });
    }

    let replaced = remove_existing(destination)?;

    let bytes = copy_file_atomic(source, destination).map_err(|err| FileMoveError::CopyFailed {
        label: entry.label(),
        source: err,
    })?;

    if options.verify {
        let identical = files_match(source, destination).map_err(|err| FileMoveError::CopyFailed {
            label: entry.label(),
            source: err,
        })?;
        if !identical {
            return Err(FileMoveError::ChecksumMismatch {
                label: entry.label(),
            });
        }
    }

    Ok(CopyStats {
        bytes,
        replaced,
        verified: options.verify,
    })
}

/// True if both paths exist and resolve to the same file.
///
/// Deleting the destination in that case would delete the source.
pub fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Remove whatever sits at the destination path.
///
/// Returns whether anything was removed. Directories are removed
/// recursively; files and symlinks are removed as files.
fn remove_existing(destination: &Path) -> Result<bool, FileMoveError> {
    let Ok(metadata) = fs::symlink_metadata(destination) else {
        return Ok(false);
    };

    debug!(path = %destination.display(), "removing existing destination entry");
    let removed = if metadata.file_type().is_dir() {
        fs::remove_dir_all(destination)
    } else {
        fs::remove_file(destination)
    };
    removed.map_err(|err| FileMoveError::DeletionFailed {
        path: destination.to_path_buf(),
        source: err,
    })?;
    Ok(true)
}

/// Run a whole pass from two optional selections and return the report text.
///
/// If either root is missing, returns the "not selected" message without
/// touching the filesystem.
pub fn move_files(source: Option<PathBuf>, destination: Option<PathBuf>) -> String {
    match SyncRequest::new(source, destination) {
        Ok(request) => execute_sync(&request, SyncOptions::default(), None).message(),
        Err(err) => err.to_string(),
    }
}

fn emit_event(on_event: Option<&ExecutionCallback>, event: ExecutionEvent<'_>) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn request_for(src: &TempDir, dst: &TempDir) -> SyncRequest {
        SyncRequest {
            source_root: src.path().to_path_buf(),
            destination_root: dst.path().to_path_buf(),
        }
    }

    #[test]
    fn test_sync_entry_copies_into_existing_dir() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");
        let entry = ManifestEntry::new("en.lproj", "Localizable.strings");

        fs::create_dir_all(src.path().join("en.lproj")).expect("create src locale");
        fs::create_dir_all(dst.path().join("en.lproj")).expect("create dst locale");
        fs::write(entry.resolve(src.path()), b"\"a\" = \"A\";").expect("write src");

        let outcome = sync_entry(&entry, src.path(), dst.path(), SyncOptions::default());

        let stats = outcome.result.expect("copy should succeed");
        assert_eq!(stats.bytes, 10);
        assert!(!stats.replaced);
        assert_eq!(
            fs::read(dst.path().join("en.lproj/Localizable.strings")).expect("read dst"),
            b"\"a\" = \"A\";"
        );
    }

    #[test]
    fn test_sync_entry_replaces_existing_file() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");
        let entry = ManifestEntry::new("", "LocalizableKeys.swift");

        fs::write(src.path().join("LocalizableKeys.swift"), b"new").expect("write src");
        fs::write(dst.path().join("LocalizableKeys.swift"), b"old and longer")
            .expect("write dst");

        let outcome = sync_entry(&entry, src.path(), dst.path(), SyncOptions { verify: true });

        let stats = outcome.result.expect("copy should succeed");
        assert!(stats.replaced);
        assert!(stats.verified);
        assert_eq!(
            fs::read(dst.path().join("LocalizableKeys.swift")).expect("read dst"),
            b"new"
        );
    }

    #[test]
    fn test_sync_entry_does_not_create_directories() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");
        let entry = ManifestEntry::new("ja.lproj", "Localizable.strings");

        fs::create_dir_all(src.path().join("ja.lproj")).expect("create src locale");
        fs::write(entry.resolve(src.path()), b"ja").expect("write src");

        let outcome = sync_entry(&entry, src.path(), dst.path(), SyncOptions::default());

        assert!(matches!(
            outcome.result,
            Err(FileMoveError::CopyFailed { .. })
        ));
        assert!(!dst.path().join("ja.lproj").exists());
    }

    #[test]
    fn test_sync_entry_replaces_directory_in_the_way() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");
        let entry = ManifestEntry::new("", "LocalizableKeys.swift");

        fs::write(src.path().join("LocalizableKeys.swift"), b"keys").expect("write src");
        let blocker = dst.path().join("LocalizableKeys.swift");
        fs::create_dir_all(blocker.join("nested")).expect("create blocking dir");
        fs::write(blocker.join("nested/inner.txt"), b"x").expect("write inner");

        let outcome = sync_entry(&entry, src.path(), dst.path(), SyncOptions::default());

        let stats = outcome.result.expect("directory should be replaced");
        assert!(stats.replaced);
        assert_eq!(fs::read(&blocker).expect("read dst"), b"keys");
    }

    #[test]
    fn test_sync_entry_same_file_is_left_alone() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let entry = ManifestEntry::new("", "LocalizableKeys.swift");
        fs::write(dir.path().join("LocalizableKeys.swift"), b"precious").expect("write file");

        let outcome = sync_entry(&entry, dir.path(), dir.path(), SyncOptions::default());

        assert!(matches!(
            outcome.result,
            Err(FileMoveError::SameFile { .. })
        ));
        assert_eq!(
            fs::read(dir.path().join("LocalizableKeys.swift")).expect("read file"),
            b"precious"
        );
    }

    #[test]
    fn test_is_same_file() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let a = dir.path().join("a.strings");
        let b = dir.path().join("b.strings");
        fs::write(&a, b"a").expect("write a");
        fs::write(&b, b"a").expect("write b");

        assert!(is_same_file(&a, &dir.path().join(".").join("a.strings")));
        assert!(!is_same_file(&a, &b));
        assert!(!is_same_file(&a, &dir.path().join("missing.strings")));
    }

    #[test]
    fn test_execute_sync_continues_after_failures() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");
        let namdo = dst.path().join("Namdo");
        fs::create_dir_all(&namdo).expect("create Namdo");
        fs::write(src.path().join("LocalizableKeys.swift"), b"keys").expect("write keys");

        let result = execute_sync(&request_for(&src, &dst), SyncOptions::default(), None);

        assert_eq!(result.outcomes.len(), 6);
        assert!(result.outcomes[0].is_success());
        assert_eq!(result.succeeded(), 1);
        assert_eq!(result.failed(), 5);
        assert!(namdo.join("LocalizableKeys.swift").exists());
    }

    #[test]
    fn test_execute_sync_emits_events() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");

        let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let events_ref = Arc::clone(&events);
        let callback = move |event: &ExecutionEvent<'_>| {
            let label = match event {
                ExecutionEvent::EntryStart { .. } => "start",
                ExecutionEvent::EntryFinished { .. } => "finished",
                ExecutionEvent::Complete { .. } => "complete",
            };
            events_ref
                .lock()
                .expect("lock events")
                .push(label.to_string());
        };

        execute_sync(&request_for(&src, &dst), SyncOptions::default(), Some(&callback));

        let snapshot = events.lock().expect("lock events snapshot").clone();
        assert_eq!(snapshot.len(), 13);
        assert_eq!(snapshot[0], "start");
        assert_eq!(snapshot[1], "finished");
        assert_eq!(snapshot[12], "complete");
    }

    #[test]
    fn test_move_files_without_selection_returns_sentinel() {
        assert_eq!(
            move_files(None, Some(PathBuf::from("/nonexistent"))),
            "Source or destination folder not selected."
        );
        assert_eq!(
            move_files(Some(PathBuf::from("/nonexistent")), None),
            "Source or destination folder not selected."
        );
    }
}
