//! ManifestEntry - one file location that gets synchronized

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single (sub-directory, file name) pair, relative to a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ManifestEntry {
    /// Directory under the root; empty when the file sits directly in the root
    pub sub_directory: &'static str,

    /// File name inside `sub_directory`
    pub file_name: &'static str,
}

impl ManifestEntry {
    /// Create a new entry
    pub const fn new(sub_directory: &'static str, file_name: &'static str) -> Self {
        Self {
            sub_directory,
            file_name,
        }
    }

    /// Resolve this entry against `root`: root, then sub-directory (if any), then file name.
    ///
    /// Pure path arithmetic; nothing is checked on disk.
    ///
    /// # Example
    /// ```
    /// use filemove::types::ManifestEntry;
    /// use std::path::{Path, PathBuf};
    ///
    /// let entry = ManifestEntry::new("en.lproj", "Localizable.strings");
    /// assert_eq!(
    ///     entry.resolve(Path::new("/tmp/src")),
    ///     PathBuf::from("/tmp/src/en.lproj/Localizable.strings")
    /// );
    /// ```
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        if !self.sub_directory.is_empty() {
            path.push(self.sub_directory);
        }
        path.push(self.file_name);
        path
    }

    /// Relative path of this entry, as used in messages (`ja.lproj/Localizable.strings`)
    pub fn label(&self) -> String {
        if self.sub_directory.is_empty() {
            self.file_name.to_string()
        } else {
            format!("{}/{}", self.sub_directory, self.file_name)
        }
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
