//! The fixed list of localization files that get copied

use crate::types::ManifestEntry;

/// Sub-directory of the selected project folder that receives the files
pub const PROJECT_SUBDIR: &str = "Namdo";

/// Name of the per-locale strings file
pub const STRINGS_FILE: &str = "Localizable.strings";

const MANIFEST: [ManifestEntry; 6] = [
    ManifestEntry::new("", "LocalizableKeys.swift"),
    ManifestEntry::new("zh-Hant.lproj", STRINGS_FILE),
    ManifestEntry::new("ja.lproj", STRINGS_FILE),
    ManifestEntry::new("zh-Hans.lproj", STRINGS_FILE),
    ManifestEntry::new("en.lproj", STRINGS_FILE),
    ManifestEntry::new("ko.lproj", STRINGS_FILE),
];

/// Every file to synchronize, in the order they are processed.
///
/// The keys file comes first, then the strings file for each locale
/// (Traditional Chinese, Japanese, Simplified Chinese, English, Korean).
pub fn manifest() -> &'static [ManifestEntry] {
    &MANIFEST
}
