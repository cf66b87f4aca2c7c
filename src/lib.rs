//! # filemove - localization file mover
//!
//! Copies a fixed set of localization files (`LocalizableKeys.swift` and each
//! locale's `Localizable.strings`) from a translation folder into the
//! `Namdo/` folder of an app project, replacing what is there.

// Module declarations
pub mod config;
pub mod manifest;
pub mod executor;
pub mod plan;
pub mod hash;
pub mod ui;
pub mod commands;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use types::{EntryOutcome, FileMoveError, ManifestEntry, SyncRequest, SyncResult};
pub use config::Config;
pub use executor::{execute_sync, move_files, SyncOptions};
pub use manifest::manifest;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
