//! Core type definitions for filemove

mod action;
mod entry;
mod error;
mod outcome;
mod request;

pub use action::SyncAction;
pub use entry::ManifestEntry;
pub use error::FileMoveError;
pub use outcome::{CopyStats, EntryOutcome, SyncResult};
pub use request::SyncRequest;
