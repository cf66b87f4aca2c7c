//! Terminal presentation: progress bar, report rendering, prompts

pub mod progress;
pub mod prompt;
pub mod report;

pub use progress::ProgressReporter;
