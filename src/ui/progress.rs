//! Progress reporting

use crate::types::{EntryOutcome, ManifestEntry};
use indicatif::{HumanBytes, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Instant;

/// Progress reporter for a copy pass
pub struct ProgressReporter {
    bar: ProgressBar,
    started_at: Option<Instant>,
    copied_bytes: u64,
}

impl ProgressReporter {
    /// Create a progress reporter drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a reporter that never draws (quiet mode, JSON output, tests)
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        if let Ok(style) = ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} files | {msg}")
        {
            bar.set_style(style.progress_chars("=>-"));
        }

        Self {
            bar,
            started_at: None,
            copied_bytes: 0,
        }
    }

    /// Initialize the pass.
    pub fn start(&mut self, total_entries: u64) {
        self.started_at = Some(Instant::now());
        self.copied_bytes = 0;
        self.bar.set_length(total_entries);
        self.bar.set_position(0);
        self.bar.set_message("Starting copy...".to_string());
    }

    /// Update current entry indicator.
    pub fn set_current_entry(&self, entry: &ManifestEntry) {
        self.bar.set_message(format!("Copy {}", entry.label()));
    }

    /// Advance by one finished entry.
    pub fn complete_entry(&mut self, outcome: &EntryOutcome) {
        match &outcome.result {
            Ok(stats) => {
                self.copied_bytes = self.copied_bytes.saturating_add(stats.bytes);
            }
            Err(err) => {
                self.bar.println(format!("ERROR {}: {}", outcome.entry.label(), err));
            }
        }
        self.bar.inc(1);
        self.bar
            .set_message(format!("{} copied", HumanBytes(self.copied_bytes)));
    }

    /// Finalize the pass.
    pub fn finish(&self, succeeded: usize, failed: usize) {
        let elapsed = self
            .started_at
            .map(|started| started.elapsed().as_millis())
            .unwrap_or_default();
        self.bar.finish_with_message(format!(
            "{} succeeded, {} failed | {} in {} ms",
            succeeded,
            failed,
            HumanBytes(self.copied_bytes),
            elapsed
        ));
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}
