//! Rendering results for the terminal and for machines

use crate::plan::SyncPlan;
use crate::types::{EntryOutcome, FileMoveError, SyncAction, SyncRequest, SyncResult};
use chrono::{DateTime, Utc};
use console::style;
use indicatif::HumanBytes;
use serde::Serialize;
use std::path::PathBuf;

/// Plain report: one line per entry, in manifest order
pub fn format_report(result: &SyncResult) -> String {
    result.message()
}

/// Report with success/failure coloring; identical text when colors are off
pub fn format_styled_report(result: &SyncResult) -> String {
    let mut lines: Vec<String> = result
        .outcomes
        .iter()
        .map(|outcome| {
            let line = outcome.message();
            if outcome.is_success() {
                style(line).green().to_string()
            } else {
                style(line).red().to_string()
            }
        })
        .collect();

    lines.push(format!(
        "{} succeeded, {} failed, {} copied",
        result.succeeded(),
        result.failed(),
        HumanBytes(result.bytes_copied())
    ));
    lines.join("\n")
}

/// Dry-run listing, one line per entry
pub fn format_plan(plan: &SyncPlan) -> String {
    let mut lines = Vec::with_capacity(plan.entries.len() + 2);
    lines.push("Dry-run actions:".to_string());
    for planned in &plan.entries {
        let note = match planned.action {
            SyncAction::Overwrite {
                identical: Some(true),
            } => " (unchanged)",
            SyncAction::Overwrite {
                identical: Some(false),
            } => " (changed)",
            SyncAction::MissingSource => " (source file not found)",
            SyncAction::MissingDestinationDir => " (destination folder not found)",
            SyncAction::SameFile => " (source and destination are the same file)",
            _ => "",
        };
        lines.push(format!(
            "  {:<9} {}{}",
            planned.action.action_name(),
            planned.entry.label(),
            note
        ));
    }
    lines.push(format!(
        "Plan:\n  Copy: {}  Update: {}  Failing: {}\n  Total bytes to transfer: {}",
        plan.stats.copy_count,
        plan.stats.overwrite_count,
        plan.stats.failure_count,
        HumanBytes(plan.stats.total_bytes)
    ));
    lines.join("\n")
}

/// JSON document for a finished pass
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub finished_at: DateTime<Utc>,
    pub succeeded: usize,
    pub failed: usize,
    pub entries: Vec<JsonEntry>,
}

#[derive(Debug, Serialize)]
pub struct JsonEntry {
    pub entry: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    pub message: String,
}

impl JsonReport {
    pub fn new(request: &SyncRequest, result: &SyncResult) -> Self {
        Self {
            source: request.source_root.clone(),
            destination: request.target_root(),
            finished_at: Utc::now(),
            succeeded: result.succeeded(),
            failed: result.failed(),
            entries: result.outcomes.iter().map(JsonEntry::from).collect(),
        }
    }
}

impl From<&EntryOutcome> for JsonEntry {
    fn from(outcome: &EntryOutcome) -> Self {
        let (status, bytes, error_kind) = match &outcome.result {
            Ok(stats) => ("success", Some(stats.bytes), None),
            Err(err) => ("failure", None, Some(err.kind_label())),
        };
        Self {
            entry: outcome.entry.label(),
            source: outcome.source.clone(),
            destination: outcome.destination.clone(),
            status,
            bytes,
            error_kind,
            message: outcome.message(),
        }
    }
}

/// JSON document for a dry run
#[derive(Debug, Serialize)]
pub struct JsonPlan {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub dry_run: bool,
    pub entries: Vec<JsonPlannedEntry>,
}

#[derive(Debug, Serialize)]
pub struct JsonPlannedEntry {
    pub entry: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub action: SyncAction,
}

impl JsonPlan {
    pub fn new(request: &SyncRequest, plan: &SyncPlan) -> Self {
        Self {
            source: request.source_root.clone(),
            destination: request.target_root(),
            dry_run: true,
            entries: plan
                .entries
                .iter()
                .map(|planned| JsonPlannedEntry {
                    entry: planned.entry.label(),
                    source: planned.source.clone(),
                    destination: planned.destination.clone(),
                    action: planned.action,
                })
                .collect(),
        }
    }
}

/// JSON document when no folders were selected
pub fn missing_selection_json() -> serde_json::Value {
    serde_json::json!({
        "error": FileMoveError::MissingSelection.kind_label(),
        "message": FileMoveError::MissingSelection.to_string(),
    })
}
