//! Main copy command

use crate::executor::{execute_sync, ExecutionEvent, SyncOptions};
use crate::manifest::manifest;
use crate::plan::plan_sync;
use crate::types::{FileMoveError, SyncRequest};
use crate::ui::prompt::prompt_for_folder;
use crate::ui::report::{
    format_plan, format_report, format_styled_report, missing_selection_json, JsonPlan,
    JsonReport,
};
use crate::ui::ProgressReporter;
use crate::config::OutputFormat;
use crate::Config;
use console::Term;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Run the copy pass and print the report to stdout
pub fn run(config: Config) -> Result<(), FileMoveError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let styled = config.output == OutputFormat::Text && Term::stdout().is_term();
    run_with_output(fill_selection(config)?, &mut out, styled)
}

/// Prompt for any folder the command line left out, if asked to
fn fill_selection(mut config: Config) -> Result<Config, FileMoveError> {
    if !config.interactive {
        return Ok(config);
    }

    let term = Term::stderr();
    if config.source.is_none() {
        config.source = prompt_for_folder(&term, "Translation")?;
    }
    if config.destination.is_none() {
        config.destination = prompt_for_folder(&term, "Project")?;
    }
    config.validate()?;
    Ok(config)
}

/// Run against an explicit writer.
///
/// Returns `MissingSelection` after printing the "not selected" message, and
/// `EntriesFailed` after printing the report if any entry failed.
pub fn run_with_output<W: Write>(
    config: Config,
    out: &mut W,
    styled: bool,
) -> Result<(), FileMoveError> {
    let request = match SyncRequest::new(config.source.clone(), config.destination.clone()) {
        Ok(request) => request,
        Err(err) => {
            match config.output {
                OutputFormat::Text => writeln!(out, "{err}")?,
                OutputFormat::Json => writeln!(out, "{}", missing_selection_json())?,
            }
            return Err(err);
        }
    };

    if config.dry_run {
        let plan = plan_sync(&request, config.verify);
        debug!(
            copy = plan.stats.copy_count,
            update = plan.stats.overwrite_count,
            failing = plan.stats.failure_count,
            "dry run planned"
        );
        match config.output {
            OutputFormat::Text => {
                writeln!(out, "{}", format_plan(&plan))?;
                writeln!(out, "Dry-run mode: no changes were made.")?;
            }
            OutputFormat::Json => write_json(out, &JsonPlan::new(&request, &plan))?,
        }
        return Ok(());
    }

    info!(
        source = %request.source_root.display(),
        destination = %request.target_root().display(),
        "copying localization files"
    );

    let reporter = Arc::new(Mutex::new(if config.show_progress {
        ProgressReporter::new()
    } else {
        ProgressReporter::hidden()
    }));
    if let Ok(mut progress) = reporter.lock() {
        progress.start(manifest().len() as u64);
    }

    let progress_cb = {
        let reporter = Arc::clone(&reporter);
        move |event: &ExecutionEvent<'_>| {
            let Ok(mut progress) = reporter.lock() else {
                return;
            };
            match event {
                ExecutionEvent::EntryStart { entry, .. } => progress.set_current_entry(entry),
                ExecutionEvent::EntryFinished { outcome, .. } => progress.complete_entry(outcome),
                ExecutionEvent::Complete { succeeded, failed } => {
                    progress.finish(*succeeded, *failed)
                }
            }
        }
    };

    let options = SyncOptions {
        verify: config.verify,
    };
    let result = execute_sync(&request, options, Some(&progress_cb));

    match config.output {
        OutputFormat::Text if styled => writeln!(out, "{}", format_styled_report(&result))?,
        OutputFormat::Text => writeln!(out, "{}", format_report(&result))?,
        OutputFormat::Json => write_json(out, &JsonReport::new(&request, &result))?,
    }

    if result.all_succeeded() {
        Ok(())
    } else {
        Err(FileMoveError::EntriesFailed {
            failed: result.failed(),
            total: result.outcomes.len(),
        })
    }
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<(), FileMoveError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn quiet_config(source: Option<PathBuf>, destination: Option<PathBuf>) -> Config {
        Config {
            source,
            destination,
            ..Config::default()
        }
    }

    #[test]
    fn test_missing_selection_prints_sentinel_only() {
        let mut out = Vec::new();
        let err = run_with_output(quiet_config(None, None), &mut out, false)
            .expect_err("missing selection must fail");

        assert!(matches!(err, FileMoveError::MissingSelection));
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Source or destination folder not selected.\n"
        );
    }

    #[test]
    fn test_dry_run_writes_plan_and_changes_nothing() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");
        fs::create_dir_all(dst.path().join("Namdo")).expect("create Namdo");
        fs::write(src.path().join("LocalizableKeys.swift"), b"keys").expect("write keys");

        let mut config = quiet_config(
            Some(src.path().to_path_buf()),
            Some(dst.path().to_path_buf()),
        );
        config.dry_run = true;

        let mut out = Vec::new();
        run_with_output(config, &mut out, false).expect("dry run succeeds");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("COPY      LocalizableKeys.swift"));
        assert!(text.contains("Dry-run mode: no changes were made."));
        assert!(!dst.path().join("Namdo/LocalizableKeys.swift").exists());
    }

    #[test]
    fn test_failed_entries_are_reported_then_returned() {
        let src = tempfile::tempdir().expect("create src tempdir");
        let dst = tempfile::tempdir().expect("create dst tempdir");
        fs::create_dir_all(dst.path().join("Namdo")).expect("create Namdo");
        fs::write(src.path().join("LocalizableKeys.swift"), b"keys").expect("write keys");

        let mut out = Vec::new();
        let err = run_with_output(
            quiet_config(
                Some(src.path().to_path_buf()),
                Some(dst.path().to_path_buf()),
            ),
            &mut out,
            false,
        )
        .expect_err("five entries fail");

        assert!(matches!(
            err,
            FileMoveError::EntriesFailed {
                failed: 5,
                total: 6
            }
        ));
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 6);
        assert_eq!(
            text.lines().next(),
            Some("File LocalizableKeys.swift copied successfully.")
        );
    }
}
