//! Configuration management

use crate::manifest::PROJECT_SUBDIR;
use crate::types::FileMoveError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "filemove",
    version,
    about = "Copy localization files from a translation folder into the project's Namdo folder"
)]
pub struct Cli {
    /// Translation folder to read the files from
    pub source: Option<PathBuf>,

    /// Project folder; files are written under its Namdo/ directory
    pub destination: Option<PathBuf>,

    /// Show what would be copied without touching anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Compare source and destination hashes after each copy
    #[arg(long)]
    pub verify: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Prompt for any folder not given on the command line
    #[arg(short, long)]
    pub interactive: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How the final report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration for filemove
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Translation folder (None until selected)
    pub source: Option<PathBuf>,

    /// Project folder (None until selected)
    pub destination: Option<PathBuf>,

    /// Dry run (show plan, don't execute)
    pub dry_run: bool,

    /// Hash-check every copied file
    pub verify: bool,

    /// Report format on stdout
    pub output: OutputFormat,

    /// Prompt for missing folders
    pub interactive: bool,

    /// Show the progress bar
    pub show_progress: bool,

    /// Number of -v flags
    pub verbosity: u8,
}

impl TryFrom<Cli> for Config {
    type Error = FileMoveError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let output = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let config = Config {
            source: cli.source,
            destination: cli.destination,
            dry_run: cli.dry_run,
            verify: cli.verify,
            output,
            interactive: cli.interactive,
            show_progress: !cli.quiet && output == OutputFormat::Text,
            verbosity: cli.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Validate configuration
    ///
    /// Missing folders are allowed here; they are reported as "not selected"
    /// when the pass runs. A folder that was given must be an existing directory.
    pub fn validate(&self) -> Result<(), FileMoveError> {
        for (label, path) in [("Source", &self.source), ("Destination", &self.destination)] {
            let Some(path) = path else { continue };
            if !path.exists() {
                return Err(FileMoveError::Config(format!(
                    "{} path does not exist: {}",
                    label,
                    path.display()
                )));
            }
            if !path.is_dir() {
                return Err(FileMoveError::Config(format!(
                    "{} path is not a directory: {}",
                    label,
                    path.display()
                )));
            }
        }

        if let (Some(source), Some(destination)) = (&self.source, &self.destination) {
            let target = destination.join(PROJECT_SUBDIR);
            if let (Ok(a), Ok(b)) = (source.canonicalize(), target.canonicalize()) {
                if a == b {
                    return Err(FileMoveError::Config(format!(
                        "Source folder is the project's {} folder: {}",
                        PROJECT_SUBDIR,
                        source.display()
                    )));
                }
            }
        }
        Ok(())
    }
}
