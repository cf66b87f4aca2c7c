use clap::Parser;
use console::style;
use filemove::config::Cli;
use filemove::{Config, FileMoveError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = filemove::logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = match e.downcast_ref::<FileMoveError>() {
                // The "not selected" message is already the report
                Some(FileMoveError::MissingSelection) => return ExitCode::from(2),
                Some(err) if err.is_selection_error() => 2,
                _ => 1,
            };
            eprintln!("{}: {:#}", style("error").for_stderr().red().bold(), e);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;
    tracing::debug!(?config, "configuration validated");

    filemove::commands::sync::run(config)?;
    Ok(())
}
