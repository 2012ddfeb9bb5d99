//! smgen - sitemap generation for static document roots.
//!
//! Thin entry point: parse arguments, initialize logging, hand off to the
//! orchestration layer, and map every failure to its stable exit code so
//! cron logs can identify the failure site from the status alone.

use clap::Parser;
use clap::error::ErrorKind;
use std::process;
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod run;

use cli::Cli;

/// Help or version was requested.
const EXIT_HELP: i32 = 2;
/// Argument parsing or validation failed.
const EXIT_USAGE: i32 = 3;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_HELP,
                _ => EXIT_USAGE,
            };
            let _ = err.print();
            process::exit(code);
        },
    };

    if let Err(message) = cli.validate() {
        eprintln!("error: {message}");
        process::exit(EXIT_USAGE);
    }

    initialize_logging(&cli);

    if let Err(err) = run::execute(&cli) {
        error!(error = %err, exit_code = err.exit_code(), "run failed");
        if let Some(source) = std::error::Error::source(&err) {
            error!(cause = %source, "caused by");
        }
        process::exit(err.exit_code());
    }
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug || cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    // A failed install only costs us log output, never the run itself.
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: logging already initialized");
    }
}
