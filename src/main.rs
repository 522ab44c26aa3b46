mod accounts;
mod actions;
mod cli;
mod config;
mod error;
mod registry;
mod runner;
#[cfg(test)]
mod testutil;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use declarative::{AccountLookup, ApplyContext, CommandRunner, ExecuteSummary};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use accounts::SystemAccounts;
use registry::ActionRegistry;
use runner::SystemRunner;
use ui::ConsoleReporter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let mut reporter = ConsoleReporter::stdout();
    run(&cli.config, &SystemRunner, &SystemAccounts, &mut reporter)
}

/// Apply the configuration at `path` and turn the outcome into an exit status
fn run<W: Write>(
    path: &Path,
    runner: &dyn CommandRunner,
    accounts: &dyn AccountLookup,
    reporter: &mut ConsoleReporter<W>,
) -> ExitCode {
    match apply(path, runner, accounts, reporter) {
        Ok(summary) => {
            log::info!("Done: {}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            reporter.failure(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn apply<W: Write>(
    path: &Path,
    runner: &dyn CommandRunner,
    accounts: &dyn AccountLookup,
    reporter: &mut ConsoleReporter<W>,
) -> Result<ExecuteSummary> {
    log::info!("Applying {}", path.display());

    let registry = ActionRegistry::builtin();
    let mut ctx = ApplyContext::new(runner, accounts);

    let summary = config::apply_file(path, &registry, &mut ctx, reporter)?;
    Ok(summary)
}
