//! The suite driver.
//!
//! A suite binary hands its name and its cases to [`run_suite`], which parses
//! the shared flags, builds the session, runs everything and turns the
//! summary into the process exit status.

use crate::cli::args::SuiteArgs;
use crate::cli::output::OutputSink;
use crate::error::HarnessError;
use crate::session::{Session, Summary};
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

pub mod args;
pub mod output;

/// Main entry point for a suite binary.
pub fn run_suite<F>(suite: &str, cases: F) -> Result<ExitCode, HarnessError>
where
    F: FnOnce(&mut Session),
{
    let args = SuiteArgs::parse();
    init_tracing(args.verbose);

    let argv: Vec<String> = std::env::args().collect();
    let mut session = Session::new(args.to_config(), &argv);
    let summary = drive(&mut session, suite, cases)?;
    Ok(summary.into())
}

/// Starts `suite`, runs `cases`, prints the summary and flushes the report.
pub fn drive<S, F>(
    session: &mut Session<S>,
    suite: &str,
    cases: F,
) -> Result<Summary, HarnessError>
where
    S: OutputSink,
    F: FnOnce(&mut Session<S>),
{
    session.start_suite(suite);
    cases(session);
    let summary = session.compute_result();
    session.flush()?;
    Ok(summary)
}

/// Diagnostics go to stderr so they never interleave with the report.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
