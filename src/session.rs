//! Session state and the test runner.
//!
//! A [`Session`] is owned by the suite driver and borrowed by every assertion
//! and runner call. It moves through [`Phase::Initialized`], any number of
//! [`Phase::RunningCase`] stretches, and ends in [`Phase::Finalized`] once
//! [`Session::compute_result`] has been called.
//!
//! Assertions made after finalization still print and count, but the summary
//! already handed out does not reflect them. Callers should not rely on it.

pub mod assert;

use crate::banner;
use crate::cli::output::{Mark, OutputSink, StdoutSink};
use crate::config::SessionConfig;
use crate::error::HarnessError;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Counters are live and no case body is executing.
    Initialized,
    /// A case body is executing.
    RunningCase,
    /// `compute_result` has been called.
    Finalized,
}

/// Counter snapshot taken by [`Session::compute_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: u32,
    pub failed: u32,
}

impl Summary {
    /// A run passes only if something passed and nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.passed != 0
    }

    /// Process exit status: `0` on success, `1` otherwise.
    pub fn code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl From<Summary> for ExitCode {
    fn from(summary: Summary) -> Self {
        if summary.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

pub struct Session<S: OutputSink = StdoutSink> {
    config: SessionConfig,
    sink: S,
    passed: u32,
    failed: u32,
    case_sets: u32,
    phase: Phase,
}

impl Session<StdoutSink> {
    /// Creates and initializes a session reporting to stdout.
    pub fn new(config: SessionConfig, args: &[String]) -> Self {
        let sink = StdoutSink::new(config.color);
        Self::with_sink(config, sink, args)
    }
}

impl<S: OutputSink> Session<S> {
    /// Creates and initializes a session reporting to `sink`.
    pub fn with_sink(config: SessionConfig, sink: S, args: &[String]) -> Self {
        let mut session = Self {
            config,
            sink,
            passed: 0,
            failed: 0,
            case_sets: 0,
            phase: Phase::Initialized,
        };
        session.initialize(args);
        session
    }

    /// Resets all counters. A verbose session also prints the build banner.
    pub fn initialize(&mut self, args: &[String]) {
        self.passed = 0;
        self.failed = 0;
        self.case_sets = 0;
        self.phase = Phase::Initialized;

        if self.config.verbose {
            for line in banner::lines(args) {
                self.sink.emit(&line);
            }
        }
        debug!(verbose = self.config.verbose, "session initialized");
    }

    /// Prints a blank line and the suite name.
    pub fn start_suite(&mut self, name: &str) {
        debug!(suite = name, "suite started");
        self.sink.emit("");
        self.sink.emit(name);
    }

    /// Prints the case header and runs `body` to completion on this thread.
    ///
    /// A blank separator precedes every header but the first. A panicking
    /// body unwinds straight through; there is no isolation between cases.
    pub fn run_test_case<F>(&mut self, body: F, name: &str)
    where
        F: FnOnce(&mut Self),
    {
        if self.case_sets != 0 {
            self.sink.emit("");
        }
        self.sink.emit(&format!("  {}", name));

        debug!(case = name, "running test case");
        self.phase = Phase::RunningCase;
        body(self);
        self.phase = Phase::Initialized;
        self.case_sets += 1;
    }

    /// Prints the summary line and returns the counters.
    pub fn compute_result(&mut self) -> Summary {
        let summary = Summary {
            passed: self.passed,
            failed: self.failed,
        };

        self.sink.emit("");
        if summary.is_success() {
            self.sink.emit(&format!("  {} passing", summary.passed));
        } else {
            self.sink.emit(&format!(
                "  {} passing, {} failing",
                summary.passed, summary.failed
            ));
        }

        self.phase = Phase::Finalized;
        debug!(
            passed = summary.passed,
            failed = summary.failed,
            "session finalized"
        );
        summary
    }

    /// Flushes the report stream.
    pub fn flush(&mut self) -> Result<(), HarnessError> {
        self.sink.flush()?;
        Ok(())
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    /// Number of test cases run since the last initialize.
    pub fn case_sets(&self) -> u32 {
        self.case_sets
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn record_pass(&mut self, text: &str) {
        self.check_live();
        self.sink.emit_mark(Mark::Pass, text);
        self.passed += 1;
    }

    fn record_fail(&mut self, text: &str) {
        self.check_live();
        self.sink.emit_mark(Mark::Fail, text);
        self.failed += 1;
    }

    fn check_live(&self) {
        if self.phase == Phase::Finalized {
            warn!("assertion recorded after the session was finalized");
        }
    }
}
