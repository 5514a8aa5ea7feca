//! Assertion primitives.
//!
//! Each primitive prints exactly one line and bumps one counter. The plain
//! variants capture the caller's location through `#[track_caller]`; the
//! `*_at` variants take it explicitly (see [`crate::location!`]).
//!
//! Failure lines are deliberately asymmetric: only equality reports the
//! expected and actual values, the others report the location alone.

use super::Session;
use crate::cli::output::{Mark, OutputSink};
use std::fmt;
use std::panic::Location;

/// File and line an assertion was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl<S: OutputSink> Session<S> {
    #[track_caller]
    pub fn expect_eq(&mut self, actual: i64, expected: i64, message: &str) {
        self.expect_eq_at(actual, expected, message, SourceLocation::caller());
    }

    pub fn expect_eq_at(
        &mut self,
        actual: i64,
        expected: i64,
        message: &str,
        location: SourceLocation,
    ) {
        if actual == expected {
            self.record_pass(message);
        } else {
            self.record_fail(&format!(
                "{} (expected {}, got {}, in '{}')",
                message, expected, actual, location
            ));
        }
    }

    #[track_caller]
    pub fn expect_ne(&mut self, actual: i64, expected: i64, message: &str) {
        self.expect_ne_at(actual, expected, message, SourceLocation::caller());
    }

    pub fn expect_ne_at(
        &mut self,
        actual: i64,
        expected: i64,
        message: &str,
        location: SourceLocation,
    ) {
        if actual != expected {
            self.record_pass(message);
        } else {
            self.record_fail(&located(message, location));
        }
    }

    #[track_caller]
    pub fn expect_true(&mut self, condition: bool, message: &str) {
        self.expect_true_at(condition, message, SourceLocation::caller());
    }

    pub fn expect_true_at(&mut self, condition: bool, message: &str, location: SourceLocation) {
        if condition {
            self.record_pass(message);
        } else {
            self.record_fail(&located(message, location));
        }
    }

    #[track_caller]
    pub fn pass(&mut self, message: &str) {
        self.pass_at(message, SourceLocation::caller());
    }

    /// Always passes. The location is not printed.
    pub fn pass_at(&mut self, message: &str, _location: SourceLocation) {
        self.record_pass(message);
    }

    #[track_caller]
    pub fn fail(&mut self, message: &str) {
        self.fail_at(message, SourceLocation::caller());
    }

    /// Prints a failure line but counts a pass, unless `strict_fail` is set.
    pub fn fail_at(&mut self, message: &str, location: SourceLocation) {
        let text = located(message, location);
        if self.config.strict_fail {
            self.record_fail(&text);
        } else {
            self.check_live();
            self.sink.emit_mark(Mark::Fail, &text);
            self.passed += 1;
        }
    }
}

fn located(message: &str, location: SourceLocation) -> String {
    format!("{} (in '{}')", message, location)
}
