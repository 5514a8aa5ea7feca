//! Driver-level errors.
//!
//! Assertion failures are never errors: they are counted and reported. The
//! only thing that can go wrong is the report stream itself.

use miette::Diagnostic;
use std::io;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    #[error("Report error: could not write the test report")]
    #[diagnostic(
        code(microtest::output::write),
        help("the summary may be incomplete; check that stdout is still open")
    )]
    Report {
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for HarnessError {
    fn from(source: io::Error) -> Self {
        HarnessError::Report { source }
    }
}
