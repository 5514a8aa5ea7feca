//! microtest: a minimal unit-test harness.
//!
//! A [`Session`] accumulates pass/fail counts, the assertion primitives print
//! one glyph-annotated line per evaluation, and the runner groups assertions
//! into named cases under a named suite. [`Session::compute_result`] folds the
//! counts into a [`Summary`] that doubles as the process exit status.
//!
//! ```rust
//! use microtest::{OutputBuffer, Session, SessionConfig};
//!
//! let mut session = Session::with_sink(SessionConfig::default(), OutputBuffer::new(), &[]);
//! session.start_suite("math");
//! session.run_test_case(|s| s.expect_eq(1 + 2, 3, "1+2 is 3"), "add");
//! assert!(session.compute_result().is_success());
//! ```

pub use crate::cli::output::{Mark, OutputBuffer, OutputSink, StdoutSink};
pub use crate::config::SessionConfig;
pub use crate::error::HarnessError;
pub use crate::session::assert::SourceLocation;
pub use crate::session::{Phase, Session, Summary};

pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;

/// Captures the current file and line as a [`SourceLocation`].
///
/// Used with the explicit `*_at` assertion variants.
#[macro_export]
macro_rules! location {
    () => {
        $crate::SourceLocation::new(file!(), line!())
    };
}
