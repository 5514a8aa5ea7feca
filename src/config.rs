//! Session configuration.
//!
//! There is no file or environment configuration: the suite binaries build a
//! [`SessionConfig`] from their command-line flags, library callers build one
//! directly.

use termcolor::ColorChoice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Emit the build banner (and argv in debug builds) on initialize.
    pub verbose: bool,
    /// Colouring of the pass/fail glyphs on stdout.
    pub color: ColorChoice,
    /// Count `fail` as a failure. Off by default: `fail` then counts as a pass.
    pub strict_fail: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            color: detect_color(),
            strict_fail: false,
        }
    }
}

impl SessionConfig {
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn strict_fail(mut self, strict_fail: bool) -> Self {
        self.strict_fail = strict_fail;
        self
    }
}

/// Colour only when stdout is a terminal.
pub fn detect_color() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
