//! Defines the command-line arguments shared by every suite binary.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use crate::config::{detect_color, SessionConfig};
use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;

/// The arguments every suite binary accepts.
#[derive(Debug, Parser)]
#[command(version, about = "Runs a microtest suite; exits non-zero on failure.")]
pub struct SuiteArgs {
    /// Print the build banner on startup (and argv in debug builds).
    #[arg(short, long)]
    pub verbose: bool,

    /// When to colour the pass/fail glyphs.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Count `fail` assertions as failures instead of passes.
    #[arg(long)]
    pub strict_fail: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl SuiteArgs {
    pub fn to_config(&self) -> SessionConfig {
        let color = match self.color {
            ColorMode::Auto => detect_color(),
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        };
        SessionConfig::default()
            .verbose(self.verbose)
            .color(color)
            .strict_fail(self.strict_fail)
    }
}
