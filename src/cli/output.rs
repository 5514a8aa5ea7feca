//! Handles all report output for a test session.
//!
//! Every line the harness prints goes through an [`OutputSink`]. The CLI uses
//! [`StdoutSink`], which colours the pass/fail glyphs; tests and programmatic
//! callers use [`OutputBuffer`] to capture the report as plain text.

// ============================================================================
// OUTPUT SINKS: OutputBuffer and StdoutSink implementations
// ============================================================================

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Indentation in front of every assertion line.
const MARK_INDENT: &str = "    ";

/// Outcome glyph printed in front of an assertion line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Pass,
    Fail,
}

impl Mark {
    pub fn glyph(self) -> char {
        match self {
            Mark::Pass => '✓',
            Mark::Fail => '✗',
        }
    }

    fn color(self) -> Color {
        match self {
            Mark::Pass => Color::Green,
            Mark::Fail => Color::Red,
        }
    }
}

/// Destination for report lines, in invocation order.
pub trait OutputSink {
    /// Writes `text` as one line. An empty `text` is a blank separator line.
    fn emit(&mut self, text: &str);

    /// Writes one assertion line: indent, glyph, then `text`.
    fn emit_mark(&mut self, mark: Mark, text: &str);

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// OutputBuffer: collects report lines for testing or programmatic capture.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    pub lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The whole report, one line per entry, newline-terminated like stdout.
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn emit_mark(&mut self, mark: Mark, text: &str) {
        self.lines
            .push(format!("{}{} {}", MARK_INDENT, mark.glyph(), text));
    }
}

/// StdoutSink: writes the report to stdout, colouring glyphs when allowed.
pub struct StdoutSink {
    stream: StandardStream,
}

impl StdoutSink {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stdout(choice),
        }
    }
}

impl OutputSink for StdoutSink {
    // Report writes are best-effort; `flush` surfaces a broken stream.
    fn emit(&mut self, text: &str) {
        let _ = writeln!(self.stream, "{}", text);
    }

    fn emit_mark(&mut self, mark: Mark, text: &str) {
        let _ = write!(self.stream, "{}", MARK_INDENT);
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(mark.color())).set_bold(true));
        let _ = write!(self.stream, "{}", mark.glyph());
        let _ = self.stream.reset();
        let _ = writeln!(self.stream, " {}", text);
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}
