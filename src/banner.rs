//! Build and environment banner printed by a verbose session on initialize.

/// Describes how this harness was built, e.g.
/// `Built with rustc, debug profile, unwind on panic, microtest 0.1.0.`
pub fn build_line() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    let panic = if cfg!(panic = "unwind") {
        "unwind"
    } else {
        "abort"
    };
    format!(
        "Built with rustc, {} profile, {} on panic, microtest {}.",
        profile,
        panic,
        env!("CARGO_PKG_VERSION")
    )
}

/// Quotes every argument, e.g. `argv[] = 'suite' '--verbose' `.
pub fn argv_line(args: &[String]) -> String {
    let mut line = String::from("argv[] = ");
    for arg in args {
        line.push('\'');
        line.push_str(arg);
        line.push_str("' ");
    }
    line
}

/// Banner lines in print order. The argv line only appears in debug builds.
pub fn lines(args: &[String]) -> Vec<String> {
    let mut lines = vec![build_line()];
    if cfg!(debug_assertions) {
        lines.push(argv_line(args));
    }
    lines
}
