// Suite for the xyz library where every expectation holds.
// Usage: cargo run --bin xyz-pass -- [--verbose] [--color never]

#[path = "common/xyz.rs"]
mod xyz;

use microtest::cli::run_suite;
use microtest::Session;
use std::process::ExitCode;

fn test_case_xyz_add(session: &mut Session) {
    session.expect_eq(xyz::add(1, 2), 3, "1+2 is 3");
    session.expect_eq(xyz::add(2, 1), 3, "2+1 is 3");
}

fn test_case_xyz_mul(session: &mut Session) {
    session.expect_eq(xyz::mul(2, 3), 6, "2*3 is 6");
    session.expect_eq(xyz::mul(3, 2), 6, "3*2 is 6");
    session.expect_ne(xyz::mul(3, 2), 7, "3*2 is not 7");
    session.expect_true(xyz::mul(0, 9) == 0, "0*9 is 0");
}

fn main() -> miette::Result<ExitCode> {
    let code = run_suite("xyz-pass", |session| {
        session.run_test_case(test_case_xyz_add, "add");
        session.run_test_case(test_case_xyz_mul, "mul");
    })?;
    Ok(code)
}
