// Regression tests for the demo suite binaries: report layout and exit status.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn suite(bin: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.arg("--color").arg("never");
    cmd
}

#[test]
fn passing_suite_exits_zero() {
    suite("xyz-pass").assert().success().stdout(
        contains("\nxyz-pass\n  add\n    ✓ 1+2 is 3\n")
            .and(contains("\n\n  mul\n"))
            .and(contains("    ✓ 3*2 is not 7\n"))
            .and(contains("\n  6 passing\n"))
            .and(contains("failing").not()),
    );
}

#[test]
fn failing_suite_exits_one_and_reports_location() {
    suite("xyz-fail").assert().code(1).stdout(
        contains("    ✗ 3*2 is 7 (expected 7, got 6, in 'src/bin/xyz_fail.rs:")
            .and(contains("\n  3 passing, 1 failing\n")),
    );
}

#[test]
fn verbose_prints_the_build_banner_first() {
    suite("xyz-pass")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Built with rustc, "));
}

#[test]
fn quiet_run_has_no_banner() {
    suite("xyz-pass")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("\nxyz-pass\n"));
}

#[test]
fn unknown_flag_is_rejected() {
    suite("xyz-pass")
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(contains("--bogus"));
}
