//! End-to-end session scenarios, driven through the public API with the
//! report captured in an `OutputBuffer`.

use microtest::{location, OutputBuffer, Phase, Session, SessionConfig, Summary};
use termcolor::ColorChoice;

fn session() -> Session<OutputBuffer> {
    let config = SessionConfig::default().color(ColorChoice::Never);
    Session::with_sink(config, OutputBuffer::new(), &[])
}

#[test]
fn scenario_single_passing_case_succeeds() {
    let mut s = session();
    s.start_suite("S");
    s.run_test_case(|s| s.expect_eq(1 + 2, 3, "ok"), "add");

    let summary = s.compute_result();
    assert_eq!(summary, Summary { passed: 1, failed: 0 });
    assert_eq!(summary.code(), 0);
}

#[test]
fn scenario_one_wrong_expectation_fails() {
    let mut s = session();
    s.start_suite("S");
    s.run_test_case(
        |s| {
            s.expect_eq(1 + 2, 3, "ok");
            s.expect_eq(3 * 2, 7, "bad");
        },
        "add",
    );

    let summary = s.compute_result();
    assert_eq!(summary, Summary { passed: 1, failed: 1 });
    assert_ne!(summary.code(), 0);
    assert_eq!(s.sink().lines.last().unwrap(), "  1 passing, 1 failing");
}

#[test]
fn scenario_no_assertions_fails() {
    let mut s = session();
    s.start_suite("S");
    s.run_test_case(|_| {}, "empty");

    let summary = s.compute_result();
    assert_eq!(summary, Summary { passed: 0, failed: 0 });
    assert_ne!(summary.code(), 0);
}

#[test]
fn scenario_fail_alone_still_succeeds() {
    let mut s = session();
    s.run_test_case(|s| s.fail("x"), "quirk");

    let summary = s.compute_result();
    assert_eq!(summary, Summary { passed: 1, failed: 0 });
    assert_eq!(summary.code(), 0);
}

#[test]
fn strict_fail_turns_the_same_run_into_a_failure() {
    let config = SessionConfig::default()
        .color(ColorChoice::Never)
        .strict_fail(true);
    let mut s = Session::with_sink(config, OutputBuffer::new(), &[]);
    s.run_test_case(|s| s.fail("x"), "quirk");

    assert_eq!(s.compute_result(), Summary { passed: 0, failed: 1 });
}

#[test]
fn failures_do_not_stop_later_cases() {
    let mut s = session();
    s.run_test_case(|s| s.expect_true(false, "first"), "a");
    s.run_test_case(|s| s.expect_ne(1, 2, "second"), "b");

    assert_eq!((s.passed(), s.failed(), s.case_sets()), (1, 1, 2));
}

#[test]
fn counters_track_every_evaluation() {
    let mut s = session();
    s.run_test_case(
        |s| {
            for i in 0..10 {
                s.expect_eq(i % 3, 0, "divisible by three");
            }
        },
        "loop",
    );

    assert_eq!(s.passed() + s.failed(), 10);
    assert_eq!(s.passed(), 4);
}

#[test]
fn full_report_layout() {
    let here = location!();
    let mut s = session();
    s.start_suite("test/fail/xyz-suite");
    s.run_test_case(
        |s| {
            s.expect_eq(3, 3, "1+2 is 3");
            s.expect_eq(3, 3, "2+1 is 3");
        },
        "add",
    );
    s.run_test_case(
        |s| {
            s.expect_eq(6, 6, "2*3 is 6");
            s.expect_eq_at(6, 7, "3*2 is 7", here);
        },
        "mul",
    );
    s.compute_result();
    assert_eq!(s.phase(), Phase::Finalized);

    let expected = format!(
        "\ntest/fail/xyz-suite\n  add\n    ✓ 1+2 is 3\n    ✓ 2+1 is 3\n\n  mul\n    ✓ 2*3 is 6\n    ✗ 3*2 is 7 (expected 7, got 6, in '{}:{}')\n\n  3 passing, 1 failing\n",
        here.file, here.line
    );
    assert_eq!(s.into_sink().contents(), expected);
}
