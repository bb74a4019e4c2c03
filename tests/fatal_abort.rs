//! End-to-end test of the fatal path. The aborting test re-runs this test
//! binary as a child process, triggers `assertion_fail` there, and verifies
//! from the outside that the exact diagnostic reached the child's stderr and
//! that the child terminated abnormally rather than exiting.

use std::process::Command;

const CHILD_ENV: &str = "BUGCHECK_FATAL_ABORT_CHILD";

#[test]
fn assertion_fail_writes_diagnostic_then_aborts() {
    if std::env::var_os(CHILD_ENV).is_some() {
        bugcheck::assertion_fail("foo.cpp", 42, "Bar", "x != nullptr");
    }

    let exe = std::env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["assertion_fail_writes_diagnostic_then_aborts", "--exact", "--nocapture"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("failed to re-run test binary");

    assert!(!output.status.success(), "child terminated normally: {:?}", output.status);
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        // SIGABRT
        assert_eq!(output.status.signal(), Some(6), "status: {:?}", output.status);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("foo.cpp:42 Bar: Assertion `x != nullptr' failed.\n"),
        "child stderr missing diagnostic: {stderr:?}"
    );
}

#[test]
fn assert_abort_is_a_no_op_when_the_condition_holds() {
    bugcheck::assert_abort!(2 + 2 == 4);
}

#[test]
fn assume_evaluates_its_condition_exactly_once() {
    let mut evaluations = 0;
    bugcheck::assume!({
        evaluations += 1;
        true
    });
    assert_eq!(evaluations, 1);
}
