//! Integration tests for the public surface: call-site capture by the
//! checking macros, bug-report contact installation, and propagation of
//! [`NonFatalCheckError`] through application error types.

use bugcheck::{NonFatalCheckError, check_nonfatal};

fn failing_check() -> Result<(), NonFatalCheckError> {
    check_nonfatal!(1 + 1 == 3);
    Ok(())
}

#[test]
fn check_nonfatal_passes_through_on_true() {
    fn halve(n: u32) -> Result<u32, NonFatalCheckError> {
        check_nonfatal!(n % 2 == 0);
        Ok(n / 2)
    }

    assert_eq!(halve(10).unwrap(), 5);
    assert!(halve(7).is_err());
}

#[test]
fn check_nonfatal_captures_condition_and_call_site() {
    let err = failing_check().unwrap_err();
    let description = err.description();
    assert!(
        description.contains("Internal bug detected: \"1 + 1 == 3\""),
        "description: {description:?}"
    );
    assert!(description.contains("integration_tests.rs:"), "description: {description:?}");
    assert!(
        description.contains("(integration_tests::failing_check)"),
        "description: {description:?}"
    );
}

#[test]
fn check_nonfatal_formats_messages() {
    fn connect(slots_in_use: usize, capacity: usize) -> Result<(), NonFatalCheckError> {
        check_nonfatal!(
            slots_in_use <= capacity,
            "slot accounting drifted: {} in use, capacity {}",
            slots_in_use,
            capacity,
        );
        Ok(())
    }

    let err = connect(9, 8).unwrap_err();
    assert!(
        err.description()
            .contains("Internal bug detected: \"slot accounting drifted: 9 in use, capacity 8\"")
    );
    assert!(connect(8, 8).is_ok());
}

#[test]
fn check_nonfatal_evaluates_the_condition_once() {
    fn counted(evaluations: &mut u32) -> Result<(), NonFatalCheckError> {
        check_nonfatal!({
            *evaluations += 1;
            true
        });
        Ok(())
    }

    let mut evaluations = 0;
    counted(&mut evaluations).unwrap();
    assert_eq!(evaluations, 1);
}

#[test]
fn function_path_names_the_enclosing_function() {
    fn locate() -> &'static str {
        bugcheck::function_path!()
    }

    assert!(
        locate().ends_with("function_path_names_the_enclosing_function::locate"),
        "path: {:?}",
        locate()
    );
}

// The only test in this binary that installs a contact; the tests above
// deliberately assert nothing about the contact line.
#[test]
fn installed_contact_is_used_and_returned_on_replacement() {
    let previous = bugcheck::install_bug_report_contact("https://bugs.example.org/new");
    assert_eq!(previous, None);

    let err = NonFatalCheckError::new("cache desync", "cache.rs", 10, "refresh");
    assert!(
        err.description()
            .ends_with("Please report this issue here: https://bugs.example.org/new\n")
    );

    let replaced = bugcheck::install_bug_report_contact("https://bugs.example.org/v2");
    assert_eq!(replaced, Some("https://bugs.example.org/new"));

    let err = NonFatalCheckError::new("cache desync", "cache.rs", 10, "refresh");
    assert!(
        err.description()
            .ends_with("Please report this issue here: https://bugs.example.org/v2\n")
    );
}

#[derive(Debug, thiserror::Error)]
enum IndexError {
    #[error("index store unavailable")]
    Unavailable,
    #[error(transparent)]
    InternalBug(#[from] NonFatalCheckError),
}

fn rebuild(entries: usize) -> Result<(), IndexError> {
    check_nonfatal!(entries < 1_000, "entry count overflow: {}", entries);
    Ok(())
}

#[test]
fn propagates_into_application_error_types() {
    match rebuild(4_096) {
        Err(IndexError::InternalBug(err)) => {
            assert!(err.description().contains("entry count overflow: 4096"));
            assert!(err.description().contains("(integration_tests::rebuild)"));
        }
        other => panic!("expected an internal bug, got {other:?}"),
    }
    assert!(rebuild(12).is_ok());
}

#[test]
fn application_errors_distinguish_internal_bugs() {
    let plain = IndexError::Unavailable;
    assert_eq!(plain.to_string(), "index store unavailable");

    let bug: IndexError = NonFatalCheckError::with_contact("m", "f.rs", 1, "g", "c").into();
    assert!(bug.to_string().contains("Internal bug detected"));
}
