/// Checks a survivable invariant, returning early with a
/// [`NonFatalCheckError`] when it does not hold.
///
/// The condition is evaluated exactly once. When it is `false`, the enclosing
/// function returns `Err(NonFatalCheckError.into())`, so the macro can be
/// used in any function whose error type implements
/// `From<NonFatalCheckError>`. The diagnostic carries the stringified
/// condition (or, in the second form, a message built with the same
/// arguments as [`format!`]) together with the file, line, and enclosing
/// function captured at the call site.
///
/// This is the recoverable counterpart of [`assert_abort!`]: the process
/// keeps running, and some caller up the stack is expected to log the
/// description and continue or degrade gracefully.
///
/// [`NonFatalCheckError`]: crate::NonFatalCheckError
/// [`format!`]: alloc::format
///
/// # Examples
///
/// ```
/// use bugcheck::{NonFatalCheckError, check_nonfatal};
///
/// fn median(samples: &[u32]) -> Result<u32, NonFatalCheckError> {
///     check_nonfatal!(!samples.is_empty());
///     Ok(samples[samples.len() / 2])
/// }
///
/// let err = median(&[]).unwrap_err();
/// assert!(err.description().contains("!samples.is_empty()"));
/// ```
///
/// With a formatted message:
///
/// ```
/// use bugcheck::{NonFatalCheckError, check_nonfatal};
///
/// fn connect(slots_in_use: usize, capacity: usize) -> Result<(), NonFatalCheckError> {
///     check_nonfatal!(
///         slots_in_use <= capacity,
///         "slot accounting drifted: {} in use, capacity {}",
///         slots_in_use,
///         capacity,
///     );
///     Ok(())
/// }
///
/// let err = connect(9, 8).unwrap_err();
/// assert!(err.description().contains("slot accounting drifted: 9 in use, capacity 8"));
/// ```
#[macro_export]
macro_rules! check_nonfatal {
    ($cond:expr $(,)?) => {
        if !$cond {
            return $crate::__private::Err(
                $crate::NonFatalCheckError::new(
                    $crate::__private::stringify!($cond),
                    $crate::__private::file!(),
                    $crate::__private::line!() as i32,
                    $crate::function_path!(),
                )
                .into(),
            );
        }
    };
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            let message = $crate::__private::format!($($arg)*);
            return $crate::__private::Err(
                $crate::NonFatalCheckError::new(
                    &message,
                    $crate::__private::file!(),
                    $crate::__private::line!() as i32,
                    $crate::function_path!(),
                )
                .into(),
            );
        }
    };
}

/// Checks an invariant whose violation makes continued execution unsafe,
/// aborting the process when it does not hold.
///
/// The condition is evaluated exactly once. When it is `false`, the macro
/// calls [`assertion_fail`](crate::assertion_fail) with the stringified
/// condition and the file, line, and enclosing function captured at the call
/// site: a diagnostic line is written to standard error and the process
/// aborts without unwinding. There is no way to recover; use
/// [`check_nonfatal!`] for survivable violations.
///
/// # Examples
///
/// ```no_run
/// use bugcheck::assert_abort;
///
/// fn commit(journal_sealed: bool) {
///     assert_abort!(journal_sealed);
///     // ...
/// }
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! assert_abort {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::assertion_fail(
                $crate::__private::file!(),
                $crate::__private::line!() as i32,
                $crate::function_path!(),
                $crate::__private::stringify!($cond),
            );
        }
    };
}

/// Checks an invariant that is assumed to hold, aborting only in builds with
/// debug assertions.
///
/// The condition is evaluated exactly once in every build, so side effects
/// are preserved. In builds with debug assertions a `false` condition aborts
/// via [`assertion_fail`](crate::assertion_fail), exactly like
/// [`assert_abort!`]; in release builds the result is discarded and
/// execution continues.
///
/// # Examples
///
/// ```
/// use bugcheck::assume;
///
/// fn record(samples: &mut Vec<u32>, value: u32) {
///     assume!(samples.len() < u32::MAX as usize);
///     samples.push(value);
/// }
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! assume {
    ($cond:expr $(,)?) => {
        if !$cond && cfg!(debug_assertions) {
            $crate::assertion_fail(
                $crate::__private::file!(),
                $crate::__private::line!() as i32,
                $crate::function_path!(),
                $crate::__private::stringify!($cond),
            );
        }
    };
}

/// Expands to the path of the enclosing function as a `&'static str`.
///
/// Used by the checking macros to put the enclosing function into the
/// diagnostic. For checks inside closures or async blocks the rendered path
/// includes the compiler's closure segments.
///
/// # Examples
///
/// ```
/// mod peers {
///     pub fn handshake() -> &'static str {
///         bugcheck::function_path!()
///     }
/// }
///
/// assert!(peers::handshake().ends_with("peers::handshake"));
/// ```
#[macro_export]
macro_rules! function_path {
    () => {{
        fn here() {}
        let name = $crate::__private::type_name_of_val(&here);
        name.strip_suffix("::here").unwrap_or(name)
    }};
}
