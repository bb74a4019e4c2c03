//! The fatal assertion handler.

use alloc::{format, string::String};
use std::{
    io::{self, Write},
    process,
};

/// Reports a failed assertion on standard error and aborts the process.
///
/// Writes the line
///
/// ```text
/// <file>:<line> <function>: Assertion `<assertion>' failed.
/// ```
///
/// to standard error and then terminates via [`process::abort`]. The write is
/// best-effort: a short or failed write is not retried and not reported,
/// since there is nothing left to report to. Termination is unconditional and
/// does not unwind, so no destructors or cleanup handlers run; the platform
/// reports the default abort signal/code rather than a normal exit.
///
/// This function never returns. Call it only when a documented invariant has
/// been violated and continued execution is unsafe; for survivable
/// violations, construct a [`NonFatalCheckError`](crate::NonFatalCheckError)
/// instead.
///
/// # Examples
///
/// ```no_run
/// use bugcheck::assertion_fail;
///
/// fn peer_slot(slots: &[u64], index: usize) -> u64 {
///     match slots.get(index) {
///         Some(slot) => *slot,
///         None => assertion_fail(file!(), line!() as i32, "peer_slot", "index < slots.len()"),
///     }
/// }
/// ```
pub fn assertion_fail(file: &str, line: i32, function: &str, assertion: &str) -> ! {
    let diagnostic = format_assertion(file, line, function, assertion);
    let mut stderr = io::stderr().lock();
    let _ = stderr.write_all(diagnostic.as_bytes());
    let _ = stderr.flush();
    process::abort()
}

fn format_assertion(file: &str, line: i32, function: &str, assertion: &str) -> String {
    format!("{}:{} {}: Assertion `{}' failed.\n", file, line, function, assertion)
}
