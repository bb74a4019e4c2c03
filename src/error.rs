//! The recoverable internal-bug error.

use alloc::{format, string::String};
use core::fmt;

use crate::contact;

/// A recoverable internal-invariant violation.
///
/// Constructed when an internal invariant is violated but the violation is
/// judged survivable. The value is an ordinary typed error: propagate it with
/// `?`, catch it at a suitable boundary, log its description, and continue or
/// degrade gracefully. It never terminates the process by itself. For
/// violations where continued execution is unsafe, use
/// [`assertion_fail`](crate::assertion_fail) instead.
///
/// The diagnostic context (message, file, line, function) is formatted into
/// the description at construction time and not retained separately:
///
/// ```text
/// Internal bug detected: "<message>"
/// <file>:<line> (<function>)
/// Please report this issue here: <bug-report-contact>
/// ```
///
/// Construction is total: it never fails, allocates only the description,
/// and performs no I/O. Empty strings and zero or negative line numbers are
/// formatted verbatim, not validated.
///
/// # Examples
///
/// ```
/// use bugcheck::NonFatalCheckError;
///
/// let err = NonFatalCheckError::with_contact(
///     "txindex out of bounds",
///     "index.rs",
///     118,
///     "lookup",
///     "https://example.org/issues",
/// );
/// assert!(err.description().starts_with("Internal bug detected: \"txindex out of bounds\""));
/// assert!(err.description().contains("index.rs:118 (lookup)"));
/// ```
#[derive(Debug, Clone)]
pub struct NonFatalCheckError {
    description: String,
}

impl NonFatalCheckError {
    /// Creates the error using the globally installed bug-report contact.
    ///
    /// See [`install_bug_report_contact`](crate::install_bug_report_contact);
    /// when nothing has been installed, the description ends with
    /// [`DEFAULT_BUG_REPORT_CONTACT`](crate::DEFAULT_BUG_REPORT_CONTACT).
    #[must_use]
    pub fn new(message: &str, file: &str, line: i32, function: &str) -> Self {
        Self::with_contact(message, file, line, function, contact::bug_report_contact())
    }

    /// Creates the error with an explicit bug-report contact.
    #[must_use]
    pub fn with_contact(
        message: &str,
        file: &str,
        line: i32,
        function: &str,
        contact: &str,
    ) -> Self {
        Self {
            description: format!(
                "Internal bug detected: \"{}\"\n{}:{} ({})\nPlease report this issue here: {}\n",
                message, file, line, function, contact
            ),
        }
    }

    /// The formatted diagnostic carried by this error.
    ///
    /// Identical inputs yield byte-identical descriptions.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for NonFatalCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl core::error::Error for NonFatalCheckError {}
