//! Global bug-report contact used by the non-fatal diagnostic template.
//!
//! Rather than baking the contact into the binary at build time, it is an
//! explicit runtime installation, so the error type stays testable without
//! rebuilding: applications call
//! [`install_bug_report_contact`] once during startup, and every
//! [`NonFatalCheckError`](crate::NonFatalCheckError) constructed afterwards
//! picks it up.

#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

/// Contact rendered when no contact has been installed.
///
/// Deliberately conspicuous: a diagnostic pointing at this placeholder means
/// the embedding application forgot to call [`install_bug_report_contact`].
pub const DEFAULT_BUG_REPORT_CONTACT: &str = "<no bug report contact configured>";

static BUG_REPORT_CONTACT: ContactLock = ContactLock::new();

#[repr(transparent)]
struct ContactLock(impl_::RwLock<Option<&'static str>>);

impl ContactLock {
    const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    #[inline]
    fn get(&'static self) -> Option<&'static str> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        #[cfg(feature = "std")]
        let guard = self.0.read().expect("Unable to acquire contact lock");

        *guard
    }

    #[inline]
    fn replace(&'static self, contact: Option<&'static str>) -> Option<&'static str> {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self.0.write().expect("Unable to acquire contact lock");

        core::mem::replace(&mut *guard, contact)
    }
}

/// Installs the bug-report contact globally, returning the previously
/// installed contact, if any.
///
/// Callable from any thread; when several threads race, the last installer
/// wins. Typically called exactly once during application startup.
///
/// # Examples
///
/// ```
/// bugcheck::install_bug_report_contact("https://github.com/acme/widgets/issues");
///
/// let err = bugcheck::NonFatalCheckError::new("cache desync", "cache.rs", 10, "refresh");
/// assert!(
///     err.description()
///         .contains("https://github.com/acme/widgets/issues")
/// );
/// ```
pub fn install_bug_report_contact(contact: &'static str) -> Option<&'static str> {
    BUG_REPORT_CONTACT.replace(Some(contact))
}

/// The globally installed bug-report contact, or
/// [`DEFAULT_BUG_REPORT_CONTACT`] when none has been installed.
#[must_use]
pub fn bug_report_contact() -> &'static str {
    BUG_REPORT_CONTACT.get().unwrap_or(DEFAULT_BUG_REPORT_CONTACT)
}
