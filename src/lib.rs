#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Internal-bug reporting with a uniform diagnostic convention.
//!
//! ## Overview
//!
//! This crate provides two small facilities for codebases that want to
//! distinguish survivable internal bugs from unsurvivable ones:
//!
//! - [`NonFatalCheckError`] — a **recoverable** invariant-violation error. It
//!   is an ordinary error value carrying a formatted diagnostic (message,
//!   source location, enclosing function, and a bug-report contact).
//!   Construction never fails and has no side effects; callers propagate it
//!   with `?`, catch it at a suitable boundary, log it, and keep running.
//! - [`assertion_fail`] — a **fatal** assertion handler. It writes a single
//!   diagnostic line to standard error and aborts the process without
//!   unwinding. It never returns: invoking it means a documented invariant
//!   has already been violated and continued execution is unsafe.
//!
//! The [`check_nonfatal!`], [`assert_abort!`], and [`assume!`] macros capture
//! the call site (file, line, enclosing function) so that both paths produce
//! diagnostics pointing at the violated check rather than at this crate.
//!
//! ## Quick Example
//!
//! ```
//! use bugcheck::{NonFatalCheckError, check_nonfatal};
//!
//! fn settle(balance: i64) -> Result<i64, NonFatalCheckError> {
//!     check_nonfatal!(balance >= 0, "balance went negative: {}", balance);
//!     Ok(balance)
//! }
//!
//! let err = settle(-3).unwrap_err();
//! assert!(err.description().contains("balance went negative: -3"));
//! assert!(settle(7).is_ok());
//! ```
//!
//! ## Bug-report contact
//!
//! The non-fatal diagnostic ends with a line pointing the reader at the
//! project's issue tracker. Install it once at startup:
//!
//! ```
//! bugcheck::install_bug_report_contact("https://github.com/acme/widgets/issues");
//! ```
//!
//! Code that needs to stay independent of the global installation (tests,
//! libraries embedded in several applications) can pass the contact
//! explicitly via [`NonFatalCheckError::with_contact`].
//!
//! ## Feature Flags
//!
//! The crate is `no_std + alloc` by default. The `std` feature (enabled by
//! default) provides [`assertion_fail`] and the macros built on it, which
//! need standard error and [`std::process::abort`].

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod contact;
mod error;
#[cfg(feature = "std")]
mod fatal;

pub use self::{
    contact::{DEFAULT_BUG_REPORT_CONTACT, bug_report_contact, install_bug_report_contact},
    error::NonFatalCheckError,
};
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use self::fatal::assertion_fail;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use alloc::format;
    #[doc(hidden)]
    pub use core::{any::type_name_of_val, file, line, result::Result::Err, stringify};
}
