//! # greeter-validate
//!
//! Field-constraint validation for decoded protocol messages.
//!
//! A message type declares its constraints by implementing [`Validate`];
//! the [`Checker`] walks them in declaration order and collects **every**
//! violation instead of stopping at the first one, so a caller can fix a
//! bad request in a single round trip.
//!
//! Constraint evaluation never panics: an internal evaluation error (for
//! example an unparseable pattern) is recorded as a violation on the
//! offending field.
//!
//! # Example
//!
//! ```rust
//! use greeter_validate::{Checker, Validate, ValidationReport};
//!
//! struct Hello {
//!     name: String,
//! }
//!
//! impl Validate for Hello {
//!     fn check(&self, c: &mut Checker) {
//!         c.require_str("name", &self.name);
//!         c.length("name", &self.name, Some(1), Some(64));
//!     }
//! }
//!
//! let report = Hello { name: String::new() }.validate();
//! assert!(!report.is_valid());
//! assert_eq!(report.violations()[0].field, "name");
//! ```

pub mod checker;
pub mod report;

pub use checker::Checker;
pub use report::{ValidationReport, Violation};

/// A message type with declared field constraints.
///
/// `check` walks the fields in declaration order; nested message types
/// implement `Validate` themselves and compose via [`Checker::nested`].
pub trait Validate {
    /// Evaluate this message's constraints into the checker.
    fn check(&self, checker: &mut Checker);

    /// Validate the message, collecting all violations.
    fn validate(&self) -> ValidationReport {
        let mut checker = Checker::new();
        self.check(&mut checker);
        checker.into_report()
    }
}
