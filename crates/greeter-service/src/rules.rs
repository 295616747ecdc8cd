//! Declared field constraints for the greeter request messages.
//!
//! Constraints are evaluated in field declaration order and all violations
//! are collected, so a caller sees every problem in one round trip.

use greeter_validate::{Checker, Validate};

use crate::pb::{Profile, SayHelloBatchRequest, SayHelloRequest};

/// Maximum greeting-name length, in characters.
pub const NAME_MAX_CHARS: usize = 64;

/// Letters (any script), then letters, spaces, periods, apostrophes or
/// hyphens. Matches "Ada", "O'Brien", "Jean-Luc", "Dr. Who".
pub const NAME_PATTERN: &str = r"\p{L}[\p{L} .'\-]*";

/// BCP-47-style language tag: primary subtag plus optional subtags,
/// e.g. "en", "es-MX", "zh-Hant-TW".
pub const LOCALE_PATTERN: &str = r"[A-Za-z]{2,3}(?:-[A-Za-z0-9]{2,8})*";

/// Maximum number of names accepted by SayHelloBatch.
pub const BATCH_MAX_NAMES: usize = 100;

fn check_name(c: &mut Checker, field: &str, value: &str) {
    c.require_str(field, value);
    c.length(field, value, Some(1), Some(NAME_MAX_CHARS));
    c.pattern(field, value, NAME_PATTERN);
}

impl Validate for Profile {
    fn check(&self, c: &mut Checker) {
        // locale is optional; when present it must parse as a language tag
        c.pattern("locale", &self.locale, LOCALE_PATTERN);
        c.range("formality", i64::from(self.formality), Some(0), Some(2));
    }
}

impl Validate for SayHelloRequest {
    fn check(&self, c: &mut Checker) {
        check_name(c, "name", &self.name);
        c.nested("profile", self.profile.as_ref());
    }
}

impl Validate for SayHelloBatchRequest {
    fn check(&self, c: &mut Checker) {
        c.require_repeated("names", &self.names);
        c.max_items("names", &self.names, BATCH_MAX_NAMES);
        c.each("names", &self.names, |c, name| check_name(c, "", name));
        c.nested("profile", self.profile.as_ref());
    }
}
