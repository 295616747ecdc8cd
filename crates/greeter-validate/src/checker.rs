//! Constraint evaluation with hierarchical field paths.
//!
//! The checker keeps a path stack so nested messages and repeated fields
//! report fully-qualified paths (`profile.locale`, `names[2]`). Evaluators
//! append to the report and return; nothing short-circuits, so a single
//! pass surfaces every violation.

use regex::Regex;

use crate::report::{ValidationReport, Violation};
use crate::Validate;

/// Walks a message's declared constraints, collecting violations.
#[derive(Debug, Default)]
pub struct Checker {
    path: Vec<String>,
    report: ValidationReport,
}

impl Checker {
    /// Create a checker with an empty path and report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the checker, yielding the collected report.
    pub fn into_report(self) -> ValidationReport {
        self.report
    }

    /// Fully-qualified path for a field at the current nesting level.
    fn qualify(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else if field.is_empty() {
            // Repeated-element checks address the current segment itself.
            self.path.join(".")
        } else {
            format!("{}.{}", self.path.join("."), field)
        }
    }

    /// Record a violation on a field at the current nesting level.
    pub fn violation(&mut self, field: &str, reason: impl Into<String>) {
        let path = self.qualify(field);
        self.report.push(Violation::new(path, reason));
    }

    // ===== Constraint evaluators =====

    /// Required string: proto3 scalar presence means non-empty.
    pub fn require_str(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.violation(field, "is required");
        }
    }

    /// Required repeated field: the list must have at least one element.
    pub fn require_repeated<T>(&mut self, field: &str, items: &[T]) {
        if items.is_empty() {
            self.violation(field, "must have at least one element");
        }
    }

    /// Character-length bounds, inclusive. Empty values are skipped so an
    /// unset optional field only trips `require_str`, not every string
    /// constraint stacked on it.
    pub fn length(&mut self, field: &str, value: &str, min: Option<usize>, max: Option<usize>) {
        if value.is_empty() {
            return;
        }
        let len = value.chars().count();
        if let Some(min) = min {
            if len < min {
                self.violation(
                    field,
                    format!("must be at least {} characters, got {}", min, len),
                );
            }
        }
        if let Some(max) = max {
            if len > max {
                self.violation(
                    field,
                    format!("must be at most {} characters, got {}", max, len),
                );
            }
        }
    }

    /// Maximum element count for a repeated field.
    pub fn max_items<T>(&mut self, field: &str, items: &[T], max: usize) {
        if items.len() > max {
            self.violation(
                field,
                format!("must have at most {} elements, got {}", max, items.len()),
            );
        }
    }

    /// Inclusive numeric range.
    pub fn range(&mut self, field: &str, value: i64, min: Option<i64>, max: Option<i64>) {
        if let Some(min) = min {
            if value < min {
                self.violation(field, format!("must be >= {}, got {}", min, value));
            }
        }
        if let Some(max) = max {
            if value > max {
                self.violation(field, format!("must be <= {}, got {}", max, value));
            }
        }
    }

    /// Full-match regex pattern. Empty values are skipped (see `length`).
    ///
    /// A pattern that fails to compile is an internal evaluation error; it
    /// is recorded as a violation on the field rather than panicking or
    /// silently passing the value.
    pub fn pattern(&mut self, field: &str, value: &str, pattern: &str) {
        if value.is_empty() {
            return;
        }
        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(re) => {
                if !re.is_match(value) {
                    self.violation(field, format!("must match pattern {}", pattern));
                }
            }
            Err(e) => {
                self.violation(field, format!("constraint could not be evaluated: {}", e));
            }
        }
    }

    // ===== Composition =====

    /// Descend into an optional nested message. Absent messages pass; use
    /// `require_message` first when presence itself is mandatory.
    pub fn nested<T: Validate>(&mut self, field: &str, message: Option<&T>) {
        if let Some(message) = message {
            self.path.push(field.to_string());
            message.check(self);
            self.path.pop();
        }
    }

    /// Required nested message: presence is mandatory.
    pub fn require_message<T>(&mut self, field: &str, message: Option<&T>) {
        if message.is_none() {
            self.violation(field, "is required");
        }
    }

    /// Evaluate each element of a repeated field with an indexed path
    /// segment (`names[0]`, `names[1]`, ...).
    pub fn each<T>(&mut self, field: &str, items: &[T], mut f: impl FnMut(&mut Checker, &T)) {
        for (i, item) in items.iter().enumerate() {
            self.path.push(format!("{}[{}]", field, i));
            f(self, item);
            self.path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inner {
        tag: String,
    }

    impl Validate for Inner {
        fn check(&self, c: &mut Checker) {
            c.require_str("tag", &self.tag);
            c.length("tag", &self.tag, Some(2), Some(8));
        }
    }

    struct Outer {
        name: String,
        count: i64,
        inner: Option<Inner>,
        labels: Vec<String>,
    }

    impl Validate for Outer {
        fn check(&self, c: &mut Checker) {
            c.require_str("name", &self.name);
            c.length("name", &self.name, Some(1), Some(10));
            c.pattern("name", &self.name, "[a-z]+");
            c.range("count", self.count, Some(0), Some(5));
            c.nested("inner", self.inner.as_ref());
            c.each("labels", &self.labels, |c, label| {
                c.require_str("", label);
                c.length("", label, None, Some(4));
            });
        }
    }

    fn valid_outer() -> Outer {
        Outer {
            name: "hello".to_string(),
            count: 3,
            inner: Some(Inner {
                tag: "abc".to_string(),
            }),
            labels: vec!["ok".to_string()],
        }
    }

    #[test]
    fn test_valid_message_empty_report() {
        let report = valid_outer().validate();
        assert!(report.is_valid(), "unexpected: {}", report);
    }

    #[test]
    fn test_missing_required_field_named() {
        let mut msg = valid_outer();
        msg.name = String::new();
        let report = msg.validate();
        assert!(!report.is_valid());
        assert_eq!(report.violations()[0].field, "name");
        assert_eq!(report.violations()[0].reason, "is required");
    }

    #[test]
    fn test_all_violations_collected_in_order() {
        let msg = Outer {
            name: "HELLO WORLD!".to_string(), // too long + pattern mismatch
            count: 9,                         // out of range
            inner: Some(Inner { tag: "x".to_string() }), // too short
            labels: vec!["toolong".to_string()],
        };
        let report = msg.validate();
        let fields: Vec<&str> = report
            .violations()
            .iter()
            .map(|v| v.field.as_str())
            .collect();
        assert_eq!(
            fields,
            vec!["name", "name", "count", "inner.tag", "labels[0]"]
        );
    }

    #[test]
    fn test_nested_path_qualified() {
        let msg = Outer {
            inner: Some(Inner {
                tag: String::new(),
            }),
            ..valid_outer()
        };
        let report = msg.validate();
        assert_eq!(report.violations()[0].field, "inner.tag");
    }

    #[test]
    fn test_repeated_elements_indexed() {
        let msg = Outer {
            labels: vec!["ok".to_string(), String::new(), "overly".to_string()],
            ..valid_outer()
        };
        let report = msg.validate();
        let fields: Vec<&str> = report
            .violations()
            .iter()
            .map(|v| v.field.as_str())
            .collect();
        assert_eq!(fields, vec!["labels[1]", "labels[2]"]);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let mut c = Checker::new();
        c.range("n", 0, Some(0), Some(5));
        c.range("n", 5, Some(0), Some(5));
        assert!(c.into_report().is_valid());
    }

    #[test]
    fn test_bad_pattern_becomes_violation_not_panic() {
        let mut c = Checker::new();
        c.pattern("name", "value", "([unclosed");
        let report = c.into_report();
        assert!(!report.is_valid());
        assert_eq!(report.violations()[0].field, "name");
        assert!(report.violations()[0]
            .reason
            .contains("could not be evaluated"));
    }

    #[test]
    fn test_pattern_is_full_match() {
        let mut c = Checker::new();
        c.pattern("name", "abc!", "[a-z]+");
        assert!(!c.into_report().is_valid());
    }

    #[test]
    fn test_empty_value_skips_length_and_pattern() {
        let mut c = Checker::new();
        c.length("name", "", Some(1), Some(5));
        c.pattern("name", "", "[a-z]+");
        assert!(c.into_report().is_valid());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let mut c = Checker::new();
        c.length("name", "héllo", None, Some(5));
        assert!(c.into_report().is_valid());
    }

    #[test]
    fn test_require_repeated_and_max_items() {
        let mut c = Checker::new();
        let empty: Vec<String> = vec![];
        c.require_repeated("names", &empty);
        c.max_items("names", &["a"; 3], 2);
        let report = c.into_report();
        assert_eq!(report.violations().len(), 2);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let a = valid_outer().validate();
        let b = valid_outer().validate();
        assert_eq!(a, b);
    }
}
