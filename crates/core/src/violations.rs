//! Violation report: per-field ordered lists of human-readable messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered mapping from a field key to the messages accumulated for it.
///
/// A field with no violations never appears in the map; an empty report means
/// the candidate passed every rule. Messages for one field keep the order in
/// which they were added (rule-definition order, when filled by a rule set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violations<F: Ord>(BTreeMap<F, Vec<String>>);

impl<F: Ord> Violations<F> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record one violation message for `field`.
    pub fn add(&mut self, field: F, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Messages accumulated for `field`, empty when the field passed.
    pub fn field(&self, field: &F) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `field` has at least one violation.
    pub fn has(&self, field: &F) -> bool {
        self.0.contains_key(field)
    }

    /// True when no field has any violation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &[String])> {
        self.0.iter().map(|(field, messages)| (field, messages.as_slice()))
    }

    /// Fold another report into this one, appending messages per field.
    pub fn merge(&mut self, other: Self) {
        for (field, mut messages) in other.0 {
            self.0.entry(field).or_default().append(&mut messages);
        }
    }
}

impl<F: Ord> Default for Violations<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_has_no_fields() {
        let report: Violations<&str> = Violations::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.field(&"title"), &[] as &[String]);
        assert!(!report.has(&"title"));
    }

    #[test]
    fn messages_keep_insertion_order_per_field() {
        let mut report = Violations::new();
        report.add("title", "can't be blank");
        report.add("title", "must have at least 10 characters");
        report.add("price", "is not a number");

        assert_eq!(
            report.field(&"title"),
            ["can't be blank", "must have at least 10 characters"]
        );
        assert_eq!(report.field(&"price"), ["is not a number"]);
        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
    }

    #[test]
    fn merge_appends_per_field() {
        let mut left = Violations::new();
        left.add("title", "can't be blank");
        let mut right = Violations::new();
        right.add("title", "has already been taken");
        right.add("price", "is not a number");

        left.merge(right);
        assert_eq!(
            left.field(&"title"),
            ["can't be blank", "has already been taken"]
        );
        assert_eq!(left.field(&"price"), ["is not a number"]);
    }

    #[test]
    fn serializes_as_a_map() {
        let mut report = Violations::new();
        report.add("price", "is not a number");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "price": ["is not a number"] }));
    }
}
