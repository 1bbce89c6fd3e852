//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values are
//! considered equal. They should be immutable: to "modify" one, build a new one.

/// Marker trait for value objects.
///
/// Requires:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: compared by attribute values
/// - **Debug**: debuggable in logs and test failures
///
/// A candidate record awaiting validation is a value object: two drafts with
/// identical fields are interchangeable. A stored record with an id is an
/// [`Entity`](crate::Entity), not a value object.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
