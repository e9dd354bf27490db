//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - they represent
/// concepts where identity doesn't matter, only the values do. To "modify" a
/// value object, create a new one with the new values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two with the same values are equal),
///   e.g. `Money::from_cents(4500)`.
/// - **Entity**: has identity (two entities with the same id are the same
///   entity), e.g. a cart line item whose quantity changes over time.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy (they're values, not references)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
