//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is defined by its identifier, not by its attribute values: a cart
/// line item keeps its identity while its quantity changes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
