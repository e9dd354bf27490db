//! Cart domain module.
//!
//! This crate contains the cart aggregator: an ordered collection of line
//! items with merge-by-id add, clamped quantity updates, unconditional
//! removal, and derived totals. Pure deterministic domain logic - no IO, no
//! rendering, no storage. Every operation is total: unknown ids are no-ops,
//! never errors.

pub mod cart;
pub mod line_item;

pub use cart::{Cart, CartTotals, FLAT_SHIPPING};
pub use line_item::{CartLineItem, CatalogSelection, ItemKind};
