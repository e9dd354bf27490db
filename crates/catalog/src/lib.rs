//! Catalog domain module.
//!
//! This crate contains the immutable product catalog and the filter engine,
//! implemented purely as deterministic domain logic (no IO, no rendering, no
//! storage). The presentation layer supplies filter specs and renders the
//! matching subset; it never mutates catalog state.

pub mod catalog;
pub mod filter;
pub mod product;
pub mod samples;

pub use catalog::Catalog;
pub use filter::{filter, FilterSpec, PriceRange, Selector, DEFAULT_PRICE_CEILING};
pub use product::{Category, Planet, Product, ProductId};
