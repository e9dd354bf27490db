//! Filter engine: pure, deterministic subset selection over a catalog.

use serde::{Deserialize, Serialize};

use celestial_core::Money;

use crate::product::{Category, Planet, Product};

/// Upper bound of the reset-state price range ($1000.00).
pub const DEFAULT_PRICE_CEILING: Money = Money::from_major(1000);

/// A single filter dimension: either wide open or pinned to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Does this selector admit the given value?
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(only) => only == value,
        }
    }

    /// `admits` over an optional tag. `All` admits everything, including
    /// products without the tag; `Only` requires the tag to be present and
    /// equal.
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(only) => value == Some(only),
        }
    }
}

/// Inclusive price range. An inverted range (`min > max`) contains nothing,
/// so a malformed spec matches no products rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Money::ZERO,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

/// Filter specification: planet, category, and price range combined with AND.
///
/// Transient - the presentation layer rebuilds one per filter interaction and
/// discards it afterwards. `FilterSpec::default()` is the reset state
/// (all planets, all categories, $0–$1000).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub planet: Selector<Planet>,
    pub category: Selector<Category>,
    pub price: PriceRange,
}

impl FilterSpec {
    pub fn matches(&self, product: &Product) -> bool {
        self.planet.admits_opt(product.planet.as_ref())
            && self.category.admits(&product.category)
            && self.price.contains(product.price)
    }
}

/// Produce the matching subset of `products`, preserving relative order.
///
/// Never mutates its input and never fails: no match yields an empty vec, and
/// the caller presents a "no results" state with a reset-to-defaults action.
pub fn filter(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    products.iter().filter(|p| spec.matches(p)).cloned().collect()
}
