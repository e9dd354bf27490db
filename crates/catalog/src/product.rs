use serde::{Deserialize, Serialize};

use celestial_core::{Entity, Money};

/// Product identifier (catalog-supplied, unique within a catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Planetary association of a product (catalog-only display tag, also a
/// filter dimension). Bookable services carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    pub const ALL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];
}

/// Product category. `Service` marks bookable offerings (readings,
/// consultations); the rest are physical stones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Crystal,
    Precious,
    SemiPrecious,
    Birthstone,
    Service,
}

/// A purchasable catalog record. Immutable for the lifetime of a session;
/// owned by the catalog, never by the cart.
///
/// `rating` and `weight_carat` are display-only and absent for services;
/// `duration` is present only for services. None of them participate in
/// filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Price in the single reference currency.
    pub price: Money,
    pub category: Category,
    pub planet: Option<Planet>,
    /// Customer rating, 0.0–5.0.
    pub rating: Option<f32>,
    pub weight_carat: Option<f32>,
    pub duration: Option<String>,
    pub image: Option<String>,
}

impl Product {
    pub fn is_service(&self) -> bool {
        self.category == Category::Service
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
