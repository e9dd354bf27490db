use serde::{Deserialize, Serialize};

use celestial_catalog::{Category, Product, ProductId};
use celestial_core::{Entity, Money};

/// Kind of a cart entry: a bookable service or a physical gemstone. Drives
/// the line's caption in the presentation layer, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Service,
    Gemstone,
}

impl From<Category> for ItemKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Service => ItemKind::Service,
            _ => ItemKind::Gemstone,
        }
    }
}

/// What a UI "add to cart" click carries across the boundary: the product's
/// identity plus its price as displayed at that moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSelection {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub kind: ItemKind,
    pub image: Option<String>,
}

impl From<&Product> for CatalogSelection {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            kind: ItemKind::from(product.category),
            image: product.image.clone(),
        }
    }
}

/// One entry in the cart: a distinct product id and its requested quantity.
///
/// Name and unit price are captured at first add and persist for the cart
/// session even if the catalog changes; only the quantity is mutable, and
/// only through [`crate::Cart`] operations, which keep it >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    id: ProductId,
    name: String,
    unit_price: Money,
    quantity: u32,
    kind: ItemKind,
    image: Option<String>,
}

impl CartLineItem {
    pub(crate) fn first_of(selection: CatalogSelection) -> Self {
        Self {
            id: selection.id,
            name: selection.name,
            unit_price: selection.unit_price,
            quantity: 1,
            kind: selection.kind,
            image: selection.image,
        }
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn set_quantity_clamped(&mut self, new_quantity: i64) {
        // Floor at 1: decrementing at quantity 1 stays at 1. Removal is a
        // distinct operation, never a side effect of an update.
        self.quantity = new_quantity.max(1).min(u32::MAX as i64) as u32;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// `unit_price × quantity` - the per-line amount the drawer renders.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl Entity for CartLineItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
