//! Storefront session: the boundary the presentation layer talks to.
//!
//! One [`StorefrontSession`] exists per logical UI session. It owns the
//! immutable catalog supplied at session start and the session's cart, and
//! funnels every mutation through the public operations below - nothing else
//! may touch cart state. All calls are synchronous and run to completion
//! within one UI event; session state vanishes with the session (no
//! persistence).

use tracing::debug;

use celestial_cart::{Cart, CartTotals, CatalogSelection};
use celestial_catalog::{Catalog, FilterSpec, Product, ProductId};

/// Session-scoped storefront state: one catalog handle, one cart.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Catalog,
    cart: Cart,
}

impl StorefrontSession {
    /// Start a session over `catalog` with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The matching catalog subset for `spec`, in catalog order.
    pub fn browse(&self, spec: &FilterSpec) -> Vec<Product> {
        let matched = self.catalog.filter(spec);
        debug!(matched = matched.len(), total = self.catalog.len(), "catalog browse");
        matched
    }

    /// Add one unit of the product with `id` to the cart, capturing its
    /// current catalog name and price. Unknown ids no-op and return `false`
    /// (stale UI state is tolerated, not punished).
    pub fn add_to_cart(&mut self, id: &ProductId) -> bool {
        match self.catalog.get(id) {
            Some(product) => {
                self.cart.add_item(CatalogSelection::from(product));
                debug!(%id, count = self.cart.item_count(), "cart add");
                true
            }
            None => {
                debug!(%id, "cart add ignored: unknown product");
                false
            }
        }
    }

    /// See [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, id: &ProductId, new_quantity: i64) {
        self.cart.update_quantity(id, new_quantity);
        debug!(%id, new_quantity, "cart quantity update");
    }

    /// See [`Cart::remove_item`].
    pub fn remove_item(&mut self, id: &ProductId) {
        self.cart.remove_item(id);
        debug!(%id, remaining = self.cart.len(), "cart remove");
    }

    /// Derived totals for the current cart state.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }
}
