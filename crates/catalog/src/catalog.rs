//! Validated product collection.

use std::collections::HashSet;

use celestial_core::{DomainError, DomainResult};

use crate::filter::{filter, FilterSpec};
use crate::product::{Product, ProductId};

/// The fixed, externally supplied collection of purchasable products for a
/// session.
///
/// Construction is the one fallible step in this crate: duplicate product ids
/// are rejected at load time so the filter and cart operations downstream can
/// stay total. Iteration order is the supplied order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Matching subset for `spec`, in catalog order. See [`filter`].
    pub fn filter(&self, spec: &FilterSpec) -> Vec<Product> {
        filter(&self.products, spec)
    }
}
