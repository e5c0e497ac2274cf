//! Product Catalog - immutable in-memory product store

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use storefront_core::{seed_products, Product};

/// Read contract the GraphQL layer queries through.
///
/// Filtering and ordering are supplied by the caller; the source only
/// guarantees insertion order for `list`.
pub trait ProductSource: Send + Sync {
    /// All products in insertion order
    fn list(&self) -> &[Product];

    /// Product with exactly this id, if any
    fn get_by_id(&self, id: i32) -> Option<&Product> {
        self.list().iter().find(|p| p.id == id)
    }

    /// Products accepted by `predicate`, stably sorted by `order`
    fn query(
        &self,
        predicate: &dyn Fn(&Product) -> bool,
        order: &dyn Fn(&Product, &Product) -> Ordering,
    ) -> Vec<Product> {
        let mut matched: Vec<Product> = self.list().iter().filter(|&p| predicate(p)).cloned().collect();
        matched.sort_by(|a, b| order(a, b));
        matched
    }
}

/// Fixed product set shared by all requests
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Arc<[Product]>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Catalog holding the standard seed records
    pub fn seeded(created_at: DateTime<Utc>) -> Self {
        Self::new(seed_products(created_at))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductSource for ProductCatalog {
    fn list(&self) -> &[Product] {
        &self.products
    }
}
