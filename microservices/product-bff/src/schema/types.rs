//! GraphQL output types

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use storefront_core::Product;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Product")]
pub struct ProductGql {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductGql {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            created_at: product.created_at,
        }
    }
}

/// Extra fields on the products connection
#[derive(Debug, Clone, SimpleObject)]
pub struct ProductConnectionFields {
    /// Number of products matching the filter, before paging
    pub total_count: usize,
}
