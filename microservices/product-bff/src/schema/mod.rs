//! GraphQL schema for the product BFF

pub mod filter;
pub mod query;
pub mod sort;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::config::BffConfig;
use crate::infrastructure::ProductSource;

pub use query::QueryRoot;

pub type BffSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Page size limits applied to connection fields
#[derive(Debug, Clone, Copy)]
pub struct PagingOptions {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl From<&BffConfig> for PagingOptions {
    fn from(config: &BffConfig) -> Self {
        Self {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }
}

/// Build the executable schema over a product source
pub fn build_schema(source: Arc<dyn ProductSource>, paging: PagingOptions) -> BffSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(source)
        .data(paging)
        .finish()
}
