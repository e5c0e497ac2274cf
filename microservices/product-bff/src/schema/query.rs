//! Query root

use std::sync::Arc;

use async_graphql::connection::{self, Connection, Edge};
use async_graphql::{Context, ErrorExtensions, Object, Result};
use storefront_core::{Product, StorefrontError};
use tracing::debug;

use super::filter::ProductFilterInput;
use super::sort::{compare_products, ProductSortInput};
use super::types::{ProductConnectionFields, ProductGql};
use super::PagingOptions;
use crate::infrastructure::ProductSource;

pub type ProductConnection = Connection<usize, ProductGql, ProductConnectionFields>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Products, optionally filtered, sorted and paged
    #[allow(clippy::too_many_arguments)]
    async fn products(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "where")] filter: Option<ProductFilterInput>,
        order: Option<Vec<ProductSortInput>>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<ProductConnection> {
        let source = ctx.data::<Arc<dyn ProductSource>>()?;
        let paging = *ctx.data::<PagingOptions>()?;

        for requested in [first, last].into_iter().flatten() {
            if usize::try_from(requested).map_or(false, |n| n > paging.max_page_size) {
                return Err(validation_error(format!(
                    "Requested page size {} exceeds the maximum of {}",
                    requested, paging.max_page_size
                )));
            }
        }

        let order = order.unwrap_or_default();
        let matched = source.query(
            &|p: &Product| filter.as_ref().map_or(true, |f| f.matches(p)),
            &|a: &Product, b: &Product| compare_products(&order, a, b),
        );
        let total = matched.len();

        debug!(total, ?first, ?last, "Resolving products connection");

        connection::query(
            after,
            before,
            first,
            last,
            |after: Option<usize>, before: Option<usize>, first: Option<usize>, last: Option<usize>| async move {
                let (start, end) = page_window(total, after, before, first, last, paging.default_page_size);

                let mut connection = Connection::with_additional_fields(
                    start > 0,
                    end < total,
                    ProductConnectionFields { total_count: total },
                );
                connection.edges.extend(
                    matched[start..end]
                        .iter()
                        .enumerate()
                        .map(|(offset, product)| Edge::new(start + offset, ProductGql::from(product))),
                );
                Ok::<_, async_graphql::Error>(connection)
            },
        )
        .await
    }

    /// Product with the given id, or null
    async fn product(&self, ctx: &Context<'_>, id: i32) -> Result<Option<ProductGql>> {
        let source = ctx.data::<Arc<dyn ProductSource>>()?;
        Ok(source.get_by_id(id).map(ProductGql::from))
    }
}

/// Half-open `[start, end)` slice of a sequence of `total` items.
///
/// Cursors are item offsets. Without `first` or `last` the page is capped at
/// `default_size` items from the start of the window.
fn page_window(
    total: usize,
    after: Option<usize>,
    before: Option<usize>,
    first: Option<usize>,
    last: Option<usize>,
    default_size: usize,
) -> (usize, usize) {
    let mut start = after.map_or(0, |cursor| cursor.saturating_add(1)).min(total);
    let mut end = before.map_or(total, |cursor| cursor.min(total)).max(start);

    match (first, last) {
        (Some(first), _) => {
            end = end.min(start.saturating_add(first));
            if let Some(last) = last {
                start = start.max(end.saturating_sub(last));
            }
        }
        (None, Some(last)) => start = start.max(end.saturating_sub(last)),
        (None, None) => end = end.min(start.saturating_add(default_size)),
    }

    (start, end)
}

fn validation_error(message: String) -> async_graphql::Error {
    let err = StorefrontError::Validation(message);
    let code = err.error_code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

#[cfg(test)]
mod tests {
    use super::page_window;

    #[test]
    fn test_default_window_caps_page() {
        assert_eq!(page_window(25, None, None, None, None, 10), (0, 10));
        assert_eq!(page_window(2, None, None, None, None, 10), (0, 2));
    }

    #[test]
    fn test_first_after() {
        assert_eq!(page_window(5, Some(0), None, Some(2), None, 10), (1, 3));
        assert_eq!(page_window(5, Some(3), None, Some(5), None, 10), (4, 5));
    }

    #[test]
    fn test_last_before() {
        assert_eq!(page_window(5, None, Some(4), None, Some(2), 10), (2, 4));
        assert_eq!(page_window(5, None, None, None, Some(10), 10), (0, 5));
    }

    #[test]
    fn test_cursor_past_end_is_empty() {
        assert_eq!(page_window(2, Some(7), None, Some(1), None, 10), (2, 2));
        assert_eq!(page_window(2, Some(1), Some(0), None, None, 10), (2, 2));
    }

    #[test]
    fn test_zero_first_is_empty() {
        assert_eq!(page_window(2, None, None, Some(0), None, 10), (0, 0));
    }
}
