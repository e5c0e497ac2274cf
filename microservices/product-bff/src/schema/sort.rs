//! Sort inputs for the `products` connection

use std::cmp::Ordering;

use async_graphql::{Enum, InputObject};
use storefront_core::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SortEnumType {
    Asc,
    Desc,
}

/// One entry of the `order` argument. Set fields apply in declaration order.
#[derive(Debug, Clone, Default, InputObject)]
pub struct ProductSortInput {
    pub id: Option<SortEnumType>,
    pub name: Option<SortEnumType>,
    pub price: Option<SortEnumType>,
    pub created_at: Option<SortEnumType>,
}

impl ProductSortInput {
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        directed(self.id, || a.id.cmp(&b.id))
            .then_with(|| directed(self.name, || a.name.cmp(&b.name)))
            .then_with(|| directed(self.price, || a.price.cmp(&b.price)))
            .then_with(|| directed(self.created_at, || a.created_at.cmp(&b.created_at)))
    }
}

fn directed(direction: Option<SortEnumType>, cmp: impl FnOnce() -> Ordering) -> Ordering {
    match direction {
        None => Ordering::Equal,
        Some(SortEnumType::Asc) => cmp(),
        Some(SortEnumType::Desc) => cmp().reverse(),
    }
}

/// Compare by each entry of `order` in turn
pub fn compare_products(order: &[ProductSortInput], a: &Product, b: &Product) -> Ordering {
    order
        .iter()
        .fold(Ordering::Equal, |acc, key| acc.then_with(|| key.compare(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use storefront_core::seed_products;

    fn sorted(order: &[ProductSortInput]) -> Vec<String> {
        let mut products = seed_products(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        products.sort_by(|a, b| compare_products(order, a, b));
        products.into_iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_no_order_keeps_insertion_order() {
        assert_eq!(sorted(&[]), vec!["Sample Product", "Electricity"]);
    }

    #[test]
    fn test_name_descending() {
        let order = [ProductSortInput {
            name: Some(SortEnumType::Desc),
            ..Default::default()
        }];
        assert_eq!(sorted(&order), vec!["Sample Product", "Electricity"]);
    }

    #[test]
    fn test_name_ascending() {
        let order = [ProductSortInput {
            name: Some(SortEnumType::Asc),
            ..Default::default()
        }];
        assert_eq!(sorted(&order), vec!["Electricity", "Sample Product"]);
    }

    #[test]
    fn test_secondary_key_breaks_ties() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut products = vec![
            Product::new(1, "B", dec!(5), at),
            Product::new(2, "A", dec!(5), at),
            Product::new(3, "C", dec!(1), at),
        ];
        let order = [
            ProductSortInput {
                price: Some(SortEnumType::Desc),
                ..Default::default()
            },
            ProductSortInput {
                name: Some(SortEnumType::Asc),
                ..Default::default()
            },
        ];
        products.sort_by(|a, b| compare_products(&order, a, b));
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
