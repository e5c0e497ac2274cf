//! Core domain types used across storefront services

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product. Records are built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: Decimal, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            created_at,
        }
    }
}

/// The fixed product set served by the BFF, in insertion order.
pub fn seed_products(created_at: DateTime<Utc>) -> Vec<Product> {
    vec![
        Product::new(1, "Sample Product", Decimal::new(999, 2), created_at),
        Product::new(2, "Electricity", Decimal::new(1999, 2), created_at),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_seed_products() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let products = seed_products(at);

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Sample Product");
        assert_eq!(products[0].price, dec!(9.99));
        assert_eq!(products[1].id, 2);
        assert_eq!(products[1].name, "Electricity");
        assert_eq!(products[1].price, dec!(19.99));
        assert!(products.iter().all(|p| p.created_at == at));
    }

    #[test]
    fn test_price_serializes_as_string() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(&seed_products(at)[0]).unwrap();
        assert_eq!(json["price"], "9.99");
        assert_eq!(json["name"], "Sample Product");
    }
}
