//! Filter inputs for the `products` connection

use async_graphql::{InputObject, InputType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use storefront_core::Product;

pub type UtcDateTime = DateTime<Utc>;

/// Operations on an ordered scalar. Every set operation must hold.
#[derive(Debug, Clone, InputObject)]
#[graphql(concrete(name = "IntOperationFilterInput", params(i32)))]
#[graphql(concrete(name = "DecimalOperationFilterInput", params(Decimal)))]
#[graphql(concrete(name = "DateTimeOperationFilterInput", params(UtcDateTime)))]
pub struct ComparableFilter<T: InputType> {
    pub eq: Option<T>,
    pub neq: Option<T>,
    pub gt: Option<T>,
    pub gte: Option<T>,
    pub lt: Option<T>,
    pub lte: Option<T>,
    #[graphql(name = "in")]
    pub is_in: Option<Vec<T>>,
    pub nin: Option<Vec<T>>,
}

impl<T: InputType + PartialOrd> ComparableFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        self.eq.as_ref().map_or(true, |v| value == v)
            && self.neq.as_ref().map_or(true, |v| value != v)
            && self.gt.as_ref().map_or(true, |v| value > v)
            && self.gte.as_ref().map_or(true, |v| value >= v)
            && self.lt.as_ref().map_or(true, |v| value < v)
            && self.lte.as_ref().map_or(true, |v| value <= v)
            && self.is_in.as_ref().map_or(true, |vs| vs.contains(value))
            && self.nin.as_ref().map_or(true, |vs| !vs.contains(value))
    }
}

pub type IntOperationFilterInput = ComparableFilter<i32>;
pub type DecimalOperationFilterInput = ComparableFilter<Decimal>;
pub type DateTimeOperationFilterInput = ComparableFilter<UtcDateTime>;

/// Operations on a string. Matching is case sensitive.
#[derive(Debug, Clone, Default, InputObject)]
pub struct StringOperationFilterInput {
    pub eq: Option<String>,
    pub neq: Option<String>,
    pub contains: Option<String>,
    pub ncontains: Option<String>,
    pub starts_with: Option<String>,
    pub ends_with: Option<String>,
    #[graphql(name = "in")]
    pub is_in: Option<Vec<String>>,
    pub nin: Option<Vec<String>>,
}

impl StringOperationFilterInput {
    pub fn matches(&self, value: &str) -> bool {
        self.eq.as_deref().map_or(true, |v| value == v)
            && self.neq.as_deref().map_or(true, |v| value != v)
            && self.contains.as_deref().map_or(true, |v| value.contains(v))
            && self.ncontains.as_deref().map_or(true, |v| !value.contains(v))
            && self.starts_with.as_deref().map_or(true, |v| value.starts_with(v))
            && self.ends_with.as_deref().map_or(true, |v| value.ends_with(v))
            && self.is_in.as_ref().map_or(true, |vs| vs.iter().any(|v| v == value))
            && self.nin.as_ref().map_or(true, |vs| vs.iter().all(|v| v != value))
    }
}

/// `where` argument of `products`
#[derive(Debug, Clone, Default, InputObject)]
pub struct ProductFilterInput {
    pub and: Option<Vec<ProductFilterInput>>,
    pub or: Option<Vec<ProductFilterInput>>,
    pub id: Option<IntOperationFilterInput>,
    pub name: Option<StringOperationFilterInput>,
    pub price: Option<DecimalOperationFilterInput>,
    pub created_at: Option<DateTimeOperationFilterInput>,
}

impl ProductFilterInput {
    pub fn matches(&self, product: &Product) -> bool {
        self.and
            .as_ref()
            .map_or(true, |all| all.iter().all(|f| f.matches(product)))
            && self
                .or
                .as_ref()
                .map_or(true, |any| any.iter().any(|f| f.matches(product)))
            && self.id.as_ref().map_or(true, |f| f.matches(&product.id))
            && self.name.as_ref().map_or(true, |f| f.matches(&product.name))
            && self.price.as_ref().map_or(true, |f| f.matches(&product.price))
            && self
                .created_at
                .as_ref()
                .map_or(true, |f| f.matches(&product.created_at))
    }
}
