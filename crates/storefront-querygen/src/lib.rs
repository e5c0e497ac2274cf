//! Storefront Query Generator
//!
//! Builds GraphQL query text from typed projections, predicates and
//! orderings so test suites never hand-write query strings.
//!
//! ```ignore
//! let query = QueryBuilder::connection("products")
//!     .select([ProductField::Id, ProductField::Name])
//!     .filter(field(ProductField::Price).gt(10))
//!     .order_by(ProductField::Name, Direction::Desc)
//!     .build()?;
//! ```

mod builder;
mod error;
mod predicate;
mod value;

pub use builder::{GraphQlQuery, QueryBuilder};
pub use error::{QueryBuildError, Result};
pub use predicate::{constant, field, CompareOp, Direction, Operand, Predicate};
pub use value::Constant;

/// A selectable field of a GraphQL object type.
///
/// Implemented by a fieldless enum per entity, e.g. `ProductField`.
pub trait Field: Copy + std::fmt::Debug {
    /// Field name as it appears in the schema
    fn name(&self) -> &'static str;
}
