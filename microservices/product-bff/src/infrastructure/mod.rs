//! Infrastructure module

pub mod product_catalog;

pub use product_catalog::{ProductCatalog, ProductSource};
