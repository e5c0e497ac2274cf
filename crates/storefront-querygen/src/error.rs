//! Query builder errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryBuildError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryBuildError {
    #[error("Unsupported expression: {0}")]
    Unsupported(String),

    #[error("Selection set is empty")]
    EmptySelection,
}
