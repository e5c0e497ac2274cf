//! Storefront Core - Shared domain types and service infrastructure
//!
//! This crate provides:
//! - Standard service trait all storefront services implement
//! - The product record and its seed data
//! - Error handling utilities
//! - Configuration management

pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use domain::*;
pub use error::{Result, StorefrontError};
pub use service::{DependencyStatus, HealthStatus, MicroserviceRuntime, ReadinessStatus, StorefrontService};
