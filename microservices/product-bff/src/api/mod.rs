//! API module - HTTP routes and GraphQL endpoint

pub mod graphql;
pub mod rest;

use std::sync::Arc;
use std::time::Instant;

use axum::{routing::get, Router};
use storefront_core::{DependencyStatus, HealthStatus, ReadinessStatus};
use storefront_telemetry::{Counter, Gauge, Histogram};

use crate::config::BffConfig;
use crate::infrastructure::{ProductCatalog, ProductSource};
use crate::schema::{build_schema, BffSchema, PagingOptions};

pub const SERVICE_ID: &str = "product-bff";

/// Request metrics for the GraphQL endpoint
#[derive(Clone)]
pub struct RequestMetrics {
    pub requests: Counter,
    pub errors: Counter,
    pub in_flight: Gauge,
    pub latency_ms: Histogram,
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self {
            requests: Counter::new("graphql_requests_total"),
            errors: Counter::new("graphql_errors_total"),
            in_flight: Gauge::new("graphql_in_flight"),
            latency_ms: Histogram::new("graphql_latency_ms"),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: BffConfig,
    pub schema: BffSchema,
    pub catalog: Arc<ProductCatalog>,
    pub metrics: RequestMetrics,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: BffConfig, catalog: ProductCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let source: Arc<dyn ProductSource> = catalog.clone();
        let schema = build_schema(source, PagingOptions::from(&config));

        Self {
            config,
            schema,
            catalog,
            metrics: RequestMetrics::default(),
            start_time: Instant::now(),
        }
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            healthy: true,
            service_id: SERVICE_ID.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    pub fn readiness(&self) -> ReadinessStatus {
        let catalog_loaded = !self.catalog.is_empty();
        ReadinessStatus {
            ready: catalog_loaded,
            dependencies: vec![DependencyStatus {
                name: "product-catalog".to_string(),
                available: catalog_loaded,
                latency_ms: Some(0),
            }],
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let graphql_route = if state.config.enable_playground {
        get(graphql::graphiql).post(graphql::graphql_handler)
    } else {
        axum::routing::post(graphql::graphql_handler)
    };

    Router::new()
        .route("/", get(rest::greeting))
        // Health endpoints
        .route("/health", get(rest::health_check))
        .route("/ready", get(rest::ready_check))
        .route("/metrics", get(rest::metrics))
        // GraphQL endpoint
        .route("/graphql", graphql_route)
        .with_state(state)
}
