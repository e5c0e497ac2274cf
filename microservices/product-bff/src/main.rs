//! Product BFF Microservice
//!
//! Backend-for-frontend exposing the product catalog over GraphQL:
//! - `products` connection with filtering, sorting and cursor paging
//! - `product(id:)` lookup
//! - GraphiQL playground, health, readiness and metrics endpoints

use std::sync::Arc;

use chrono::Utc;
use storefront_core::{
    HealthStatus, MicroserviceRuntime, ReadinessStatus, Result, ServiceConfig, StorefrontError,
    StorefrontService,
};
use tracing::info;

mod api;
mod config;
mod infrastructure;
mod schema;


pub use config::BffConfig;
use api::AppState;
use infrastructure::ProductCatalog;

#[tokio::main]
async fn main() -> Result<()> {
    let service_config = ServiceConfig::from_env();
    storefront_telemetry::init(&service_config.service_name)
        .map_err(|e| StorefrontError::Internal(e.to_string()))?;

    info!("Starting Product BFF");

    let config = BffConfig::from_env()?;
    let service = Arc::new(ProductBffService::new(config));
    MicroserviceRuntime::new(service_config).run(service).await
}

pub struct ProductBffService {
    state: AppState,
}

impl ProductBffService {
    pub fn new(config: BffConfig) -> Self {
        let catalog = ProductCatalog::seeded(Utc::now());
        info!(products = catalog.len(), "Product catalog seeded");

        Self {
            state: AppState::new(config, catalog),
        }
    }
}

#[async_trait::async_trait]
impl StorefrontService for ProductBffService {
    fn service_id(&self) -> &'static str {
        api::SERVICE_ID
    }

    async fn health(&self) -> HealthStatus {
        self.state.health()
    }

    async fn ready(&self) -> ReadinessStatus {
        self.state.readiness()
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down Product BFF");
        Ok(())
    }

    async fn start(&self) -> Result<()> {
        info!(
            http = %self.state.config.http_bind,
            playground = self.state.config.enable_playground,
            "Starting Product BFF server"
        );

        let app = api::create_router(self.state.clone());

        let listener = tokio::net::TcpListener::bind(&self.state.config.http_bind).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
