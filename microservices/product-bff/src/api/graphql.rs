//! GraphQL endpoint

use std::time::Instant;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tracing::debug;

use super::AppState;

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    let operation = request.operation_name.clone();
    let metrics = &state.metrics;

    metrics.requests.inc();
    let in_flight = metrics.in_flight.track();
    let started = Instant::now();

    let response = state.schema.execute(request).await;

    drop(in_flight);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    metrics.latency_ms.record(elapsed_ms);
    if response.is_err() {
        metrics.errors.inc();
    }

    debug!(
        operation = operation.as_deref().unwrap_or("anonymous"),
        elapsed_ms,
        errors = response.errors.len(),
        "GraphQL request executed"
    );

    response.into()
}
