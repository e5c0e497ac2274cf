//! Plain HTTP handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Map, Value};
use storefront_core::{HealthStatus, ReadinessStatus};

use super::AppState;

pub async fn greeting() -> &'static str {
    "Hello World!"
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.health())
}

pub async fn ready_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessStatus>) {
    let readiness = state.readiness();
    let status = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(readiness))
}

pub async fn metrics(State(state): State<AppState>) -> Json<Value> {
    let m = &state.metrics;
    let mut body = Map::new();
    body.insert(m.requests.name().to_string(), json!(m.requests.get()));
    body.insert(m.errors.name().to_string(), json!(m.errors.get()));
    body.insert(m.in_flight.name().to_string(), json!(m.in_flight.get()));
    body.insert(m.latency_ms.name().to_string(), json!(m.latency_ms.snapshot()));
    Json(Value::Object(body))
}
