use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use utoipa::ToSchema;

use super::translator::error_response;
use crate::errors::{DemoError, ErrorCode, ErrorResponse};
use crate::service::DivideService;

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub divide_service: DivideService,
    pub instance_id: String,
}

/// Divide query parameters
#[derive(Debug, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DivideParams {
    /// Dividend
    pub a: i32,
    /// Divisor (must not be zero)
    pub b: i32,
}

/// Successful division result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DivideResponse {
    /// Dividend as received
    pub a: i32,
    /// Divisor as received
    pub b: i32,
    /// Quotient
    pub result: f64,
    /// Always null; failures are answered with an ErrorResponse instead
    pub error: Option<String>,
}

impl DivideResponse {
    pub fn success(a: i32, b: i32, result: f64) -> Self {
        Self {
            a,
            b,
            result,
            error: None,
        }
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "divide-demo",
        "version": env!("CARGO_PKG_VERSION"),
        "instance_id": state.instance_id,
        "division_mode": state.divide_service.mode().to_string(),
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// Greeting endpoint
#[utoipa::path(
    get,
    path = "/hello",
    tag = "demo",
    responses(
        (status = 200, description = "Plain-text greeting", body = String)
    )
)]
pub async fn hello() -> &'static str {
    "Hello from Rust!"
}

/// Divide two integers
#[utoipa::path(
    get,
    path = "/divide",
    tag = "demo",
    params(DivideParams),
    responses(
        (status = 200, description = "Quotient of a and b", body = DivideResponse),
        (status = 400, description = "Missing or non-integer parameter", body = ErrorResponse),
        (status = 500, description = "Division failed, e.g. b = 0", body = ErrorResponse)
    )
)]
pub async fn divide(
    State(state): State<AppState>,
    params: Result<Query<DivideParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(DivideParams { a, b }) = match params {
        Ok(params) => params,
        Err(rejection) => {
            let detail = rejection.body_text();
            return error_response(&DemoError::Validation(
                ErrorCode::InvalidInputValue.to_error_message(Some(detail.as_str())),
            ));
        }
    };

    info!("Divide request: a={}, b={}", a, b);

    match state.divide_service.divide(a, b) {
        Ok(result) => {
            (StatusCode::OK, Json(DivideResponse::success(a, b, result))).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    warn!("No handler found for {}", uri.path());
    error_response(&DemoError::NotFound(
        ErrorCode::NotFound.to_error_message(None),
    ))
}
