use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Middleware to log all HTTP requests and responses with structured data
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or("").to_string();
    let user_agent = request
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = %query,
        user_agent = %user_agent,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();
    let outcome = outcome(status);

    if status.is_success() {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "{}", outcome
        );
    } else {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "{}", outcome
        );
    }

    response
}

fn outcome(status: axum::http::StatusCode) -> &'static str {
    if status.is_success() {
        "Request completed"
    } else if status.is_client_error() {
        "Request failed (client error)"
    } else if status.is_server_error() {
        "Request failed (server error)"
    } else {
        "Request finished"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_outcome() {
        assert_eq!(outcome(StatusCode::OK), "Request completed");
        assert_eq!(outcome(StatusCode::BAD_REQUEST), "Request failed (client error)");
        assert_eq!(outcome(StatusCode::NOT_FOUND), "Request failed (client error)");
        assert_eq!(
            outcome(StatusCode::INTERNAL_SERVER_ERROR),
            "Request failed (server error)"
        );
        assert_eq!(outcome(StatusCode::MOVED_PERMANENTLY), "Request finished");
    }
}
