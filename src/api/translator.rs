//! Turns failures into HTTP responses.
//!
//! Handlers, the route fallback and the panic hook all hand their [`DemoError`]
//! to [`translate`]; nothing else builds an error body for a failed request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use tracing::{error, warn};

use crate::errors::{DemoError, ErrorCode, ErrorResponse};
use crate::metrics::ERROR_RESPONSES_TOTAL;

/// Map a failure to its status and a freshly timestamped body.
///
/// Business failures are reported as 500 regardless of their code, the way
/// the service has always answered them. Every other kind takes the status
/// its error code declares.
pub fn translate(err: &DemoError) -> (StatusCode, ErrorResponse) {
    let error_message = err.error_message();
    let code = error_message.code();
    let message = error_message.message();

    let status = match err {
        DemoError::Business(_) => {
            warn!(code = %code, message = %message, "Business error occurred");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DemoError::Validation(_) | DemoError::NotFound(_) => {
            warn!(code = %code, message = %message, "Request rejected");
            code_status(error_message.error_code())
        }
        DemoError::System(_) => {
            error!(code = %code, message = %message, "System error occurred");
            code_status(error_message.error_code())
        }
    };

    ERROR_RESPONSES_TOTAL.with_label_values(&[code]).inc();

    (status, ErrorResponse::from(error_message))
}

fn code_status(code: ErrorCode) -> StatusCode {
    StatusCode::from_u16(code.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn error_response(err: &DemoError) -> Response {
    let (status, body) = translate(err);
    (status, Json(body)).into_response()
}

/// Panic hook for `CatchPanicLayer`: a panicking handler still answers with JSON
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);

    error_response(&DemoError::System(
        ErrorCode::InternalServerError.to_error_message(None),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorMessage;

    fn division_by_zero() -> ErrorMessage {
        ErrorMessage::from_override(ErrorCode::BadRequest, "division by zero")
    }

    #[test]
    fn test_business_error_is_internal_server_error() {
        let (status, body) = translate(&DemoError::Business(division_by_zero()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error_code, "BAD_REQUEST");
        assert_eq!(body.message, "division by zero");
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = DemoError::Validation(ErrorMessage::from_override(
            ErrorCode::InvalidInputValue,
            "a: invalid digit found in string",
        ));
        let (status, body) = translate(&err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error_code, "INVALID_INPUT_VALUE");
    }

    #[test]
    fn test_system_error_is_internal_server_error() {
        let err = DemoError::System(ErrorCode::InternalServerError.to_error_message(None));
        let (status, body) = translate(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal server error");
    }

    #[test]
    fn test_not_found_takes_code_status() {
        let (status, body) = translate(&DemoError::NotFound(
            ErrorCode::NotFound.to_error_message(None),
        ));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error_code, "NOT_FOUND");
        assert_eq!(body.message, "Requested resource was not found");

        let (status, _) = translate(&DemoError::NotFound(ErrorMessage::from_default(
            ErrorCode::SurveyNotFound,
        )));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = translate(&DemoError::Validation(ErrorMessage::from_default(
            ErrorCode::SurveyClosed,
        )));
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_translation_counts_error_responses() {
        let counter = ERROR_RESPONSES_TOTAL.with_label_values(&["SURVEY_CLOSED"]);
        let before = counter.get();

        translate(&DemoError::Validation(ErrorMessage::from_default(
            ErrorCode::SurveyClosed,
        )));

        assert!(counter.get() > before);
    }

    #[test]
    fn test_status_ignores_code_for_business_errors() {
        // SURVEY_NOT_FOUND carries a 404 for the other kinds
        let err = DemoError::Business(ErrorMessage::from_default(ErrorCode::SurveyNotFound));
        let (status, _) = translate(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_translation_is_stable_across_calls() {
        let err = DemoError::Business(division_by_zero());
        let (_, first) = translate(&err);
        let (_, second) = translate(&err);
        assert_eq!(first.error_code, second.error_code);
        assert_eq!(first.message, second.message);
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn test_handle_panic() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
