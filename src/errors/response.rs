use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::message::ErrorMessage;

/// Structured error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    #[schema(example = "BAD_REQUEST")]
    pub error_code: String,
    /// Human-readable error message
    #[schema(example = "division by zero")]
    pub message: String,
    /// When this response was built (not when the failure happened)
    pub timestamp: DateTime<Utc>,
}

impl From<&ErrorMessage> for ErrorResponse {
    fn from(error_message: &ErrorMessage) -> Self {
        Self {
            error_code: error_message.code().to_string(),
            message: error_message.message().to_string(),
            timestamp: Utc::now(),
        }
    }
}
