use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Error codes for structured API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Survey lookup failed (reserved, not raised yet)
    SurveyNotFound,

    /// Survey no longer accepts answers (reserved, not raised yet)
    SurveyClosed,

    /// Request could not be honoured, e.g. a zero divisor
    BadRequest,

    /// Query parameter missing or of the wrong type
    InvalidInputValue,

    /// No route matched the request
    NotFound,

    /// Internal server error
    InternalServerError,
}

impl ErrorCode {
    /// Every registered code, in declaration order
    pub const ALL: [ErrorCode; 6] = [
        Self::SurveyNotFound,
        Self::SurveyClosed,
        Self::BadRequest,
        Self::InvalidInputValue,
        Self::NotFound,
        Self::InternalServerError,
    ];

    /// Stable code string sent to callers
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SurveyNotFound => "SURVEY_NOT_FOUND",
            Self::SurveyClosed => "SURVEY_CLOSED",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidInputValue => "INVALID_INPUT_VALUE",
            Self::NotFound => "NOT_FOUND",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Message used when the caller does not supply one
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::SurveyNotFound => "Survey not found",
            Self::SurveyClosed => "Survey is already closed",
            Self::BadRequest => "Bad request",
            Self::InvalidInputValue => "Invalid input value",
            Self::NotFound => "Requested resource was not found",
            Self::InternalServerError => "Internal server error",
        }
    }

    /// HTTP status for validation, not-found and system failures carrying this code.
    ///
    /// Business failures are always answered with 500 and do not consult this.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest | Self::InvalidInputValue => 400,
            Self::SurveyNotFound | Self::NotFound => 404,
            Self::SurveyClosed => 409,
            Self::InternalServerError => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
