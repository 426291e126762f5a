//! Error model shared by the service and API layers

pub mod codes;
pub mod message;
pub mod response;

pub use codes::ErrorCode;
pub use message::ErrorMessage;
pub use response::ErrorResponse;

use thiserror::Error;

/// A failure raised by application logic. Each variant carries exactly one
/// [`ErrorMessage`] and is consumed once, by the API error translator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    /// Business rule violation raised by a service
    #[error("business error: {0}")]
    Business(ErrorMessage),

    /// Caller input failed validation
    #[error("validation error: {0}")]
    Validation(ErrorMessage),

    /// No resource matched the request
    #[error("not found: {0}")]
    NotFound(ErrorMessage),

    /// Unexpected fault
    #[error("system error: {0}")]
    System(ErrorMessage),
}

impl DemoError {
    pub fn error_message(&self) -> &ErrorMessage {
        match self {
            Self::Business(msg)
            | Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::System(msg) => msg,
        }
    }
}

pub type DemoResult<T> = Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_accessor() {
        let msg = ErrorMessage::from_override(ErrorCode::BadRequest, "division by zero");
        for err in [
            DemoError::Business(msg.clone()),
            DemoError::Validation(msg.clone()),
            DemoError::NotFound(msg.clone()),
            DemoError::System(msg.clone()),
        ] {
            assert_eq!(err.error_message(), &msg);
        }
    }

    #[test]
    fn test_display() {
        let err = DemoError::Business(ErrorMessage::from_override(
            ErrorCode::BadRequest,
            "division by zero",
        ));
        assert_eq!(err.to_string(), "business error: BAD_REQUEST: division by zero");
    }
}
