use std::fmt;

use super::codes::ErrorCode;

/// A concrete code/message pair attached to one failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    code: ErrorCode,
    message: String,
}

impl ErrorMessage {
    /// Use the registry's default message for `code`
    pub fn from_default(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
        }
    }

    /// Keep the code of `code` but report `message` instead of its default
    pub fn from_override(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        self.code
    }

    pub fn code(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ErrorCode {
    /// Build an [`ErrorMessage`], overriding the default message when one is given
    pub fn to_error_message(self, message: Option<&str>) -> ErrorMessage {
        match message {
            Some(message) => ErrorMessage::from_override(self, message),
            None => ErrorMessage::from_default(self),
        }
    }
}
