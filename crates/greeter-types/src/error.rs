//! Error types for the greeter service.

use thiserror::Error;

/// Machine-readable failure kind surfaced to callers.
///
/// Every failure leaving the request-handling core carries exactly one of
/// these kinds; nothing escapes as an unstructured crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Validation failure; caller can correct the input and retry
    InvalidArgument,
    /// Unrecognized operation name
    NotFound,
    /// Handler or unexpected failure; not recoverable by the caller
    Internal,
}

impl ErrorKind {
    /// Wire name of the kind, e.g. "invalid-argument".
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::NotFound => "not-found",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for greeter operations.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GreeterError {
    /// The machine-readable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GreeterError::InvalidInput(_) => ErrorKind::InvalidArgument,
            GreeterError::NotFound(_) => ErrorKind::NotFound,
            GreeterError::Config(_) | GreeterError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::InvalidArgument.as_str(), "invalid-argument");
        assert_eq!(ErrorKind::NotFound.as_str(), "not-found");
        assert_eq!(ErrorKind::Internal.as_str(), "internal");
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            GreeterError::InvalidInput("x".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            GreeterError::NotFound("x".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            GreeterError::Config("x".to_string()).kind(),
            ErrorKind::Internal
        );
    }
}
