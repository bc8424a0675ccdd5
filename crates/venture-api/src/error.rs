//! Error types for backend API operations

use thiserror::Error;

/// Result type for backend API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the venture backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request could not be sent or produced no response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    ///
    /// `detail` carries the server-supplied message when the error body
    /// contained one.
    #[error("Backend error (HTTP {status})")]
    Application { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Server-supplied detail message, when the backend provided one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Application { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of an application error
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Application { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Application {
            status: 500,
            detail: Some("Idea is required".to_string()),
        };
        assert_eq!(err.to_string(), "Backend error (HTTP 500)");
        assert_eq!(err.detail(), Some("Idea is required"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_detail_absent_on_other_variants() {
        let err = ApiError::UnexpectedResponse("truncated body".to_string());
        assert_eq!(err.detail(), None);
        assert_eq!(err.status(), None);
    }
}
