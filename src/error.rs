//! Error types for the Satchel One client

use thiserror::Error;

/// Satchel One client error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid authentication: {0}")]
    InvalidAuth(String),

    #[error("Invalid credentials for '{username}' at school {school_id}")]
    InvalidCredentials { username: String, school_id: i64 },

    #[error("User not found: {0}")]
    InvalidUser(String),

    #[error("Task not found: {0}")]
    InvalidTask(String),

    #[error("Task {0} is not a detailed task; fetch its detailed version first")]
    TaskNotDetailed(i64),

    #[error("Quiz question {0} is already complete")]
    QuestionAlreadyComplete(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Unexpected response: {message} (status: {status})")]
    UnexpectedResponse { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Create an error from an unexpected response status and body
    pub fn unexpected(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if error is recoverable (worth retrying)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimit => true,
            Self::UnexpectedResponse { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(ApiError::RateLimit.is_recoverable());
        assert!(ApiError::unexpected(503, "maintenance").is_recoverable());
        assert!(!ApiError::unexpected(400, "bad request").is_recoverable());
        assert!(!ApiError::InvalidUser("42".to_string()).is_recoverable());
        assert!(!ApiError::TaskNotDetailed(7).is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::InvalidCredentials {
            username: "alice".to_string(),
            school_id: 1234,
        };
        assert_eq!(
            err.to_string(),
            "Invalid credentials for 'alice' at school 1234"
        );

        let err = ApiError::unexpected(500, "internal error");
        assert!(err.to_string().contains("status: 500"));
    }
}
