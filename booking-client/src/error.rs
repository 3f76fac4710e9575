//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error reported by the booking service
    #[error("Validation error: {0}")]
    Validation(String),

    /// Structured error from the booking service
    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    /// Remote call reached the service but it reported failure
    #[error("{0}")]
    Rejected(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Map to the unified error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::NotFound(_) => ErrorCode::BookingNotFound,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Api { code, .. } => {
                ErrorCode::try_from(*code).unwrap_or(ErrorCode::UpstreamError)
            }
            Self::InvalidConfig(_) => ErrorCode::ConfigError,
            Self::InvalidResponse(_)
            | Self::Unauthorized(_)
            | Self::Rejected(_)
            | Self::Internal(_)
            | Self::Serialization(_) => ErrorCode::UpstreamError,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ClientError::NotFound("b-1".into()).code(),
            ErrorCode::BookingNotFound
        );
        assert_eq!(
            ClientError::Rejected("locked".into()).code(),
            ErrorCode::UpstreamError
        );
        assert_eq!(
            ClientError::Api {
                code: 1001,
                message: "nope".into()
            }
            .code(),
            ErrorCode::InvalidTransition
        );
        assert_eq!(
            ClientError::Api {
                code: 31337,
                message: "?".into()
            }
            .code(),
            ErrorCode::UpstreamError
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = ClientError::Rejected("Booking is locked".into()).into();
        assert_eq!(err.code, ErrorCode::UpstreamError);
        assert_eq!(err.message, "Booking is locked");
    }
}
