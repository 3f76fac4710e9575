//! Booking desk errors
//!
//! All variants are recoverable: the operator sees the condition and the
//! booking is left untouched.

use booking_client::ClientError;
use shared::{AppError, BookingStatus, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Cannot change status from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("A cancellation reason is required")]
    MissingReason,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The booking service call failed or reported failure
    #[error("{0}")]
    Api(String),
}

impl BookingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            Self::MissingReason => ErrorCode::MissingReason,
            Self::InvalidAmount(_) => ErrorCode::InvalidAmount,
            Self::Api(_) => ErrorCode::UpstreamError,
        }
    }
}

impl From<ClientError> for BookingError {
    fn from(err: ClientError) -> Self {
        match err {
            // The service's own wording is what the operator should read
            ClientError::Rejected(message) | ClientError::Api { message, .. } => {
                Self::Api(message)
            }
            other => Self::Api(other.to_string()),
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            BookingError::InvalidTransition { from, to } => app
                .with_detail("from", from.as_str())
                .with_detail("to", to.as_str()),
            _ => app,
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(BookingError::MissingReason.code().code(), 1002);
        assert_eq!(BookingError::InvalidAmount("-1".into()).code().code(), 2001);
        assert_eq!(BookingError::Api("down".into()).code().code(), 9003);
        assert_eq!(
            BookingError::InvalidTransition {
                from: BookingStatus::Pending,
                to: BookingStatus::Completed
            }
            .code()
            .code(),
            1001
        );
    }

    #[test]
    fn test_client_error_keeps_remote_message() {
        let err: BookingError = ClientError::Rejected("Booking is locked".into()).into();
        assert!(matches!(err, BookingError::Api(ref m) if m == "Booking is locked"));

        let err: BookingError = ClientError::Api {
            code: 1003,
            message: "Booking not found".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Booking not found");
    }

    #[test]
    fn test_into_app_error_details() {
        let app: AppError = BookingError::InvalidTransition {
            from: BookingStatus::Pending,
            to: BookingStatus::Completed,
        }
        .into();
        assert_eq!(app.code, ErrorCode::InvalidTransition);
        let details = app.details.unwrap();
        assert_eq!(details["from"], "pending");
        assert_eq!(details["to"], "completed");
    }
}
