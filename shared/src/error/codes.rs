//! Numeric error codes shared by every crate in the workspace

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable numeric code; serialized as a bare number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    InvalidRequest = 4,

    /// Status change outside the lifecycle table
    InvalidTransition = 1001,
    /// Cancellation without a reason
    MissingReason = 1002,
    BookingNotFound = 1003,

    /// Deposit negative, not a number, or above the total
    InvalidAmount = 2001,

    PrinterNotAvailable = 3001,
    PrintFailed = 3002,

    InternalError = 9001,
    ConfigError = 9002,
    /// The booking service failed or refused the call
    UpstreamError = 9003,
    NetworkError = 9004,
    TimeoutError = 9005,
}

impl ErrorCode {
    const ALL: [ErrorCode; 16] = [
        Self::Success,
        Self::Unknown,
        Self::ValidationFailed,
        Self::NotFound,
        Self::InvalidRequest,
        Self::InvalidTransition,
        Self::MissingReason,
        Self::BookingNotFound,
        Self::InvalidAmount,
        Self::PrinterNotAvailable,
        Self::PrintFailed,
        Self::InternalError,
        Self::ConfigError,
        Self::UpstreamError,
        Self::NetworkError,
        Self::TimeoutError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default operator-facing wording
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Not found",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidTransition => "Status change is not allowed",
            Self::MissingReason => "A cancellation reason is required",
            Self::BookingNotFound => "Booking not found",
            Self::InvalidAmount => "Payment amount is out of range",
            Self::PrinterNotAvailable => "Printer is not reachable",
            Self::PrintFailed => "Printing failed",
            Self::InternalError => "Internal error",
            Self::ConfigError => "Configuration error",
            Self::UpstreamError => "Booking service request failed",
            Self::NetworkError => "Network error",
            Self::TimeoutError => "Request timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not one of the known [`ErrorCode`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
