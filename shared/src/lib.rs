//! Shared types for the catering booking desk
//!
//! Common types used across the workspace crates: the booking data model,
//! the status lifecycle policy, request/response DTOs for the remote
//! booking API, and the unified error codes.

pub mod error;
pub mod models;
pub mod money;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    AdminAddition, Booking, BookingStatus, CustomerDetails, DeliveryType, OrderSource,
    PaymentStatus, Pricing, SelectedItem, SourceType,
};
pub use request::{BookingQuery, PaymentUpdateRequest, StatusUpdateRequest};
pub use response::MutationResponse;
