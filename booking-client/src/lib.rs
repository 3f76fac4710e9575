//! Booking Client - HTTP client for the booking service
//!
//! Provides the [`BookingApi`] contract (booking source, status updates,
//! payment updates), its network implementation, and the customer
//! notification hook.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod notify;

pub use api::BookingApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::NetworkBookingClient;
pub use notify::{BookingNotification, NotificationEvent, Notifier, WebhookNotifier};

// Re-export shared types for convenience
pub use shared::request::{BookingQuery, PaymentUpdateRequest, StatusUpdateRequest};
pub use shared::response::MutationResponse;
