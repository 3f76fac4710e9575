//! Booking API contract
//!
//! The booking service owns persistence. Everything in this workspace reads
//! snapshots through [`BookingApi`] and requests mutations through it; the
//! trait is the seam where tests substitute an in-memory fake.

use async_trait::async_trait;
use shared::request::{BookingQuery, PaymentUpdateRequest, StatusUpdateRequest};
use shared::response::MutationResponse;
use shared::Booking;

use crate::ClientResult;

#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Read-only booking source
    async fn fetch_bookings(&self, query: &BookingQuery) -> ClientResult<Vec<Booking>>;

    async fn fetch_booking(&self, booking_id: &str) -> ClientResult<Booking>;

    /// `{ success, booking?, error? }`; no retry on failure
    async fn update_booking_status(
        &self,
        request: &StatusUpdateRequest,
    ) -> ClientResult<MutationResponse>;

    /// `{ success, booking?, error? }`; no retry on failure
    async fn update_booking_payment(
        &self,
        request: &PaymentUpdateRequest,
    ) -> ClientResult<MutationResponse>;
}
