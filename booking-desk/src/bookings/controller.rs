//! Status transition controller
//!
//! Validates booking status and payment changes locally, then delegates
//! them to the booking service. Nothing is retried and no local state is
//! touched: on success the caller gets the service's updated booking (if
//! it sent one) and is responsible for refreshing its own view.
//!
//! Callers must serialize requests per booking; two in-flight changes to
//! the same booking are not coordinated here.

use std::sync::Arc;
use std::time::Duration;

use booking_client::{
    BookingApi, BookingNotification, NotificationEvent, Notifier, PaymentUpdateRequest,
    StatusUpdateRequest,
};
use shared::money::{format_amount, to_decimal, try_to_decimal};
use shared::{Booking, BookingStatus, PaymentStatus};
use tracing::{info, instrument, warn};

use super::error::{BookingError, BookingResult};
use crate::audit_log;

const AUDIT_ACTOR: &str = "booking-desk";

/// Longest a successful change waits on the customer notification
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Trimmed, or `None` when blank
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub struct StatusController<A: BookingApi> {
    api: A,
    notifier: Option<Arc<dyn Notifier>>,
}

impl<A: BookingApi> StatusController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            notifier: None,
        }
    }

    /// Customer notifications after successful changes
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifies(&self) -> bool {
        self.notifier.is_some()
    }

    /// Move `booking` to `new_status`
    ///
    /// Cancelling requires a non-blank `cancellation_reason` (checked first,
    /// [`BookingError::MissingReason`]); any step outside the lifecycle table
    /// is [`BookingError::InvalidTransition`]. Neither case reaches the
    /// booking service.
    #[instrument(skip(self, booking, notes, cancellation_reason), fields(booking = %booking.booking_reference, from = %booking.status, to = %new_status))]
    pub async fn request_status_change(
        &self,
        booking: &Booking,
        new_status: BookingStatus,
        notes: Option<&str>,
        cancellation_reason: Option<&str>,
    ) -> BookingResult<Option<Booking>> {
        let cancellation_reason = if new_status == BookingStatus::Cancelled {
            Some(non_blank(cancellation_reason).ok_or(BookingError::MissingReason)?)
        } else {
            None
        };

        if !booking.status.can_transition_to(new_status) {
            return Err(BookingError::InvalidTransition {
                from: booking.status,
                to: new_status,
            });
        }

        let request = StatusUpdateRequest {
            booking_id: booking.id.clone(),
            status: new_status,
            notes: non_blank(notes),
            cancellation_reason,
        };

        let updated = self
            .api
            .update_booking_status(&request)
            .await?
            .into_result()
            .map_err(BookingError::Api)?;

        info!("Booking status updated");
        let resource = format!("booking:{}", booking.booking_reference);
        let details = format!("{} -> {}", booking.status, new_status);
        audit_log!(AUDIT_ACTOR, "status_change", resource.as_str(), details.as_str());

        self.notify(
            booking,
            NotificationEvent::StatusChanged {
                from: booking.status,
                to: new_status,
                cancellation_reason: request.cancellation_reason,
            },
        )
        .await;

        Ok(updated)
    }

    /// Record a payment: `deposit_amount` must be a finite amount within
    /// `0..=total`, otherwise [`BookingError::InvalidAmount`]
    #[instrument(skip(self, booking), fields(booking = %booking.booking_reference))]
    pub async fn request_payment_change(
        &self,
        booking: &Booking,
        payment_status: PaymentStatus,
        deposit_amount: f64,
    ) -> BookingResult<Option<Booking>> {
        let Some(amount) = try_to_decimal(deposit_amount) else {
            return Err(BookingError::InvalidAmount(format!(
                "{} is not a representable amount",
                deposit_amount
            )));
        };
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(BookingError::InvalidAmount(format!(
                "{} is negative",
                format_amount(deposit_amount)
            )));
        }
        if amount > to_decimal(booking.total()) {
            return Err(BookingError::InvalidAmount(format!(
                "{} exceeds the booking total {}",
                format_amount(deposit_amount),
                format_amount(booking.total())
            )));
        }

        let request = PaymentUpdateRequest {
            booking_id: booking.id.clone(),
            payment_status,
            deposit_amount,
        };

        let updated = self
            .api
            .update_booking_payment(&request)
            .await?
            .into_result()
            .map_err(BookingError::Api)?;

        info!(%payment_status, deposit_amount, "Booking payment updated");
        let resource = format!("booking:{}", booking.booking_reference);
        let details = format!("{} deposit {}", payment_status, format_amount(deposit_amount));
        audit_log!(AUDIT_ACTOR, "payment_update", resource.as_str(), details.as_str());

        self.notify(
            booking,
            NotificationEvent::PaymentUpdated {
                payment_status,
                deposit_amount,
            },
        )
        .await;

        Ok(updated)
    }

    /// Failures and timeouts are logged and swallowed; the change is already stored
    async fn notify(&self, booking: &Booking, event: NotificationEvent) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        let notification = BookingNotification::new(booking, event);
        match tokio::time::timeout(NOTIFY_TIMEOUT, notifier.notify(&notification)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!(error = %e, booking = %booking.booking_reference, "Customer notification failed")
            }
            Err(_) => warn!(
                booking = %booking.booking_reference,
                timeout_secs = NOTIFY_TIMEOUT.as_secs(),
                "Customer notification timed out"
            ),
        }
    }
}
