//! Customer notifications (email / SMS) after a booking change
//!
//! Delivery is someone else's job: [`WebhookNotifier`] hands the event to
//! the notification service and reports whether that hand-off worked.
//! Callers must treat a failed notification as non-fatal; the booking
//! change it describes has already been stored.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{Booking, BookingStatus, PaymentStatus};
use tracing::instrument;

use crate::{ClientError, ClientResult};

/// What happened to the booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotificationEvent {
    StatusChanged {
        from: BookingStatus,
        to: BookingStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cancellation_reason: Option<String>,
    },
    PaymentUpdated {
        payment_status: PaymentStatus,
        deposit_amount: f64,
    },
}

/// Payload handed to the notification service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingNotification {
    pub booking_id: String,
    pub booking_reference: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    #[serde(flatten)]
    pub event: NotificationEvent,
}

impl BookingNotification {
    pub fn new(booking: &Booking, event: NotificationEvent) -> Self {
        Self {
            booking_id: booking.id.clone(),
            booking_reference: booking.booking_reference.clone(),
            customer_name: booking.customer_details.name.clone(),
            email: booking.customer_details.email.clone(),
            phone: booking.customer_details.phone.clone(),
            event,
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &BookingNotification) -> ClientResult<()>;
}

/// Posts notifications as JSON to a webhook (email/SMS gateway)
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> ClientResult<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ClientError::InvalidConfig("webhook url is empty".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    #[instrument(skip(self, notification), fields(reference = %notification.booking_reference))]
    async fn notify(&self, notification: &BookingNotification) -> ClientResult<()> {
        let response = self.client.post(&self.url).json(notification).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Rejected(format!(
                "notification webhook returned {}: {}",
                status, text
            )));
        }
        Ok(())
    }
}
