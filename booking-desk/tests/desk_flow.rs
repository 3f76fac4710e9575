//! End-to-end desk flow against an in-memory booking service

use std::sync::Mutex;

use async_trait::async_trait;
use booking_client::{
    BookingApi, BookingQuery, ClientError, ClientResult, MutationResponse, PaymentUpdateRequest,
    StatusUpdateRequest,
};
use booking_desk::bookings::{Facet, SortField, SortOrder, apply, facet_counts};
use booking_desk::{BookingError, BookingFilters, DayReport, StatusController};
use chrono::NaiveDate;
use serde_json::json;
use shared::{Booking, BookingStatus, PaymentStatus};

/// Stores bookings and applies updates like the real service would
struct InMemoryBookings {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookings {
    fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
        }
    }

    fn update<F>(&self, booking_id: &str, apply: F) -> MutationResponse
    where
        F: FnOnce(&mut Booking),
    {
        let mut bookings = self.bookings.lock().unwrap();
        match bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) => {
                apply(booking);
                MutationResponse::ok(Some(booking.clone()))
            }
            None => MutationResponse::failed("Booking not found"),
        }
    }
}

#[async_trait]
impl BookingApi for InMemoryBookings {
    async fn fetch_bookings(&self, query: &BookingQuery) -> ClientResult<Vec<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| match (b.delivery_date, query.from, query.to) {
                (Some(d), Some(from), Some(to)) => d >= from && d <= to,
                _ => true,
            })
            .cloned()
            .collect())
    }

    async fn fetch_booking(&self, booking_id: &str) -> ClientResult<Booking> {
        self.bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(booking_id.to_string()))
    }

    async fn update_booking_status(
        &self,
        request: &StatusUpdateRequest,
    ) -> ClientResult<MutationResponse> {
        Ok(self.update(&request.booking_id, |b| {
            b.status = request.status;
            b.cancellation_reason = request.cancellation_reason.clone();
            if let Some(notes) = &request.notes {
                b.admin_notes = Some(notes.clone());
            }
        }))
    }

    async fn update_booking_payment(
        &self,
        request: &PaymentUpdateRequest,
    ) -> ClientResult<MutationResponse> {
        Ok(self.update(&request.booking_id, |b| {
            b.payment_status = request.payment_status;
            b.deposit_amount = Some(request.deposit_amount);
        }))
    }
}

fn booking(id: &str, date: &str, status: &str, total: f64, people: u32, items: serde_json::Value) -> Booking {
    serde_json::from_value(json!({
        "id": id,
        "bookingReference": format!("BK-{}", id),
        "status": status,
        "pricing": { "total": total },
        "peopleCount": people,
        "deliveryType": "Delivery",
        "deliveryDate": date,
        "customerDetails": { "name": format!("Customer {}", id), "email": format!("{}@example.com", id), "phone": "1" },
        "selectedItems": items
    }))
    .unwrap()
}

fn seeded() -> InMemoryBookings {
    InMemoryBookings::new(vec![
        booking("1", "2024-06-14", "confirmed", 300.0, 20, json!([
            { "name": "Butter Chicken", "quantity": 2 },
            { "name": "Garlic Naan", "category": "addons", "quantity": 10 }
        ])),
        booking("2", "2024-06-14", "pending", 100.0, 10, json!([
            { "name": "butter chicken ", "quantity": 3 }
        ])),
        booking("3", "2024-06-14", "cancelled", 200.0, 15, json!([
            { "name": "Butter Chicken", "quantity": 9 }
        ])),
        booking("4", "2024-06-15", "confirmed", 400.0, 30, json!([
            { "name": "Lamb Rogan Josh", "quantity": 4 }
        ])),
    ])
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
}

#[tokio::test]
async fn test_day_report() {
    let api = seeded();
    let report = DayReport::fetch(&api, day()).await.unwrap();

    assert_eq!(report.bookings.len(), 3);
    assert_eq!(report.summary.total_revenue, 400.0);
    assert_eq!(report.summary.total_people, 30);
    assert_eq!(report.summary.count(BookingStatus::Cancelled), 1);

    let chicken = report.items.iter().find(|i| i.key == "butter chicken").unwrap();
    assert_eq!(chicken.total_quantity, 5);
    assert_eq!(chicken.highest_priority_status, BookingStatus::Confirmed);
    assert_eq!(chicken.bookings.len(), 2);

    let sheet = report.prep_sheet().to_text(42);
    assert!(sheet.contains("PREP SHEET"));
    assert!(sheet.contains("Garlic Naan"));
    assert!(!sheet.contains("Lamb Rogan Josh"));
}

#[tokio::test]
async fn test_status_change_then_refetch_updates_views() {
    let controller = StatusController::new(seeded());
    let before = controller.api().fetch_booking("1").await.unwrap();

    let updated = controller
        .request_status_change(&before, BookingStatus::Preparing, Some("oven on"), None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, BookingStatus::Preparing);
    assert_eq!(updated.admin_notes.as_deref(), Some("oven on"));

    // The caller refreshes its snapshot after success
    let report = DayReport::fetch(controller.api(), day()).await.unwrap();
    assert_eq!(report.items[0].highest_priority_status, BookingStatus::Preparing);
}

#[tokio::test]
async fn test_rejected_changes_leave_the_store_untouched() {
    let controller = StatusController::new(seeded());
    let pending = controller.api().fetch_booking("2").await.unwrap();

    let err = controller
        .request_status_change(&pending, BookingStatus::Cancelled, None, Some(" "))
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::MissingReason));

    let err = controller
        .request_payment_change(&pending, PaymentStatus::FullyPaid, 100.5)
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::InvalidAmount(_)));

    let after = controller.api().fetch_booking("2").await.unwrap();
    assert_eq!(after, pending);
}

#[tokio::test]
async fn test_payment_then_cancel() {
    let controller = StatusController::new(seeded());
    let b = controller.api().fetch_booking("2").await.unwrap();

    let paid = controller
        .request_payment_change(&b, PaymentStatus::DepositPaid, 40.0)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(paid.balance(), 60.0);

    let cancelled = controller
        .request_status_change(&paid, BookingStatus::Cancelled, None, Some("double booked"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cancelled.cancellation_reason.as_deref(), Some("double booked"));

    let report = DayReport::fetch(controller.api(), day()).await.unwrap();
    assert_eq!(report.summary.count(BookingStatus::Cancelled), 2);
    assert_eq!(report.summary.total_revenue, 300.0);
}

#[tokio::test]
async fn test_unknown_booking_is_api_error() {
    let controller = StatusController::new(seeded());
    let mut ghost = controller.api().fetch_booking("1").await.unwrap();
    ghost.id = "404".into();

    let err = controller
        .request_status_change(&ghost, BookingStatus::Preparing, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Api(ref m) if m == "Booking not found"));
}

#[tokio::test]
async fn test_list_view_over_fetched_snapshot() {
    let api = seeded();
    let all = api.fetch_bookings(&BookingQuery::default()).await.unwrap();

    let filters: BookingFilters = serde_json::from_value(json!({
        "deliveryType": "Delivery",
        "sortBy": "pricing.total",
        "sortOrder": "desc"
    }))
    .unwrap();
    let view = apply(&all, &filters);
    let ids: Vec<&str> = view.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "1", "3", "2"]);

    let narrowed = BookingFilters {
        status: Facet::Only(BookingStatus::Confirmed),
        sort_by: Some(SortField::BookingReference),
        sort_order: SortOrder::Asc,
        ..filters
    };
    assert_eq!(apply(&all, &narrowed).len(), 2);
    assert_eq!(facet_counts(&all).status_count(BookingStatus::Pending), 1);
}
