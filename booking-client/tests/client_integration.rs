//! NetworkBookingClient against a fake booking service

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, put},
};
use booking_client::{
    BookingApi, BookingQuery, ClientConfig, ClientError, PaymentUpdateRequest,
    StatusUpdateRequest,
};
use serde_json::{Value, json};
use shared::{BookingStatus, PaymentStatus};
use std::collections::HashMap;

fn booking_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "bookingReference": format!("BK-{}", id),
        "status": status,
        "pricing": { "total": 300.0 },
        "deliveryDate": "2024-06-14",
        "customerDetails": { "name": "Test Customer", "email": "t@example.com", "phone": "1" }
    })
}

async fn list_bookings(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    // Echo the requested range back through the reference so the test can see it
    let from = params.get("from").cloned().unwrap_or_default();
    let mut first = booking_json("1", "pending");
    first["bookingReference"] = json!(format!("FROM-{}", from));
    Json(json!({ "success": true, "data": [first, booking_json("2", "confirmed")] }))
}

async fn get_booking(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "code": 1003, "message": "Booking not found" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": booking_json(&id, "ready") })),
    )
}

async fn update_status(Path(id): Path<String>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if id == "locked" {
        return (
            StatusCode::OK,
            Json(json!({ "success": false, "error": "Booking is locked" })),
        );
    }
    if id == "broken" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": "database unavailable" })),
        );
    }
    let status = body["status"].as_str().unwrap_or("pending").to_string();
    (
        StatusCode::OK,
        Json(json!({ "success": true, "booking": booking_json(&id, &status) })),
    )
}

async fn update_payment(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    let mut booking = booking_json(&id, "confirmed");
    booking["depositAmount"] = body["depositAmount"].clone();
    booking["paymentStatus"] = body["paymentStatus"].clone();
    Json(json!({ "success": true, "booking": booking }))
}

async fn spawn_fake_service() -> String {
    let app = Router::new()
        .route("/api/bookings", get(list_bookings))
        .route("/api/bookings/{id}", get(get_booking))
        .route("/api/bookings/{id}/status", put(update_status))
        .route("/api/bookings/{id}/payment", put(update_payment));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_bookings_for_day() {
    let base_url = spawn_fake_service().await;
    let client = ClientConfig::new(base_url).build_http_client().unwrap();

    let day = chrono::NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let bookings = client.fetch_bookings(&BookingQuery::day(day)).await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].booking_reference, "FROM-2024-06-14");
    assert_eq!(bookings[1].status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_fetch_single_booking_and_not_found() {
    let base_url = spawn_fake_service().await;
    let client = ClientConfig::new(base_url).build_http_client().unwrap();

    let booking = client.fetch_booking("42").await.unwrap();
    assert_eq!(booking.booking_reference, "BK-42");
    assert_eq!(booking.status, BookingStatus::Ready);

    let err = client.fetch_booking("missing").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { code: 1003, .. }));
}

#[tokio::test]
async fn test_update_status_envelopes() {
    let base_url = spawn_fake_service().await;
    let client = ClientConfig::new(base_url).build_http_client().unwrap();

    let request = StatusUpdateRequest {
        booking_id: "7".to_string(),
        status: BookingStatus::Confirmed,
        notes: Some("called customer".to_string()),
        cancellation_reason: None,
    };
    let resp = client.update_booking_status(&request).await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.booking.unwrap().status, BookingStatus::Confirmed);

    // 200 with success=false is returned as-is for the caller to interpret
    let locked = StatusUpdateRequest {
        booking_id: "locked".to_string(),
        ..request.clone()
    };
    let resp = client.update_booking_status(&locked).await.unwrap();
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("Booking is locked"));

    // non-2xx with an envelope becomes a Rejected error
    let broken = StatusUpdateRequest {
        booking_id: "broken".to_string(),
        ..request
    };
    let err = client.update_booking_status(&broken).await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(msg) if msg == "database unavailable"));
}

#[tokio::test]
async fn test_update_payment() {
    let base_url = spawn_fake_service().await;
    let client = ClientConfig::new(base_url).build_http_client().unwrap();

    let request = PaymentUpdateRequest {
        booking_id: "9".to_string(),
        payment_status: PaymentStatus::DepositPaid,
        deposit_amount: 90.0,
    };
    let resp = client.update_booking_payment(&request).await.unwrap();
    let booking = resp.booking.unwrap();
    assert_eq!(booking.paid(), 90.0);
    assert_eq!(booking.payment_status, PaymentStatus::DepositPaid);
    assert_eq!(booking.balance(), 210.0);
}

#[tokio::test]
async fn test_unreachable_service_is_http_error() {
    let client = ClientConfig::new("http://127.0.0.1:9")
        .with_timeout(2)
        .build_http_client()
        .unwrap();

    let err = client.fetch_booking("1").await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
