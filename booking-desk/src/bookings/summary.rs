//! Day summary: guests, revenue, payments and status breakdown

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use shared::money;
use shared::{Booking, BookingStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// All bookings, cancelled included
    pub booking_count: usize,
    pub active_count: usize,
    pub total_people: u32,
    pub total_revenue: f64,
    pub total_paid: f64,
    /// Revenue minus paid; negative if the day is overpaid
    pub total_balance: f64,
    /// Observed statuses only, cancelled included
    pub status_counts: BTreeMap<BookingStatus, usize>,
    pub regular_count: usize,
    pub custom_count: usize,
}

impl DaySummary {
    pub fn count(&self, status: BookingStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }
}

/// Summarize one day's bookings
///
/// Guests, money and order kinds cover active bookings only; status counts
/// cover everything.
pub fn summarize_day(bookings: &[Booking]) -> DaySummary {
    let mut status_counts = BTreeMap::new();
    for booking in bookings {
        *status_counts.entry(booking.status).or_insert(0) += 1;
    }

    let active: Vec<&Booking> = bookings.iter().filter(|b| b.is_active()).collect();
    let total_revenue = money::sum(active.iter().map(|b| b.total()));
    let total_paid = money::sum(active.iter().map(|b| b.paid()));
    let custom_count = active.iter().filter(|b| b.is_custom_order()).count();

    DaySummary {
        booking_count: bookings.len(),
        active_count: active.len(),
        total_people: active
            .iter()
            .fold(0u32, |acc, b| acc.saturating_add(b.people())),
        total_revenue,
        total_paid,
        total_balance: money::to_f64(
            money::to_decimal(total_revenue) - money::to_decimal(total_paid),
        ),
        status_counts,
        regular_count: active.len() - custom_count,
        custom_count,
    }
}

/// Bookings delivered on `date`, in input order
pub fn bookings_for_day(bookings: &[Booking], date: NaiveDate) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.delivery_date == Some(date))
        .cloned()
        .collect()
}

/// Bucket bookings by delivery date; undated bookings are dropped
pub fn group_by_day(bookings: &[Booking]) -> BTreeMap<NaiveDate, Vec<Booking>> {
    let mut days: BTreeMap<NaiveDate, Vec<Booking>> = BTreeMap::new();
    for booking in bookings {
        if let Some(date) = booking.delivery_date {
            days.entry(date).or_default().push(booking.clone());
        }
    }
    days
}
