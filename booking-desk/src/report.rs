//! Day report: everything the kitchen needs for one delivery date

use booking_client::{BookingApi, BookingQuery, ClientResult};
use chrono::NaiveDate;
use docket_printer::Docket;
use shared::Booking;
use tracing::{info, instrument};

use crate::bookings::{
    AggregatedKitchenItem, DaySummary, aggregate_items, bookings_for_day, summarize_day,
};
use crate::printing::PrepSheetRenderer;

/// A day's bookings with their summary and kitchen rollup
#[derive(Debug, Clone)]
pub struct DayReport {
    pub date: NaiveDate,
    pub bookings: Vec<Booking>,
    pub summary: DaySummary,
    pub items: Vec<AggregatedKitchenItem>,
}

impl DayReport {
    /// Derive the report from bookings already fetched
    ///
    /// Bookings delivered on other days are ignored.
    pub fn build(date: NaiveDate, bookings: &[Booking]) -> Self {
        let bookings = bookings_for_day(bookings, date);
        Self {
            date,
            summary: summarize_day(&bookings),
            items: aggregate_items(&bookings),
            bookings,
        }
    }

    /// Fetch the day's bookings from the booking service and build the report
    #[instrument(skip(api))]
    pub async fn fetch<A: BookingApi + ?Sized>(api: &A, date: NaiveDate) -> ClientResult<Self> {
        let bookings = api.fetch_bookings(&BookingQuery::day(date)).await?;
        let report = Self::build(date, &bookings);
        info!(
            bookings = report.summary.booking_count,
            dishes = report.items.len(),
            "Day report built"
        );
        Ok(report)
    }

    pub fn prep_sheet(&self) -> Docket {
        PrepSheetRenderer.render(self.date, &self.items, &self.summary)
    }
}
