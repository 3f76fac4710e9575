//! Booking views and actions
//!
//! Everything here works on an immutable snapshot of bookings fetched from
//! the booking service and returns freshly derived values:
//!
//! - [`balance`] - per-booking money figures
//! - [`kitchen`] - per-dish preparation rollup for a day
//! - [`summary`] - day totals and status breakdown
//! - [`filter`] - list filtering, sorting and facet counts
//! - [`controller`] - validated status / payment changes

pub mod balance;
pub mod controller;
pub mod error;
pub mod filter;
pub mod kitchen;
pub mod summary;

pub use balance::{PaymentBreakdown, payment_breakdown};
pub use controller::StatusController;
pub use error::{BookingError, BookingResult};
pub use filter::{
    BookingFilters, Facet, FacetCount, FacetCounts, FacetLabel, SortField, SortOrder, apply,
    facet_counts,
};
pub use kitchen::{AggregatedKitchenItem, ItemProvenance, aggregate_items};
pub use summary::{DaySummary, bookings_for_day, group_by_day, summarize_day};
