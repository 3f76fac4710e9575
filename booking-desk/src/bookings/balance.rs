//! Pricing and balance calculator
//!
//! Pure derivation of the money figures shown for one booking.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::Booking;
use shared::money::{to_decimal, to_f64};

/// Money figures for one booking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub total: f64,
    pub paid: f64,
    /// `total - paid`, negative when overpaid
    pub balance: f64,
    /// Clamped to `[0, 100]`; 0 when total is 0
    pub percent_paid: f64,
    /// Paid more than the total
    pub overpaid: bool,
}

impl PaymentBreakdown {
    pub fn is_settled(&self) -> bool {
        self.balance <= 0.0
    }
}

/// Derive total, paid, balance and percent paid. Never fails.
pub fn payment_breakdown(booking: &Booking) -> PaymentBreakdown {
    let total = to_decimal(booking.total());
    let paid = to_decimal(booking.paid());
    let balance = total - paid;

    let percent_paid = if total > Decimal::ZERO {
        (paid * Decimal::ONE_HUNDRED / total).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    PaymentBreakdown {
        total: to_f64(total),
        paid: to_f64(paid),
        balance: to_f64(balance),
        percent_paid: percent_paid.round_dp(2).to_f64().unwrap_or_default(),
        overpaid: balance < Decimal::ZERO,
    }
}
