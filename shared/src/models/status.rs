//! Booking status lifecycle and classification enums
//!
//! The lifecycle is `pending → confirmed → preparing → ready → completed`,
//! with `cancelled` reachable from any non-terminal status. Kitchen
//! urgency is a separate total order used to rank preparation work.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// All statuses in lifecycle order
    pub const ALL: [BookingStatus; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Preparing,
        Self::Ready,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Human-readable label for the dashboard
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Kitchen urgency; lower number = more urgent
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Preparing => 1,
            Self::Ready => 2,
            Self::Confirmed => 3,
            Self::Pending => 4,
            Self::Completed => 5,
            Self::Cancelled => 6,
        }
    }

    /// True if `self` ranks strictly ahead of `other` for kitchen work
    pub const fn is_more_urgent_than(&self, other: &BookingStatus) -> bool {
        self.priority() < other.priority()
    }

    /// Statuses reachable in one step from `self`
    pub const fn allowed_transitions(&self) -> &'static [BookingStatus] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::Preparing, Self::Completed, Self::Cancelled],
            Self::Preparing => &[Self::Ready, Self::Cancelled],
            Self::Ready => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// No further transitions are possible
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Anything but `cancelled` counts toward kitchen and revenue views
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown booking status: {}", s))
    }
}

/// Payment progress of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    DepositPaid,
    FullyPaid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [Self::Pending, Self::DepositPaid, Self::FullyPaid];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::DepositPaid => "deposit_paid",
            Self::FullyPaid => "fully_paid",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Payment pending",
            Self::DepositPaid => "Deposit paid",
            Self::FullyPaid => "Fully paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown payment status: {}", s))
    }
}

/// How the order leaves the kitchen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeliveryType {
    Pickup,
    Delivery,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 2] = [Self::Pickup, Self::Delivery];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pickup => "Pickup",
            Self::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the booking's items came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceType {
    /// A predefined menu package
    #[default]
    Menu,
    /// Items picked ad hoc by the customer
    CustomOrder,
}

impl SourceType {
    pub const ALL: [SourceType; 2] = [Self::Menu, Self::CustomOrder];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::CustomOrder => "customOrder",
        }
    }

    /// Dashboard wording: "Regular" vs "Custom"
    pub const fn order_kind(&self) -> &'static str {
        match self {
            Self::Menu => "Regular",
            Self::CustomOrder => "Custom",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
