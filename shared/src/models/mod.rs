//! Booking domain models

pub mod booking;
pub mod serde_helpers;
pub mod status;

pub use booking::{
    ADDON_CATEGORY, ADDON_TYPE, AdminAddition, Booking, CustomerDetails, OrderSource, Pricing,
    SelectedItem,
};
pub use status::{BookingStatus, DeliveryType, PaymentStatus, SourceType};
