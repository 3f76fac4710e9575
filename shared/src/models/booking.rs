//! Booking Model
//!
//! A snapshot of a catering booking as returned by the booking API.
//! Every optional field has exactly one default accessor here; the rest
//! of the workspace reads through these accessors.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{calendar_day, null_as_default};
use super::status::{BookingStatus, DeliveryType, PaymentStatus, SourceType};
use crate::money;

/// Category value that marks an add-on item
pub const ADDON_CATEGORY: &str = "addons";
/// Item `type` value that marks an add-on item
pub const ADDON_TYPE: &str = "addon";

/// Booking pricing breakdown (currency units)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub addons_price: Option<f64>,
    /// Not re-derived from base + addons; trusted as sent
    #[serde(default)]
    pub total: Option<f64>,
}

/// Customer contact and preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub dietary_requirements: Option<String>,
    #[serde(default)]
    pub spice_level: Option<String>,
}

/// One line of the booking's selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// `"addon"` marks an add-on regardless of category
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_vegetarian: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_vegan: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub group_name: Option<String>,
}

impl SelectedItem {
    /// Quantity, defaulting to 1 when absent
    pub fn quantity_or_default(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    /// Trimmed display name; empty when absent
    pub fn display_name(&self) -> &str {
        self.name.as_deref().map(str::trim).unwrap_or("")
    }

    /// Case- and whitespace-insensitive identity used for kitchen rollups
    pub fn normalized_name(&self) -> String {
        self.display_name().to_lowercase()
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    pub fn is_addon(&self) -> bool {
        self.category.as_deref() == Some(ADDON_CATEGORY)
            || self.item_type.as_deref() == Some(ADDON_TYPE)
    }
}

/// Staff-added extra on top of the customer's selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAddition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AdminAddition {
    pub fn quantity_or_default(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }
}

/// Origin of the booking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSource {
    #[serde(default)]
    pub source_type: Option<SourceType>,
    #[serde(default)]
    pub source_name: Option<String>,
}

/// Booking entity (read-only snapshot from the booking API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub booking_reference: String,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pricing: Pricing,
    #[serde(default)]
    pub deposit_amount: Option<f64>,
    #[serde(default)]
    pub people_count: Option<u32>,
    #[serde(default)]
    pub delivery_type: Option<DeliveryType>,
    /// Calendar day of the event; also read from a full timestamp
    #[serde(default, deserialize_with = "calendar_day")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_details: CustomerDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_items: Vec<SelectedItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_source: OrderSource,
    /// Present only when `status == cancelled`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin_additions: Vec<AdminAddition>,
}

impl Booking {
    /// `pricing.total`, default 0
    pub fn total(&self) -> f64 {
        self.pricing.total.unwrap_or(0.0)
    }

    /// `depositAmount`, default 0
    pub fn paid(&self) -> f64 {
        self.deposit_amount.unwrap_or(0.0)
    }

    /// `total - paid`; negative when overpaid
    pub fn balance(&self) -> f64 {
        money::to_f64(money::to_decimal(self.total()) - money::to_decimal(self.paid()))
    }

    /// `peopleCount`, default 0
    pub fn people(&self) -> u32 {
        self.people_count.unwrap_or(0)
    }

    /// `orderSource.sourceType`, default `menu`
    pub fn source_type(&self) -> SourceType {
        self.order_source.source_type.unwrap_or_default()
    }

    pub fn is_custom_order(&self) -> bool {
        self.source_type() == SourceType::CustomOrder
    }

    /// Not cancelled
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_details.name
    }
}
