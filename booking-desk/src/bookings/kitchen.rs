//! Kitchen preparation rollup
//!
//! Consolidates the selected items of a day's active bookings into one
//! line per dish, with quantities, guest totals, the most urgent booking
//! status and the bookings each dish came from.
//!
//! Dishes are identified by their normalized name (trimmed, lower-cased).
//! Descriptive metadata comes from the first booking that mentioned the
//! dish; when a later booking disagrees, [`AggregatedKitchenItem::metadata_conflict`]
//! is set so the kitchen can double-check instead of silently trusting the
//! first spelling.

use std::collections::HashMap;

use serde::Serialize;
use shared::{Booking, BookingStatus, SelectedItem};

/// Where part of a dish's quantity came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProvenance {
    pub booking_id: String,
    pub booking_reference: String,
    pub customer_name: String,
    pub quantity: u32,
    /// "Regular" or "Custom"
    pub order_type: &'static str,
    pub status: BookingStatus,
}

/// One dish across all of a day's active bookings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedKitchenItem {
    /// Normalized name
    pub key: String,
    /// First-seen spelling, trimmed
    pub name: String,
    pub category: String,
    pub is_addon: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub allergens: Vec<String>,
    /// Saturates at `u32::MAX`
    pub total_quantity: u32,
    pub total_people: u32,
    pub highest_priority_status: BookingStatus,
    pub bookings: Vec<ItemProvenance>,
    /// A later booking described this dish differently
    pub metadata_conflict: bool,
}

impl AggregatedKitchenItem {
    fn seed(key: String, item: &SelectedItem, booking: &Booking) -> Self {
        Self {
            key,
            name: item.display_name().to_string(),
            category: item.category_or_default().to_string(),
            is_addon: item.is_addon(),
            is_vegetarian: item.is_vegetarian,
            is_vegan: item.is_vegan,
            allergens: item.allergens.clone(),
            total_quantity: item.quantity_or_default(),
            total_people: booking.people(),
            highest_priority_status: booking.status,
            bookings: vec![provenance(item, booking)],
            metadata_conflict: false,
        }
    }

    fn absorb(&mut self, item: &SelectedItem, booking: &Booking) {
        self.total_quantity = self.total_quantity.saturating_add(item.quantity_or_default());
        self.total_people = self.total_people.saturating_add(booking.people());
        self.bookings.push(provenance(item, booking));
        if booking.status.is_more_urgent_than(&self.highest_priority_status) {
            self.highest_priority_status = booking.status;
        }
        if !self.describes(item) {
            self.metadata_conflict = true;
        }
    }

    /// Same category, add-on flag, dietary flags and allergen set
    fn describes(&self, item: &SelectedItem) -> bool {
        self.category == item.category_or_default()
            && self.is_addon == item.is_addon()
            && self.is_vegetarian == item.is_vegetarian
            && self.is_vegan == item.is_vegan
            && allergen_set(&self.allergens) == allergen_set(&item.allergens)
    }
}

fn allergen_set(allergens: &[String]) -> Vec<String> {
    let mut set: Vec<String> = allergens
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();
    set.sort();
    set.dedup();
    set
}

fn provenance(item: &SelectedItem, booking: &Booking) -> ItemProvenance {
    ItemProvenance {
        booking_id: booking.id.clone(),
        booking_reference: booking.booking_reference.clone(),
        customer_name: booking.customer_name().to_string(),
        quantity: item.quantity_or_default(),
        order_type: booking.source_type().order_kind(),
        status: booking.status,
    }
}

/// Roll up a day's bookings into per-dish preparation totals
///
/// Cancelled bookings are ignored entirely and nameless items are skipped.
/// Output is ordered by urgency of `highest_priority_status`, then by
/// descending quantity; ties keep first-seen order.
pub fn aggregate_items(bookings: &[Booking]) -> Vec<AggregatedKitchenItem> {
    let mut items: Vec<AggregatedKitchenItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for booking in bookings.iter().filter(|b| b.is_active()) {
        for item in &booking.selected_items {
            let key = item.normalized_name();
            if key.is_empty() {
                continue;
            }
            match index.get(&key) {
                Some(&i) => items[i].absorb(item, booking),
                None => {
                    index.insert(key.clone(), items.len());
                    items.push(AggregatedKitchenItem::seed(key, item, booking));
                }
            }
        }
    }

    items.sort_by(|a, b| {
        a.highest_priority_status
            .priority()
            .cmp(&b.highest_priority_status.priority())
            .then(b.total_quantity.cmp(&a.total_quantity))
    });
    items
}
