//! Receipt, kitchen docket and prep sheet renderers
//!
//! Each renderer lays a booking (or a day's rollup) out as a [`Docket`];
//! the caller picks plain text for the screen or ESC/POS for the printer.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use docket_printer::Docket;
use shared::money::format_amount;
use shared::{Booking, BookingStatus, SelectedItem};

use crate::bookings::{AggregatedKitchenItem, DaySummary, payment_breakdown};

/// Format a UTC timestamp (DD/MM/YYYY HH:MM) in the given timezone
fn format_timestamp(ts: DateTime<Utc>, tz: Tz) -> String {
    ts.with_timezone(&tz).format("%d/%m/%Y %H:%M").to_string()
}

fn dietary_marker(is_vegetarian: bool, is_vegan: bool) -> &'static str {
    if is_vegan {
        " (VG)"
    } else if is_vegetarian {
        " (V)"
    } else {
        ""
    }
}

fn item_marker(item: &SelectedItem) -> &'static str {
    dietary_marker(item.is_vegetarian, item.is_vegan)
}

/// "Delivery 14/06/2024 18:30", with whatever parts are known
fn delivery_line(booking: &Booking) -> (String, String) {
    let kind = booking
        .delivery_type
        .map(|d| d.as_str().to_string())
        .unwrap_or_else(|| "Date".to_string());
    let mut when = booking
        .delivery_date
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "TBC".to_string());
    if let Some(time) = booking.delivery_time.as_deref().map(str::trim)
        && !time.is_empty()
    {
        when.push(' ');
        when.push_str(time);
    }
    (kind, when)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Customer receipt
pub struct ReceiptRenderer {
    timezone: Tz,
}

impl ReceiptRenderer {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn render(&self, booking: &Booking) -> Docket {
        let mut d = Docket::new();
        d.title("BOOKING RECEIPT")
            .centered(booking.booking_reference.as_str())
            .sep_double();

        let customer = &booking.customer_details;
        d.pair("Customer", customer.name.as_str());
        if !customer.phone.is_empty() {
            d.pair("Phone", customer.phone.as_str());
        }
        if !customer.email.is_empty() {
            d.pair("Email", customer.email.as_str());
        }
        if let Some(ordered) = booking.order_date {
            d.pair("Ordered", format_timestamp(ordered, self.timezone));
        }
        let (kind, when) = delivery_line(booking);
        d.pair(kind, when);
        if let Some(address) = non_empty(booking.delivery_address.as_deref()) {
            d.text(format!("Address: {}", address));
        }
        d.pair("Guests", booking.people().to_string())
            .pair("Order type", booking.source_type().order_kind());

        d.sep_single().bold("ITEMS");
        for item in booking.selected_items.iter().filter(|i| !i.display_name().is_empty()) {
            d.text(format!(
                "{} x {}{}",
                item.quantity_or_default(),
                item.display_name(),
                item_marker(item)
            ));
        }
        if !booking.admin_additions.is_empty() {
            d.bold("EXTRAS");
            for extra in &booking.admin_additions {
                let price = extra.price.map(format_amount).unwrap_or_default();
                d.pair(
                    format!("{} x {}", extra.quantity_or_default(), extra.name.trim()),
                    price,
                );
            }
        }

        let money = payment_breakdown(booking);
        d.sep_single();
        if let Some(base) = booking.pricing.base_price {
            d.pair("Base price", format_amount(base));
        }
        if let Some(addons) = booking.pricing.addons_price {
            d.pair("Add-ons", format_amount(addons));
        }
        d.pair("Total", format_amount(money.total))
            .pair("Paid", format_amount(money.paid));
        if money.overpaid {
            d.pair("Overpaid", format_amount(-money.balance));
        } else {
            d.pair("Balance due", format_amount(money.balance));
        }
        d.pair("Paid %", format!("{}%", money.percent_paid))
            .pair("Payment", booking.payment_status.label());

        if booking.status == BookingStatus::Cancelled {
            d.blank().emphasis("CANCELLED");
            if let Some(reason) = non_empty(booking.cancellation_reason.as_deref()) {
                d.text(format!("Reason: {}", reason));
            }
        }

        d.sep_double().centered("Thank you for your booking");
        d
    }
}

impl Default for ReceiptRenderer {
    fn default() -> Self {
        Self::new(chrono_tz::Europe::London)
    }
}

/// One booking's preparation docket for the kitchen
pub struct KitchenDocketRenderer;

impl KitchenDocketRenderer {
    pub fn render(&self, booking: &Booking) -> Docket {
        let mut d = Docket::new();
        d.title("KITCHEN DOCKET")
            .centered(booking.booking_reference.as_str())
            .sep_double();

        let (kind, when) = delivery_line(booking);
        d.pair(kind, when)
            .pair("Guests", booking.people().to_string())
            .pair("Customer", booking.customer_name());

        let customer = &booking.customer_details;
        if let Some(spice) = non_empty(customer.spice_level.as_deref()) {
            d.pair("Spice", spice);
        }
        if let Some(dietary) = non_empty(customer.dietary_requirements.as_deref()) {
            d.emphasis(format!("DIETARY: {}", dietary));
        }
        if let Some(notes) = non_empty(customer.special_instructions.as_deref()) {
            d.text(format!("Notes: {}", notes));
        }

        let (addons, mains): (Vec<&SelectedItem>, Vec<&SelectedItem>) = booking
            .selected_items
            .iter()
            .filter(|i| !i.display_name().is_empty())
            .partition(|i| i.is_addon());

        d.sep_single();
        for item in mains {
            self.render_item(&mut d, item);
        }
        if !addons.is_empty() {
            d.bold("ADD-ONS");
            for item in addons {
                self.render_item(&mut d, item);
            }
        }

        if !booking.admin_additions.is_empty() {
            d.bold("EXTRAS");
            for extra in &booking.admin_additions {
                d.text(format!("{} x {}", extra.quantity_or_default(), extra.name.trim()));
                if let Some(notes) = non_empty(extra.notes.as_deref()) {
                    d.text(format!("   * {}", notes));
                }
            }
        }
        if let Some(notes) = non_empty(booking.admin_notes.as_deref()) {
            d.sep_single().text(format!("Admin: {}", notes));
        }

        if booking.status == BookingStatus::Cancelled {
            d.blank().emphasis("*** CANCELLED - DO NOT PREPARE ***");
        }
        d
    }

    fn render_item(&self, d: &mut Docket, item: &SelectedItem) {
        d.bold(format!(
            "{} x {}{}",
            item.quantity_or_default(),
            item.display_name(),
            item_marker(item)
        ));
        if !item.allergens.is_empty() {
            d.text(format!("   allergens: {}", item.allergens.join(", ")));
        }
    }
}

/// Aggregated kitchen view for a whole day
pub struct PrepSheetRenderer;

impl PrepSheetRenderer {
    pub fn render(
        &self,
        date: NaiveDate,
        items: &[AggregatedKitchenItem],
        summary: &DaySummary,
    ) -> Docket {
        let mut d = Docket::new();
        d.title("PREP SHEET")
            .centered(date.format("%A %d %B %Y").to_string())
            .sep_double();

        d.pair(
            "Bookings",
            format!("{} active / {} total", summary.active_count, summary.booking_count),
        )
        .pair("Guests", summary.total_people.to_string())
        .pair("Revenue", format_amount(summary.total_revenue))
        .pair("Paid", format_amount(summary.total_paid))
        .pair("Balance", format_amount(summary.total_balance));
        if !summary.status_counts.is_empty() {
            let counts: Vec<String> = summary
                .status_counts
                .iter()
                .map(|(status, n)| format!("{} {}", status.label(), n))
                .collect();
            d.text(counts.join(", "));
        }
        d.sep_single();

        if items.is_empty() {
            d.centered("No active bookings");
            return d;
        }

        for item in items {
            d.pair(
                format!(
                    "{}{}",
                    item.name,
                    dietary_marker(item.is_vegetarian, item.is_vegan)
                ),
                format!("x{}", item.total_quantity),
            );
            d.text(format!(
                "  [{}] {} guests",
                item.highest_priority_status.label(),
                item.total_people
            ));
            if !item.allergens.is_empty() {
                d.text(format!("  allergens: {}", item.allergens.join(", ")));
            }
            if item.metadata_conflict {
                d.emphasis("  ! CHECK: bookings describe this dish differently");
            }
            for source in &item.bookings {
                d.text(format!(
                    "  - {} {} x{} ({})",
                    source.booking_reference, source.customer_name, source.quantity, source.order_type
                ));
            }
        }
        d
    }
}
