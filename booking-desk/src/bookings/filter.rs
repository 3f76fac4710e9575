//! Booking filter and sort engine
//!
//! [`BookingFilters`] is an immutable value deserialized from the
//! dashboard's query (`?status=confirmed&sortBy=pricing.total&sortOrder=asc`)
//! and applied to a snapshot with [`apply`]. The input is never mutated.
//!
//! [`facet_counts`] annotates filter options ("Confirmed (12)") and is
//! always computed over the unfiltered snapshot so the numbers stay put
//! while the operator narrows the view.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared::money::to_decimal;
use shared::{Booking, BookingStatus, DeliveryType, SourceType};

const ALL: &str = "all";

/// A filter facet: `"all"` or one exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Serialize> Serialize for Facet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(ALL),
            Self::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Facet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Value(T),
            Word(String),
        }

        match Repr::<T>::deserialize(deserializer)? {
            Repr::Value(value) => Ok(Self::Only(value)),
            Repr::Word(word) if word.is_empty() || word == ALL => Ok(Self::All),
            Repr::Word(word) => Err(serde::de::Error::custom(format!(
                "unknown filter value: {}",
                word
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sortable booking field, addressed by its dotted path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortField {
    BookingReference,
    Status,
    PaymentStatus,
    DeliveryType,
    DeliveryDate,
    OrderDate,
    PeopleCount,
    DepositAmount,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    BasePrice,
    AddonsPrice,
    Total,
    Balance,
}

impl SortField {
    pub const ALL: [SortField; 15] = [
        Self::BookingReference,
        Self::Status,
        Self::PaymentStatus,
        Self::DeliveryType,
        Self::DeliveryDate,
        Self::OrderDate,
        Self::PeopleCount,
        Self::DepositAmount,
        Self::CustomerName,
        Self::CustomerEmail,
        Self::CustomerPhone,
        Self::BasePrice,
        Self::AddonsPrice,
        Self::Total,
        Self::Balance,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Self::BookingReference => "bookingReference",
            Self::Status => "status",
            Self::PaymentStatus => "paymentStatus",
            Self::DeliveryType => "deliveryType",
            Self::DeliveryDate => "deliveryDate",
            Self::OrderDate => "orderDate",
            Self::PeopleCount => "peopleCount",
            Self::DepositAmount => "depositAmount",
            Self::CustomerName => "customerDetails.name",
            Self::CustomerEmail => "customerDetails.email",
            Self::CustomerPhone => "customerDetails.phone",
            Self::BasePrice => "pricing.basePrice",
            Self::AddonsPrice => "pricing.addonsPrice",
            Self::Total => "pricing.total",
            Self::Balance => "balance",
        }
    }

    /// Sort key for one booking; `None` sorts last in both directions
    fn key<'a>(&self, b: &'a Booking) -> Option<SortKey<'a>> {
        let text = |s: &'a str| Some(SortKey::Text(Cow::Borrowed(s)));
        let money = |v: Option<f64>| v.map(|v| SortKey::Number(to_decimal(v)));

        match self {
            Self::BookingReference => text(&b.booking_reference),
            Self::Status => text(b.status.as_str()),
            Self::PaymentStatus => text(b.payment_status.as_str()),
            Self::DeliveryType => b.delivery_type.and_then(|d| text(d.as_str())),
            Self::DeliveryDate => b.delivery_date.map(SortKey::Date),
            Self::OrderDate => b.order_date.map(SortKey::Time),
            Self::PeopleCount => b.people_count.map(|p| SortKey::Number(Decimal::from(p))),
            Self::DepositAmount => money(b.deposit_amount),
            Self::CustomerName => text(&b.customer_details.name),
            Self::CustomerEmail => text(&b.customer_details.email),
            Self::CustomerPhone => text(&b.customer_details.phone),
            Self::BasePrice => money(b.pricing.base_price),
            Self::AddonsPrice => money(b.pricing.addons_price),
            Self::Total => money(b.pricing.total),
            Self::Balance => money(Some(b.balance())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.path() == s)
            .ok_or_else(|| format!("unknown sort field: {}", s))
    }
}

impl TryFrom<String> for SortField {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SortField> for String {
    fn from(field: SortField) -> Self {
        field.path().to_string()
    }
}

/// Comparable field value; a given field always yields the same variant
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Number(Decimal),
    Text(Cow<'a, str>),
    Date(NaiveDate),
    Time(DateTime<Utc>),
}

/// Filter and sort settings for the booking list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingFilters {
    pub status: Facet<BookingStatus>,
    pub delivery_type: Facet<DeliveryType>,
    /// `menu` matches every booking that is not a custom order
    pub source_type: Facet<SourceType>,
    /// Case-insensitive; matched against name, email, phone and reference
    pub search: String,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

impl BookingFilters {
    pub fn matches(&self, booking: &Booking) -> bool {
        self.status.matches(&booking.status)
            && match (&self.delivery_type, booking.delivery_type) {
                (Facet::All, _) => true,
                (Facet::Only(wanted), Some(actual)) => *wanted == actual,
                (Facet::Only(_), None) => false,
            }
            && self.source_type.matches(&booking.source_type())
            && matches_search(booking, &self.search)
    }

    fn compare(&self, a: &Booking, b: &Booking) -> Ordering {
        let Some(field) = self.sort_by else {
            return Ordering::Equal;
        };
        match (field.key(a), field.key(b)) {
            (Some(x), Some(y)) => match self.sort_order {
                SortOrder::Asc => x.cmp(&y),
                SortOrder::Desc => y.cmp(&x),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Substring of `name email phone reference`, case-insensitive
fn matches_search(booking: &Booking, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let customer = &booking.customer_details;
    let haystack = [
        customer.name.as_str(),
        customer.email.as_str(),
        customer.phone.as_str(),
        booking.booking_reference.as_str(),
    ]
    .join(" ")
    .to_lowercase();
    haystack.contains(&needle)
}

/// Filter (logical AND of all facets) then stable-sort a booking snapshot
pub fn apply(bookings: &[Booking], filters: &BookingFilters) -> Vec<Booking> {
    let mut out: Vec<Booking> = bookings
        .iter()
        .filter(|b| filters.matches(b))
        .cloned()
        .collect();
    if filters.sort_by.is_some() {
        out.sort_by(|a, b| filters.compare(a, b));
    }
    out
}

/// Human label for a facet option
pub trait FacetLabel {
    fn facet_label(&self) -> &'static str;
}

impl FacetLabel for BookingStatus {
    fn facet_label(&self) -> &'static str {
        self.label()
    }
}

impl FacetLabel for DeliveryType {
    fn facet_label(&self) -> &'static str {
        self.as_str()
    }
}

impl FacetLabel for SourceType {
    fn facet_label(&self) -> &'static str {
        self.order_kind()
    }
}

/// Count of bookings matching one facet value alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacetCount<T> {
    pub value: T,
    pub count: usize,
}

impl<T: FacetLabel> FacetCount<T> {
    /// e.g. `Confirmed (12)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.value.facet_label(), self.count)
    }
}

/// Per-value counts over an unfiltered snapshot; every candidate value is
/// listed, zero counts included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetCounts {
    pub total: usize,
    pub status: Vec<FacetCount<BookingStatus>>,
    pub delivery_type: Vec<FacetCount<DeliveryType>>,
    pub source_type: Vec<FacetCount<SourceType>>,
}

impl FacetCounts {
    pub fn status_count(&self, status: BookingStatus) -> usize {
        count_of(&self.status, status)
    }

    pub fn delivery_type_count(&self, delivery_type: DeliveryType) -> usize {
        count_of(&self.delivery_type, delivery_type)
    }

    pub fn source_type_count(&self, source_type: SourceType) -> usize {
        count_of(&self.source_type, source_type)
    }

    /// Label of the `"all"` option, e.g. `All (40)`
    pub fn all_label(&self) -> String {
        format!("All ({})", self.total)
    }
}

fn count_of<T: PartialEq>(counts: &[FacetCount<T>], value: T) -> usize {
    counts
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.count)
        .unwrap_or(0)
}

fn count_each<T: Copy, F>(values: &[T], bookings: &[Booking], pred: F) -> Vec<FacetCount<T>>
where
    F: Fn(&Booking, T) -> bool,
{
    values
        .iter()
        .map(|&value| FacetCount {
            value,
            count: bookings.iter().filter(|b| pred(b, value)).count(),
        })
        .collect()
}

/// Facet counts for the full, unfiltered booking set
pub fn facet_counts(bookings: &[Booking]) -> FacetCounts {
    FacetCounts {
        total: bookings.len(),
        status: count_each(&BookingStatus::ALL, bookings, |b, s| b.status == s),
        delivery_type: count_each(&DeliveryType::ALL, bookings, |b, d| {
            b.delivery_type == Some(d)
        }),
        source_type: count_each(&SourceType::ALL, bookings, |b, s| b.source_type() == s),
    }
}
