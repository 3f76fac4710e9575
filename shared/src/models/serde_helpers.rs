//! Lenient field decoding for documents from the booking service
//!
//! The service stores bookings in MongoDB, so a field may arrive as `null`
//! and dates may arrive as full `Date` timestamps.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// `null` becomes the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `YYYY-MM-DD` or an RFC 3339 timestamp; unparsable text becomes `None`
pub fn calendar_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_calendar_day))
}

/// Calendar day written in the value itself; a timestamp keeps its own date part
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_day() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 14);
        assert_eq!(parse_calendar_day("2024-06-14"), day);
        assert_eq!(parse_calendar_day("2024-06-14T00:00:00.000Z"), day);
        assert_eq!(parse_calendar_day(" 2024-06-14T23:30:00+10:00 "), day);
        assert_eq!(parse_calendar_day("14/06/2024"), None);
        assert_eq!(parse_calendar_day(""), None);
    }
}
