//! Creation timestamp formatting.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::models::DisplayValue;

/// `ru-RU` date-time convention: day.month.year, 24-hour clock.
pub const RU_DATE_TIME: &str = "%d.%m.%Y, %H:%M:%S";

/// Formats an RFC 3339 `date_created` in `tz` using [`RU_DATE_TIME`].
///
/// An absent value formats as `""`; a value that is not an RFC 3339 string
/// is returned as sent.
pub fn format_creation_date<Tz>(value: &DisplayValue, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if value.is_empty() {
        return String::new();
    }

    match value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    {
        Some(created) => created.with_timezone(tz).format(RU_DATE_TIME).to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn formats_in_target_zone() {
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        let value = DisplayValue::from("2024-11-03T21:05:09.123456Z");
        assert_eq!(
            format_creation_date(&value, &moscow),
            "04.11.2024, 00:05:09"
        );
        assert_eq!(format_creation_date(&value, &Utc), "03.11.2024, 21:05:09");
    }

    #[test]
    fn keeps_source_offset_semantics() {
        let value = DisplayValue::from("2024-01-02T03:04:05+05:00");
        assert_eq!(format_creation_date(&value, &Utc), "01.01.2024, 22:04:05");
    }

    #[test]
    fn absent_value_is_empty() {
        assert_eq!(format_creation_date(&DisplayValue::default(), &Utc), "");
    }

    #[test]
    fn unparseable_value_is_shown_as_sent() {
        let value = DisplayValue::from("yesterday");
        assert_eq!(format_creation_date(&value, &Utc), "yesterday");
        let epoch = DisplayValue::from(1_700_000_000_i64);
        assert_eq!(format_creation_date(&epoch, &Utc), "1700000000");
    }
}
