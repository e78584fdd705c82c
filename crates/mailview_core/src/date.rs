//! Human-readable timestamps for the message list and preview.
use chrono::{DateTime, FixedOffset, Local};

/// Local-time rendering, e.g. `Thu Jan 01 1970 01:00:00 GMT+0100`.
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Text shown for instants that cannot be represented.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats milliseconds since the Unix epoch in the local time zone.
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(&Local).format(DATE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Formats an RFC 3339 timestamp (as sent by the mail store) in the local
/// time zone. Unparseable input is returned unchanged.
pub fn format_created(created: &str) -> String {
    match DateTime::parse_from_rfc3339(created) {
        Ok(instant) => instant
            .with_timezone(&Local)
            .format(DATE_FORMAT)
            .to_string(),
        Err(_) => created.to_string(),
    }
}

/// Parses text produced by [`format_timestamp`] or [`format_created`].
pub fn parse_formatted(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(text, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_round_trips_through_local_format() {
        let text = format_timestamp(0);
        assert!(!text.is_empty());
        let parsed = parse_formatted(&text).expect("parse formatted epoch");
        assert_eq!(parsed.timestamp_millis(), 0);
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        let parsed = parse_formatted(&format_timestamp(1_500)).unwrap();
        assert_eq!(parsed.timestamp_millis(), 1_000);
    }

    #[test]
    fn out_of_range_is_invalid_date() {
        assert_eq!(format_timestamp(i64::MAX), INVALID_DATE);
    }

    #[test]
    fn created_uses_same_format() {
        let text = format_created("2014-04-19T14:08:31.123+01:00");
        let parsed = parse_formatted(&text).unwrap();
        assert_eq!(parsed.timestamp(), 1_397_912_911);
    }

    #[test]
    fn created_falls_back_to_raw_text() {
        assert_eq!(format_created("yesterday"), "yesterday");
    }
}
