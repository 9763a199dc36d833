//! Parsing of catalog timestamp strings.
//!
//! The dump mixes timestamp shapes: RFC 3339 with an offset, bare
//! date-times, and plain dates. Classification compares everything as
//! timezone-naive date-times, so offsets are stripped rather than
//! converted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a catalog timestamp string into a timezone-naive date-time.
///
/// Accepted shapes, tried in order:
/// 1. RFC 3339 (`2019-03-01T12:30:00+02:00`) - the offset is dropped and
///    the local clock reading kept
/// 2. Bare date-time (`2019-03-01T12:30:00` or with a space separator,
///    optional fractional seconds)
/// 3. Bare date (`2019-03-01`), read as midnight
///
/// Returns `None` when no shape matches.
pub fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_rfc3339_offset_is_stripped_not_converted() {
        let parsed = parse_naive_datetime("2019-03-01T12:30:00+02:00").unwrap();
        // Naive comparison keeps the clock reading as written
        assert_eq!(parsed.hour(), 12);
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
    }

    #[test]
    fn test_bare_datetime() {
        let parsed = parse_naive_datetime("2019-03-01T12:30:00").unwrap();
        assert_eq!(parsed.hour(), 12);

        let parsed = parse_naive_datetime("2019-03-01 12:30:00.250").unwrap();
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn test_bare_date_reads_as_midnight() {
        let parsed = parse_naive_datetime("2024-01-01").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_naive_datetime("").is_none());
        assert!(parse_naive_datetime("yesterday").is_none());
        assert!(parse_naive_datetime("2024-13-40").is_none());
    }
}
