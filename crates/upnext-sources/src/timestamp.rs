use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an upstream release timestamp into UTC.
///
/// Accepts RFC 3339 (any offset), an offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`
/// which is read as UTC, and a bare `YYYY-MM-DD`. Date-only values are placed
/// at start of day UTC so they sort before anything timed on the same date.
pub fn parse_release_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_utc() {
        assert_eq!(
            parse_release_timestamp("2025-08-21T20:00:00Z"),
            Some(Utc.with_ymd_and_hms(2025, 8, 21, 20, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_rfc3339_with_offset_converts_to_utc() {
        // 01:30 in UTC+02:00 is still the previous day in UTC
        let parsed = parse_release_timestamp("2025-08-22T01:30:00.000+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 8, 21, 23, 30, 0).unwrap());
        assert_eq!(parsed.date_naive(), NaiveDate::from_ymd_opt(2025, 8, 21).unwrap());
    }

    #[test]
    fn test_parse_date_only_is_start_of_day() {
        assert_eq!(
            parse_release_timestamp("2025-08-21"),
            Some(Utc.with_ymd_and_hms(2025, 8, 21, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        assert_eq!(
            parse_release_timestamp("2025-08-21T20:00:00"),
            Some(Utc.with_ymd_and_hms(2025, 8, 21, 20, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_release_timestamp(""), None);
        assert_eq!(parse_release_timestamp("next tuesday"), None);
        assert_eq!(parse_release_timestamp("2025-13-45"), None);
    }
}
