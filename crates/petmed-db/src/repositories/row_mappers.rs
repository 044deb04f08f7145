//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a `CURRENT_TIMESTAMP` column ("YYYY-MM-DD HH:MM:SS") into a
/// `DateTime<Utc>`. Unparseable values fall back to now rather than
/// failing the whole read.
pub fn parse_datetime(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_sqlite_current_timestamp_format() {
        let dt = parse_datetime("2025-06-01 14:30:05");
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.second(), 5);
    }

    #[test]
    fn parses_fractional_seconds() {
        let dt = parse_datetime("2025-06-01 14:30:05.123");
        assert_eq!(dt.minute(), 30);
    }
}
