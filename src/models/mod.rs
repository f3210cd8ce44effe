pub mod activity;
pub mod link;
pub mod participant;
pub mod trip;

use chrono::{DateTime, NaiveDateTime};

use crate::error::AppError;

/// Parses an ISO-8601 date-time. A trailing offset is accepted but dropped,
/// keeping the wall-clock time as written.
pub fn parse_datetime(field: &str, raw: &str) -> Result<NaiveDateTime, AppError> {
    let raw = raw.trim();
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(naive);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(naive);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .map_err(|_| AppError::BadRequest(format!("{field} is not a valid ISO-8601 date-time: {raw:?}")))
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_plain_local_datetime() {
        let parsed = parse_datetime("starts_at", "2024-01-01T00:00:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn accepts_fractions_and_missing_seconds() {
        assert!(parse_datetime("x", "2024-07-15T09:30:00.250").is_ok());
        let parsed = parse_datetime("x", "2024-07-15T09:30").unwrap();
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn offset_is_dropped_not_converted() {
        let parsed = parse_datetime("x", "2024-07-15T09:30:00+02:00").unwrap();
        assert_eq!(parsed.hour(), 9);
    }

    #[test]
    fn garbage_is_a_client_error() {
        let err = parse_datetime("ends_at", "next tuesday").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("ends_at")));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("title", "   ").is_err());
        assert_eq!(require_text("title", " Louvre ").unwrap(), "Louvre");
    }
}
