use regex::{Captures, Regex};

use super::Recognizer;
use crate::parser::clock::Clock;
use crate::parser::model::{LogFormat, LogRecord, ParseError};
use crate::parser::timestamp::{self, TimeLayout};

/// Space-delimited standard format: `2024-01-01 12:00:00[.123] [INFO] message`
const PATTERN: &str =
    r"^(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}(?:\.\d+)?)\s+\[(\w+)\]\s+(.+)$";

/// Seconds first, then the three-digit-millisecond variant.
const LAYOUTS: &[TimeLayout] = &[TimeLayout::SpaceSeconds, TimeLayout::SpaceMillis];

pub fn recognizer() -> Recognizer {
    Recognizer {
        format: LogFormat::Standard,
        pattern: Regex::new(PATTERN).expect("standard pattern is valid"),
        handler: extract,
    }
}

fn extract(caps: &Captures<'_>, _clock: &dyn Clock) -> Result<LogRecord, ParseError> {
    let timestamp = timestamp::normalize(LAYOUTS, caps[1].trim())?;
    Ok(LogRecord {
        timestamp,
        level: caps[2].to_string(),
        message: caps[3].to_string(),
        fields: Vec::new(),
        raw: caps[0].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::clock::SystemClock;
    use chrono::{TimeZone, Utc};

    fn parse(line: &str) -> Result<LogRecord, ParseError> {
        let rec = recognizer();
        let caps = rec.matches(line).expect("line should match structurally");
        rec.extract(&caps, &SystemClock)
    }

    #[test]
    fn test_extracts_level_and_message() {
        let record = parse("2024-01-01 12:00:00 [INFO] hello").unwrap();
        assert_eq!(record.level, "INFO");
        assert_eq!(record.message, "hello");
        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(record.raw, "2024-01-01 12:00:00 [INFO] hello");
    }

    #[test]
    fn test_millisecond_timestamp() {
        let record = parse("2024-01-01 12:00:00.123 [ERROR] boom").unwrap();
        assert_eq!(record.level, "ERROR");
        assert_eq!(record.message, "boom");
        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
                + chrono::Duration::milliseconds(123)
        );
    }

    #[test]
    fn test_message_keeps_brackets_verbatim() {
        let record = parse("2024-01-01 12:00:00 [WARN] retry [3/5] failed").unwrap();
        assert_eq!(record.message, "retry [3/5] failed");
    }

    #[test]
    fn test_tabs_between_groups() {
        let record = parse("2024-01-01 12:00:00\t[INFO]\tindented").unwrap();
        assert_eq!(record.message, "indented");
    }

    #[test]
    fn test_timestamp_conversion_failure_is_reported() {
        // Structurally valid, but the fraction width defeats both layouts.
        let err = parse("2024-01-01 12:00:00.12 [INFO] hello").unwrap_err();
        assert!(matches!(err, ParseError::Timestamp { .. }));
    }

    #[test]
    fn test_rejects_iso_separator() {
        let rec = recognizer();
        assert!(rec.matches("2024-01-01T12:00:00 [INFO] hello").is_none());
    }

    #[test]
    fn test_rejects_missing_level_bracket() {
        let rec = recognizer();
        assert!(rec.matches("2024-01-01 12:00:00 INFO hello").is_none());
    }
}
