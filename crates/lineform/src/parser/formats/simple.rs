use regex::{Captures, Regex};

use super::Recognizer;
use crate::parser::clock::Clock;
use crate::parser::model::{LogFormat, LogRecord, ParseError};

/// Simple bracket-only format: `[INFO] message`
///
/// Carries no timestamp; records are stamped with the injected clock's
/// "now" at parse time.
const PATTERN: &str = r"^\[(\w+)\]\s+(.+)$";

pub fn recognizer() -> Recognizer {
    Recognizer {
        format: LogFormat::Simple,
        pattern: Regex::new(PATTERN).expect("simple pattern is valid"),
        handler: extract,
    }
}

fn extract(caps: &Captures<'_>, clock: &dyn Clock) -> Result<LogRecord, ParseError> {
    Ok(LogRecord {
        timestamp: clock.now(),
        level: caps[1].to_string(),
        message: caps[2].to_string(),
        fields: Vec::new(),
        raw: caps[0].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_stamps_with_clock_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
        let rec = recognizer();
        let caps = rec.matches("[DEBUG] test").unwrap();
        let record = rec.extract(&caps, &FixedClock(now)).unwrap();

        assert_eq!(record.level, "DEBUG");
        assert_eq!(record.message, "test");
        assert_eq!(record.timestamp, now);
        assert_eq!(record.raw, "[DEBUG] test");
    }

    #[test]
    fn test_level_token_is_free_form() {
        let rec = recognizer();
        for line in ["[NOTICE] x", "[level_2] x", "[7] x"] {
            assert!(rec.matches(line).is_some(), "should match: {line}");
        }
    }

    #[test]
    fn test_rejects_non_word_level() {
        let rec = recognizer();
        assert!(rec.matches("[IN FO] message").is_none());
        assert!(rec.matches("[] message").is_none());
    }

    #[test]
    fn test_requires_whitespace_before_message() {
        let rec = recognizer();
        assert!(rec.matches("[INFO]message").is_none());
    }
}
