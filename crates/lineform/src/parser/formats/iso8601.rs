use regex::{Captures, Regex};

use super::Recognizer;
use crate::parser::clock::Clock;
use crate::parser::model::{LogFormat, LogRecord, ParseError};
use crate::parser::timestamp::{self, TimeLayout};

/// ISO 8601 format: `2024-01-01T12:00:00[.123][Z] [INFO] message`
const PATTERN: &str =
    r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?Z?)\s+\[(\w+)\]\s+(.+)$";

/// Full zone-aware layout first, then the zone-less millisecond variant.
const LAYOUTS: &[TimeLayout] = &[TimeLayout::Rfc3339, TimeLayout::IsoMillis];

pub fn recognizer() -> Recognizer {
    Recognizer {
        format: LogFormat::Iso8601,
        pattern: Regex::new(PATTERN).expect("iso8601 pattern is valid"),
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
