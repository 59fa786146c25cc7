use regex::{Captures, Regex};

use super::Recognizer;
use crate::parser::clock::Clock;
use crate::parser::model::{LogFormat, LogRecord, ParseError};
use crate::parser::timestamp::{self, TimeLayout};

/// JSON-lite format: `{"timestamp":"...","level":"...","message":"..."}`
/// with exactly these three keys in this order and double-quoted values.
///
/// Not a JSON parser: the message is the span between the third pair of
/// quotes, so escaped quotes and nested braces are unsupported. Lines using
/// them fail the structural match and fall through to later recognizers.
const PATTERN: &str = r#"^\s*\{\s*"timestamp"\s*:\s*"([^"]+)"\s*,\s*"level"\s*:\s*"([^"]+)"\s*,\s*"message"\s*:\s*"([^"]+)"\s*\}\s*$"#;

/// Single candidate, no fallback.
const LAYOUTS: &[TimeLayout] = &[TimeLayout::Rfc3339];

pub fn recognizer() -> Recognizer {
    Recognizer {
        format: LogFormat::JsonLite,
        pattern: Regex::new(PATTERN).expect("json-lite pattern is valid"),
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
