use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// `YYYY-MM-DD HH:MM:SS [LEVEL] message`
    Standard,
    /// `YYYY-MM-DDTHH:MM:SS[.mmm][Z] [LEVEL] message`
    Iso8601,
    /// `{"timestamp":"...","level":"...","message":"..."}` with exactly
    /// these three keys, in this order, no escape support
    JsonLite,
    /// `[LEVEL] message` (the line carries no timestamp)
    Simple,
    /// Fallback for lines no recognizer claims
    Unknown,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Standard => "standard",
            LogFormat::Iso8601 => "iso8601",
            LogFormat::JsonLite => "json_lite",
            LogFormat::Simple => "simple",
            LogFormat::Unknown => "unknown",
        }
    }
}

/// The one way normalization can fail: a recognizer claimed the line
/// structurally, but none of its candidate layouts parsed the captured
/// timestamp text. Everything else, including completely unrecognized
/// input, succeeds via the UNKNOWN fallback.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("timestamp conversion failed: {text:?} matches no candidate layout")]
    Timestamp { text: String },
}

/// One normalized log line.
///
/// Immutable once constructed; produced fresh per input line with no shared
/// ownership, so each caller owns its result exclusively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// Parsed from the line, or the injected clock's "now" for formats
    /// that carry no timestamp of their own.
    pub timestamp: DateTime<Utc>,
    /// Severity token, verbatim. Not a closed vocabulary; "UNKNOWN" marks
    /// unrecognized input.
    pub level: String,
    /// Payload left after the structural markers are stripped.
    pub message: String,
    /// Extracted key/value pairs. None of the built-in recognizers populate
    /// this today; the contract supports recognizers that do.
    #[serde(serialize_with = "serialize_fields_as_map")]
    pub fields: Vec<(String, String)>,
    /// The matched portion of the input. For the UNKNOWN fallback and all
    /// built-in recognizers this is the entire original line.
    pub raw: String,
}

impl LogRecord {
    /// Degraded record for a line no recognizer claims. Cannot fail.
    pub fn unknown(line: &str, now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            level: "UNKNOWN".to_string(),
            message: line.to_string(),
            fields: Vec::new(),
            raw: line.to_string(),
        }
    }
}

/// Serialize the field association list as a JSON object.
fn serialize_fields_as_map<S>(
    fields: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for (k, v) in fields {
        map.serialize_entry(k, v)?;
    }
    map.end()
}
