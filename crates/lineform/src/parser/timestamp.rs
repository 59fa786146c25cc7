use chrono::{DateTime, NaiveDateTime, Utc};

use super::model::ParseError;

/// One candidate textual timestamp layout.
///
/// Each recognizer supplies its own ordered candidate list; conversion walks
/// the list and the first layout that parses wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// `2024-01-01 12:00:00`
    SpaceSeconds,
    /// `2024-01-01 12:00:00.123` — exactly three fractional digits
    SpaceMillis,
    /// RFC 3339: trailing `Z` or numeric offset, optional fraction
    Rfc3339,
    /// `2024-01-01T12:00:00.123` — no zone, exactly three fractional digits
    IsoMillis,
}

impl TimeLayout {
    fn parse(self, text: &str) -> Option<DateTime<Utc>> {
        match self {
            TimeLayout::SpaceSeconds => naive_utc(text, "%Y-%m-%d %H:%M:%S"),
            TimeLayout::SpaceMillis => naive_utc(text, "%Y-%m-%d %H:%M:%S.%3f"),
            TimeLayout::Rfc3339 => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            TimeLayout::IsoMillis => naive_utc(text, "%Y-%m-%dT%H:%M:%S.%3f"),
        }
    }
}

/// Zone-less layouts are taken as UTC.
fn naive_utc(text: &str, fmt: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, fmt)
        .ok()
        .map(|dt| dt.and_utc())
}

/// Convert `text` by trying `candidates` in order; first success wins.
///
/// Fails only when every candidate layout is exhausted.
pub fn normalize(candidates: &[TimeLayout], text: &str) -> Result<DateTime<Utc>, ParseError> {
    candidates
        .iter()
        .find_map(|layout| layout.parse(text))
        .ok_or_else(|| ParseError::Timestamp {
            text: text.to_string(),
        })
}
