use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::formats::{self, Recognizer};
use super::model::{LogFormat, LogRecord, ParseError};

/// Ordered multi-format dispatch over the built-in recognizers.
///
/// Recognizers are built once at construction and never mutated, so a
/// `LineParser` is safe to share across concurrent callers without locking;
/// each parse call owns its result exclusively.
pub struct LineParser {
    recognizers: [Recognizer; 4],
    clock: Arc<dyn Clock>,
}

impl LineParser {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Construct with an explicit time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        // Order matters! More specific recognizers first: a standard line
        // also satisfies the simple pattern once its timestamp prefix is
        // ignored, so the loose bracket form must come last.
        let recognizers = [
            formats::standard::recognizer(),
            formats::iso8601::recognizer(),
            formats::json_lite::recognizer(),
            formats::simple::recognizer(),
        ];
        Self { recognizers, clock }
    }

    /// Normalize one line of text.
    ///
    /// The first recognizer whose pattern matches the full line is selected
    /// and its extraction result, success or failure, is final. Lines no
    /// recognizer claims become UNKNOWN records; the only error is a
    /// timestamp conversion failure on a structurally matched line.
    pub fn parse(&self, line: &str) -> Result<LogRecord, ParseError> {
        self.parse_tagged(line).map(|(_, record)| record)
    }

    /// Like [`parse`](Self::parse), also naming the recognizer that claimed
    /// the line.
    pub fn parse_tagged(&self, line: &str) -> Result<(LogFormat, LogRecord), ParseError> {
        for recognizer in &self.recognizers {
            if let Some(caps) = recognizer.matches(line) {
                let record = recognizer.extract(&caps, self.clock.as_ref())?;
                return Ok((recognizer.format(), record));
            }
        }
        Ok((
            LogFormat::Unknown,
            LogRecord::unknown(line, self.clock.now()),
        ))
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
