/// Individual format recognizers
///
/// Each file owns one structural pattern and one extraction routine. The
/// recognizers are a closed, ordered set of value-type descriptors; dispatch
/// order lives in [`engine`](crate::parser::engine), not here.
pub mod iso8601;
pub mod json_lite;
pub mod simple;
pub mod standard;

use regex::{Captures, Regex};

use super::clock::Clock;
use super::model::{LogFormat, LogRecord, ParseError};

/// A structural pattern paired with its extraction routine.
///
/// Built once at parser construction, never mutated, and free of per-call
/// state, so one set serves any number of concurrent parse calls without
/// synchronization.
pub struct Recognizer {
    format: LogFormat,
    pattern: Regex,
    handler: fn(&Captures<'_>, &dyn Clock) -> Result<LogRecord, ParseError>,
}

impl Recognizer {
    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Test the structural pattern against a full line.
    pub fn matches<'t>(&self, line: &'t str) -> Option<Captures<'t>> {
        self.pattern.captures(line)
    }

    /// Run the extraction routine over a successful structural match.
    ///
    /// Pure given the clock; may only fail on timestamp conversion.
    pub fn extract(
        &self,
        caps: &Captures<'_>,
        clock: &dyn Clock,
    ) -> Result<LogRecord, ParseError> {
        (self.handler)(caps, clock)
    }
}
