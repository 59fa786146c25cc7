/// Log line parsing and normalization module
///
/// Converts free-form text log lines into structured, normalized records
/// regardless of which textual convention produced them.
///
/// # Architecture
///
/// - `model.rs`: record and error types
/// - `engine.rs`: ordered dispatch over the format recognizers
/// - `formats/`: individual format recognizer implementations
/// - `timestamp.rs`: layout-candidate timestamp conversion
/// - `clock.rs`: injected time source
/// - `render.rs`: human-readable record rendering
/// - `metrics.rs`: per-format parse counters
///
/// # Guarantees
///
/// - `parse` always returns a record except for timestamp conversion
///   failures on structurally matched lines
/// - recognizers are built once, immutable, and safe to share
/// - no IO and no logging below this module boundary
pub mod clock;
pub mod engine;
pub mod formats;
pub mod metrics;
pub mod model;
pub mod timestamp;
mod ansi;
mod render;

// Re-export commonly used types
pub use ansi::strip_ansi;
pub use clock::{Clock, SystemClock};
pub use engine::LineParser;
pub use metrics::{MetricsSnapshot, ParseMetrics};
pub use model::{LogFormat, LogRecord, ParseError};
