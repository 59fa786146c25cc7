use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do with a line whose recognizer matched structurally but whose
/// timestamp text defeated every candidate layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the failure and continue with the next line.
    Skip,
    /// Stop the run and surface the failure.
    Abort,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(ErrorPolicy::Skip),
            "abort" => Ok(ErrorPolicy::Abort),
            other => Err(format!("unknown error policy {other:?} (expected skip|abort)")),
        }
    }
}

/// Output encoding for normalized records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// `[timestamp] LEVEL: message` lines.
    Text,
    /// One JSON object per record.
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            other => Err(format!("unknown output mode {other:?} (expected text|json)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub on_error: ErrorPolicy,
    pub output: OutputMode,
    pub strip_ansi: bool,
    pub stats: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Skip,
            output: OutputMode::Text,
            strip_ansi: false,
            stats: false,
        }
    }
}
