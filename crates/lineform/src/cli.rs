//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Normalize free-form log lines from stdin into structured records.
#[derive(Debug, Parser)]
#[command(name = "lineform", version, about)]
pub struct Cli {
    /// Path to a TOML config file (overrides LINEFORM_CONFIG_FILE).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit records as JSON objects instead of rendered text.
    #[arg(long)]
    pub json: bool,

    /// Abort on the first timestamp conversion failure instead of skipping.
    #[arg(long)]
    pub fail_fast: bool,

    /// Strip ANSI escape sequences before matching.
    #[arg(long)]
    pub strip_ansi: bool,

    /// Log a per-format summary when input ends.
    #[arg(long)]
    pub stats: bool,
}
