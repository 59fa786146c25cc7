//! Boot — logging init, flag parsing, config load, parser construction.

use clap::Parser as _;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::conf::NormalizerConfig;
use crate::parser::{LineParser, ParseMetrics};

/// Initialise the tracing / logging subsystem.
///
/// Diagnostics go to stderr; stdout carries the normalized records.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lineform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Parse flags, resolve configuration, and build the dispatch engine.
pub fn boot() -> Result<(LineParser, NormalizerConfig, ParseMetrics), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = NormalizerConfig::load(&cli)?;
    info!(
        "Configuration: on_error={:?}, output={:?}, strip_ansi={}, stats={}",
        config.on_error, config.output, config.strip_ansi, config.stats
    );

    Ok((LineParser::new(), config, ParseMetrics::new()))
}
