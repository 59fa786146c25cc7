//! Load — config resolution from file, environment, and CLI flags.

use std::path::{Path, PathBuf};

use crate::cli::Cli;

use super::model::{ErrorPolicy, NormalizerConfig, OutputMode};

impl NormalizerConfig {
    /// Resolve the effective configuration.
    /// Priority: CLI flags > environment variables > config file > defaults.
    pub fn load(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = cli
            .config
            .clone()
            .or_else(|| std::env::var("LINEFORM_CONFIG_FILE").ok().map(PathBuf::from));

        let mut config = match config_path {
            Some(path) if path.exists() => {
                tracing::info!("Loading configuration from: {}", path.display());
                Self::from_file(&path)?
            }
            Some(path) => {
                tracing::info!(
                    "Config file not found at {}, using defaults",
                    path.display()
                );
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env()?;
        config.apply_cli(cli);
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: NormalizerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Environment variables override file settings.
    fn apply_env(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Ok(policy) = std::env::var("LINEFORM_ON_ERROR") {
            self.on_error = policy.parse::<ErrorPolicy>()?;
        }
        if let Ok(mode) = std::env::var("LINEFORM_OUTPUT") {
            self.output = mode.parse::<OutputMode>()?;
        }
        if let Ok(v) = std::env::var("LINEFORM_STRIP_ANSI") {
            self.strip_ansi = parse_bool("LINEFORM_STRIP_ANSI", &v)?;
        }
        if let Ok(v) = std::env::var("LINEFORM_STATS") {
            self.stats = parse_bool("LINEFORM_STATS", &v)?;
        }
        Ok(())
    }

    /// CLI flags override everything; absent flags leave values alone.
    fn apply_cli(&mut self, cli: &Cli) {
        if cli.json {
            self.output = OutputMode::Json;
        }
        if cli.fail_fast {
            self.on_error = ErrorPolicy::Abort;
        }
        if cli.strip_ansi {
            self.strip_ansi = true;
        }
        if cli.stats {
            self.stats = true;
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(format!("{name}: expected a boolean, got {other:?}")),
    }
}
