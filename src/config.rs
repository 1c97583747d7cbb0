//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.vcdisclose.toml` files.

use crate::cli::{Args, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".vcdisclose.toml";

/// Largest `percent_decimals` accepted from the file or the command line.
pub const MAX_PERCENT_DECIMALS: usize = 6;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Reporting firm settings.
    #[serde(default)]
    pub firm: FirmConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "vc_demographic_report.md".to_string()
}

/// Reporting firm settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirmConfig {
    /// Firm name printed on the report. Falls back to the portfolio file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Report rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places printed for percentages.
    #[serde(default = "default_percent_decimals")]
    pub percent_decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            percent_decimals: default_percent_decimals(),
        }
    }
}

fn default_percent_decimals() -> usize {
    1
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(ref output) = args.output {
            self.general.output = output.to_string_lossy().to_string();
        }
        if let Some(ref firm) = args.firm {
            self.firm.name = Some(firm.clone());
        }
        if let Some(format) = args.format {
            self.report.format = format;
        }
        if let Some(decimals) = args.percent_decimals {
            self.report.percent_decimals = decimals;
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Check settings that can come from the file as well as the command line.
    pub fn validate(&self) -> Result<(), String> {
        if self.report.percent_decimals > MAX_PERCENT_DECIMALS {
            return Err(format!(
                "Percent decimals must be at most {} (got {})",
                MAX_PERCENT_DECIMALS, self.report.percent_decimals
            ));
        }
        if self.general.output.trim().is_empty() {
            return Err("Output path must not be empty".to_string());
        }
        Ok(())
    }

    /// Log level for the merged settings. `--quiet` wins over `verbose`.
    pub fn log_level(&self, quiet: bool) -> tracing::Level {
        if quiet {
            tracing::Level::ERROR
        } else if self.general.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
