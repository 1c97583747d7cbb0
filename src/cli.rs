//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation.

use crate::config::MAX_PERCENT_DECIMALS;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// vcdisclose - Venture Capital Demographic Data Report generator
///
/// Builds the annual demographic data report for a venture capital firm from
/// its portfolio records: aggregated founder survey responses, investments
/// in businesses primarily founded by diverse founding team members, and the
/// per-business investment listing.
///
/// Examples:
///   vcdisclose --input portfolio.json --year 2025
///   vcdisclose --input portfolio.toml --year 2025 --format json -o report.json
///   vcdisclose --input portfolio.json --year 2025 --dry-run
///   vcdisclose --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Portfolio records file (JSON or TOML)
    ///
    /// Files ending in .json are read as JSON, anything else as TOML.
    #[arg(short, long, value_name = "FILE", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Calendar year to report on
    ///
    /// Defaults to the current calendar year.
    #[arg(short, long, value_name = "YEAR", env = "VCDISCLOSE_YEAR")]
    pub year: Option<i32>,

    /// Firm name printed on the report
    ///
    /// Overrides the config file and the name in the portfolio file.
    #[arg(long, value_name = "NAME")]
    pub firm: Option<String>,

    /// Output file path for the report
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Decimal places printed for percentages
    #[arg(long, value_name = "DIGITS")]
    pub percent_decimals: Option<usize>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .vcdisclose.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run: validate the records and print the per-company roll-up
    ///
    /// Shows survey progress and which businesses the report would cover,
    /// without writing a report.
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .vcdisclose.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

/// Years accepted by `--year`.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=9999;

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(year) = self.year {
            if !YEAR_RANGE.contains(&year) {
                return Err(format!(
                    "Year must be between {} and {}",
                    YEAR_RANGE.start(),
                    YEAR_RANGE.end()
                ));
            }
        }

        if let Some(decimals) = self.percent_decimals {
            if decimals > MAX_PERCENT_DECIMALS {
                return Err(format!(
                    "Percent decimals must be at most {}",
                    MAX_PERCENT_DECIMALS
                ));
            }
        }

        match self.input {
            Some(ref input) if !input.exists() => {
                Err(format!("Input file does not exist: {}", input.display()))
            }
            Some(ref input) if !input.is_file() => {
                Err(format!("Input path is not a file: {}", input.display()))
            }
            Some(_) => Ok(()),
            None => Err("An --input file is required".to_string()),
        }
    }
}
