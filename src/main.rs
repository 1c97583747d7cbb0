//! vcdisclose - Venture Capital Demographic Data Report generator
//!
//! Reads a firm's portfolio records and writes the annual demographic data
//! report for one calendar year.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any error (invalid arguments, unreadable or invalid records, write failure)

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use vcdisclose::cli::{Args, OutputFormat};
use vcdisclose::config::{Config, CONFIG_FILE_NAME};
use vcdisclose::report::{self, format_currency, format_percent, RenderOptions};
use vcdisclose::{generate_full_report, is_primarily_diverse, Portfolio};

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    // Load configuration before logging so the file can turn on verbose output
    let config = match load_config(&args) {
        Ok(mut config) => {
            config.merge_with_args(&args);
            config
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = init_logging(config.log_level(args.quiet)) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    info!("vcdisclose v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    if let Err(e) = run(args, config) {
        error!("Report generation failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Handle --init-config: generate a default .vcdisclose.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to set the firm name, output path and report format.");
    Ok(())
}

/// Initialize logging at the given level.
fn init_logging(level: tracing::Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Load the records and produce the report (or the dry-run roll-up).
fn run(args: Args, config: Config) -> Result<()> {
    let input = args
        .input
        .as_deref()
        .context("An --input file is required")?;
    let year = args.year.unwrap_or_else(|| Local::now().year());

    println!("📥 Loading portfolio records: {}", input.display());
    let portfolio = Portfolio::load(input)
        .with_context(|| format!("Failed to load portfolio from {}", input.display()))?;

    let firm_name = config
        .firm
        .name
        .clone()
        .unwrap_or_else(|| portfolio.firm.name.clone());
    info!("Reporting firm: {}, calendar year {}", firm_name, year);

    if args.dry_run {
        handle_dry_run(&portfolio, year);
        return Ok(());
    }

    let businesses = portfolio.businesses_for_year(year);
    if businesses.is_empty() {
        warn!("No investments recorded for {}; the report will be empty", year);
    }

    println!("\n📝 Generating {} report for {}...", year, firm_name);
    let report_data = generate_full_report(year, &firm_name, &businesses);

    let options = RenderOptions {
        percent_decimals: config.report.percent_decimals,
        generated_at: Utc::now(),
    };

    let output_path = resolve_output_path(&args, &config);
    match config.report.format {
        OutputFormat::Json => {
            let output = report::generate_json_report(&report_data)?;
            std::fs::write(&output_path, &output).with_context(|| {
                format!("Failed to write report to {}", output_path.display())
            })?;
        }
        OutputFormat::Markdown => report::write_report(&report_data, &options, &output_path)?,
    }

    let items = &report_data.part_ii.item1_and_2;
    println!("\n📊 Report Summary:");
    println!("   Survey responses: {}", report_data.part_i.total_responses);
    println!(
        "   Businesses funded: {} ({} investments)",
        report_data.investment_details.len(),
        items.total_investment_count
    );
    println!(
        "   Diverse-founded: {} by number, {} by dollars",
        format_percent(items.diverse_investment_percentage, options.percent_decimals),
        format_percent(items.diverse_dollar_percentage, options.percent_decimals)
    );
    println!(
        "\n✅ Report complete! Saved to: {}",
        output_path.display()
    );

    Ok(())
}

/// Handle --dry-run: print the per-company roll-up and survey progress.
fn handle_dry_run(portfolio: &Portfolio, year: i32) {
    println!("\n🔍 Dry run: records are valid (no report written)\n");

    let status = portfolio.survey_status(year);
    println!("   Calendar year: {}", status.calendar_year);
    println!("   Portfolio companies (all years): {}", status.portfolio_companies);
    println!(
        "   Investments: {} totaling {}",
        status.total_investments,
        format_currency(status.total_investment_amount)
    );
    println!(
        "   Surveys: {} sent, {} completed ({} response rate)",
        status.surveys_sent,
        status.surveys_completed,
        format_percent(status.response_rate, 1)
    );

    let businesses = portfolio.businesses_for_year(year);
    if businesses.is_empty() {
        println!("\n   No businesses received investment in {}.", year);
    } else {
        println!("\n   {} businesses would be reported:\n", businesses.len());
        for business in &businesses {
            let marker = if is_primarily_diverse(business.total_founders, &business.responses) {
                "diverse"
            } else {
                "-"
            };
            println!(
                "     🏢 {} | {} | {}/{} responses | {}",
                business.company_name,
                format_currency(business.total_investment_amount),
                business.responses.len(),
                business.total_founders,
                marker
            );
        }
    }

    println!("\n✅ Dry run complete.");
}

/// Pick the output path, switching a default `.md` name to `.json` for JSON output.
fn resolve_output_path(args: &Args, config: &Config) -> PathBuf {
    let path = PathBuf::from(&config.general.output);
    let is_markdown_name = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false);

    if args.output.is_none() && config.report.format == OutputFormat::Json && is_markdown_name {
        path.with_extension("json")
    } else {
        path
    }
}

/// Load configuration from file or use defaults.
///
/// Runs before logging is set up, so problems go straight to stderr.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("Warning: ignoring {}: {:#}", CONFIG_FILE_NAME, e);
            Ok(Config::default())
        }
    }
}
