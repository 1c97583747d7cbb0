//! Markdown and JSON report generation.
//!
//! Renderers only format the values handed to them. Percentages arrive
//! unrounded and are rounded here; currency is printed as US dollars.

use crate::models::{
    InvestmentDetail, PartIData, PartIIItem1And2, PartIIItem3Data, ReportData,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

/// Presentation settings for the rendered report.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Decimal places printed for percentages.
    pub percent_decimals: usize,
    /// Timestamp printed in the metadata section.
    pub generated_at: DateTime<Utc>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            percent_decimals: 1,
            generated_at: Utc::now(),
        }
    }
}

/// Format a percentage value with a trailing `%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Format a dollar amount as `$1,234,567.89`.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &ReportData, options: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str("# Venture Capital Demographic Data Report\n\n");

    output.push_str(&generate_metadata_section(report, options));
    output.push_str(&generate_table_of_contents());
    output.push_str(&generate_part_i_section(&report.part_i));
    output.push_str(&generate_items_1_and_2_section(
        &report.part_ii.item1_and_2,
        options,
    ));
    output.push_str(&generate_item_3_section(&report.part_ii.item3, options));
    output.push_str(&generate_part_iii_section(
        report.calendar_year,
        &report.investment_details,
    ));
    output.push_str(&generate_certification_section());
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(report: &ReportData, options: &RenderOptions) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!(
        "- **Covered Entity (VC Firm):** {}\n",
        report.vc_firm_name
    ));
    section.push_str(&format!("- **Calendar Year:** {}\n", report.calendar_year));
    section.push_str(&format!(
        "- **Total Survey Responses Received:** {}\n",
        report.part_i.total_responses
    ));
    section.push_str(&format!(
        "- **Businesses Funded:** {}\n",
        report.investment_details.len()
    ));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        options.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push('\n');

    section
}

fn generate_table_of_contents() -> String {
    let mut toc = String::new();

    toc.push_str("## Table of Contents\n\n");
    toc.push_str("- [Metadata](#metadata)\n");
    toc.push_str("- [Part I: Aggregated Survey Demographic Data Responses](#part-i)\n");
    toc.push_str("- [Part II: Investments to Diverse Founding Teams](#part-ii)\n");
    toc.push_str("  - [Items 1 and 2](#items-1-and-2)\n");
    toc.push_str("  - [Item 3](#item-3)\n");
    toc.push_str("- [Part III: Investment Details](#part-iii)\n");
    toc.push('\n');

    toc
}

/// Generate Part I: one count table per category.
fn generate_part_i_section(part_i: &PartIData) -> String {
    let mut section = String::new();

    section.push_str(&anchor("part-i"));
    section.push_str("## Part I: Aggregated Survey Demographic Data Responses\n\n");
    section.push_str(
        "*Respondents may select multiple options within each category; \
         totals may exceed the number of respondents.*\n\n",
    );

    for tally in &part_i.demographics {
        section.push_str(&format!("### {}\n\n", tally.title));
        section.push_str("| Response Option | Count |\n");
        section.push_str("|:---|---:|\n");
        for count in &tally.counts {
            section.push_str(&format!("| {} | {} |\n", count.label, count.count));
        }
        section.push('\n');
    }

    section.push_str("### Decline to State for All Responses\n\n");
    section.push_str("| Response Option | Count |\n");
    section.push_str("|:---|---:|\n");
    section.push_str(&format!(
        "| Decline to state for all responses | {} |\n\n",
        part_i.decline_all_count
    ));

    section
}

/// Generate Part II Items 1 and 2.
fn generate_items_1_and_2_section(item: &PartIIItem1And2, options: &RenderOptions) -> String {
    let mut section = String::new();

    section.push_str(&anchor("part-ii"));
    section.push_str(
        "## Part II: Investments to Businesses Primarily Founded by Diverse Founding Team Members\n\n",
    );

    section.push_str(&anchor("items-1-and-2"));
    section.push_str("### Item 1: By Number of Investments\n\n");
    section.push_str("| | |\n|:---|---:|\n");
    section.push_str(&format!(
        "| Number of VC investments to businesses primarily founded by diverse founding team members | {} |\n",
        item.diverse_investment_count
    ));
    section.push_str(&format!(
        "| Total number of VC investments | {} |\n",
        item.total_investment_count
    ));
    section.push_str(&format!(
        "| **Percentage** | **{}** |\n\n",
        format_percent(item.diverse_investment_percentage, options.percent_decimals)
    ));

    section.push_str("### Item 2: By Dollar Amount of Investments\n\n");
    section.push_str("| | |\n|:---|---:|\n");
    section.push_str(&format!(
        "| Dollar amount of VC investments to businesses primarily founded by diverse founding team members | {} |\n",
        format_currency(item.diverse_investment_dollars)
    ));
    section.push_str(&format!(
        "| Total dollar amount of VC investments | {} |\n",
        format_currency(item.total_investment_dollars)
    ));
    section.push_str(&format!(
        "| **Percentage** | **{}** |\n\n",
        format_percent(item.diverse_dollar_percentage, options.percent_decimals)
    ));

    section
}

/// Generate Part II Item 3: one row per demographic option.
fn generate_item_3_section(item3: &PartIIItem3Data, options: &RenderOptions) -> String {
    let mut section = String::new();

    section.push_str(&anchor("item-3"));
    section.push_str("### Item 3: Breakdown by Demographic Category\n\n");
    section.push_str(
        "*A business qualifies for a demographic option if it is primarily founded by diverse \
         founding team members and at least one responding founder selected that option.*\n\n",
    );
    section.push_str("| Category | Response Option | (A) % by Number | (B) % by Dollars |\n");
    section.push_str("|:---|:---|---:|---:|\n");

    for row in &item3.categories {
        let category = row.field.category().map(|c| c.title()).unwrap_or("");
        section.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            category,
            row.label,
            format_percent(row.investment_count_percentage, options.percent_decimals),
            format_percent(row.investment_dollar_percentage, options.percent_decimals),
        ));
    }
    section.push('\n');

    section
}

/// Generate Part III: investment details.
fn generate_part_iii_section(calendar_year: i32, details: &[InvestmentDetail]) -> String {
    let mut section = String::new();

    section.push_str(&anchor("part-iii"));
    section.push_str("## Part III: Investment Details\n\n");

    if details.is_empty() {
        section.push_str(&format!(
            "No businesses received venture capital investment in {}.\n\n",
            calendar_year
        ));
        return section;
    }

    section.push_str(&format!(
        "*Amount of venture capital investment and principal place of business for each \
         business receiving funding in calendar year {}.*\n\n",
        calendar_year
    ));
    section.push_str("| Business Name | Total VC Investment | Principal Place of Business |\n");
    section.push_str("|:---|---:|:---|\n");

    for detail in details {
        section.push_str(&format!(
            "| {} | {} | {} |\n",
            escape_cell(&detail.business_name),
            format_currency(detail.total_investment_amount),
            escape_cell(&detail.principal_place_of_business),
        ));
    }
    section.push('\n');

    section
}

fn generate_certification_section() -> String {
    let mut section = String::new();

    section.push_str("## Certification\n\n");
    section.push_str(
        "I certify that the information provided in this report is true and correct \
         to the best of my knowledge.\n\n",
    );
    for line in ["Signature", "Name", "Title", "Date"] {
        section.push_str(&format!("{}: ________________________________\n\n", line));
    }

    section
}

fn generate_footer() -> String {
    "---\n\n*Report generated by vcdisclose*\n".to_string()
}

/// Link target for a table of contents entry. The blank line keeps the
/// following heading out of the HTML block.
fn anchor(id: &str) -> String {
    format!("<a id=\"{}\"></a>\n\n", id)
}

/// Pipes would split a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Write the Markdown report to a file.
pub fn write_report(report: &ReportData, options: &RenderOptions, path: &Path) -> Result<()> {
    let content = generate_markdown_report(report, options);

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(())
}

/// Generate a JSON report.
pub fn generate_json_report(report: &ReportData) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
