//! Property tests for report rendering.

use proptest::prelude::*;

use vcdisclose::generate_full_report;
use vcdisclose::report::{format_currency, generate_markdown_report, RenderOptions};

use crate::strategies::businesses;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: currency formatting keeps the exact cents and groups thousands.
    #[test]
    fn property_currency_strips_back_to_cents(cents in 0u64..=1_000_000_000_000) {
        let formatted = format_currency(cents as f64 / 100.0);
        prop_assert!(formatted.starts_with('$'));

        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits.parse::<u64>().unwrap(), cents);

        let whole = formatted.trim_start_matches('$').split('.').next().unwrap_or("");
        for (i, group) in whole.split(',').enumerate() {
            if i == 0 {
                prop_assert!((1..=3).contains(&group.len()));
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }

    /// PROPERTY: every funded business is listed in the Markdown report.
    #[test]
    fn property_markdown_lists_every_business(businesses in businesses()) {
        let report = generate_full_report(2025, "Property Fund", &businesses);
        let markdown = generate_markdown_report(&report, &RenderOptions::default());

        for business in &businesses {
            let row = format!("| {} | {} |", business.company_name, format_currency(business.total_investment_amount));
            prop_assert!(markdown.contains(&row), "missing row {}", row);
        }
    }
}
