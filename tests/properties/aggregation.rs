//! Property tests for report aggregation.

use proptest::prelude::*;

use vcdisclose::analysis::{
    compute_investment_details, compute_part_i, compute_part_ii_item_3,
    compute_part_ii_items_1_and_2, flatten_responses,
};
use vcdisclose::{compose_report, generate_full_report, is_primarily_diverse};

use crate::strategies::{businesses, survey_response};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the full report equals its individually computed parts.
    #[test]
    fn property_report_matches_individual_parts(businesses in businesses()) {
        let report = generate_full_report(2025, "Property Fund", &businesses);
        let responses = flatten_responses(&businesses);

        prop_assert_eq!(&report.part_i, &compute_part_i(&responses));
        prop_assert_eq!(&report.part_ii.item1_and_2, &compute_part_ii_items_1_and_2(&businesses));
        prop_assert_eq!(&report.part_ii.item3, &compute_part_ii_item_3(&businesses));
        prop_assert_eq!(&report.investment_details, &compute_investment_details(&businesses));
        prop_assert_eq!(report, compose_report(2025, "Property Fund", &businesses, &responses));
    }

    /// PROPERTY: aggregating the same input twice gives the same report.
    #[test]
    fn property_aggregation_is_idempotent(businesses in businesses()) {
        let first = generate_full_report(2024, "Property Fund", &businesses);
        let second = generate_full_report(2024, "Property Fund", &businesses);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Part I counts never exceed the number of responses.
    #[test]
    fn property_part_i_counts_bounded(responses in proptest::collection::vec(survey_response(), 0..=40)) {
        let part_i = compute_part_i(&responses);

        prop_assert_eq!(part_i.total_responses, responses.len());
        prop_assert!(part_i.decline_all_count <= responses.len());
        for tally in &part_i.demographics {
            for count in &tally.counts {
                prop_assert!(count.count <= responses.len(), "{} exceeds total", count.label);
            }
        }
    }

    /// PROPERTY: no Item 3 row counts more than the diverse investments of Items 1 and 2.
    #[test]
    fn property_item_3_bounded_by_diverse_investments(businesses in businesses()) {
        let items = compute_part_ii_items_1_and_2(&businesses);
        let item3 = compute_part_ii_item_3(&businesses);

        prop_assert_eq!(item3.total_investment_count, items.total_investment_count);
        for row in &item3.categories {
            prop_assert!(row.qualifying_count <= items.diverse_investment_count);
            prop_assert!(row.qualifying_dollars <= items.diverse_investment_dollars);
            prop_assert!(row.investment_count_percentage <= items.diverse_investment_percentage);
        }
    }

    /// PROPERTY: businesses that are not primarily diverse never contribute to Item 3.
    #[test]
    fn property_item_3_ignores_non_diverse_businesses(businesses in businesses()) {
        let non_diverse: Vec<_> = businesses
            .into_iter()
            .filter(|b| !is_primarily_diverse(b.total_founders, &b.responses))
            .collect();

        let item3 = compute_part_ii_item_3(&non_diverse);
        for row in &item3.categories {
            prop_assert_eq!(row.qualifying_count, 0);
            prop_assert_eq!(row.investment_count_percentage, 0.0);
            prop_assert_eq!(row.investment_dollar_percentage, 0.0);
        }
    }

    /// PROPERTY: Part III lists every business once, in input order.
    #[test]
    fn property_investment_details_follow_input_order(businesses in businesses()) {
        let details = compute_investment_details(&businesses);

        prop_assert_eq!(details.len(), businesses.len());
        for (detail, business) in details.iter().zip(&businesses) {
            prop_assert_eq!(&detail.business_name, &business.company_name);
            prop_assert_eq!(detail.total_investment_amount, business.total_investment_amount);
        }
    }

    /// PROPERTY: percentages stay within 0..=100.
    #[test]
    fn property_percentages_in_range(businesses in businesses()) {
        let items = compute_part_ii_items_1_and_2(&businesses);
        prop_assert!((0.0..=100.0).contains(&items.diverse_investment_percentage));
        prop_assert!((0.0..=100.0).contains(&items.diverse_dollar_percentage));
    }
}
