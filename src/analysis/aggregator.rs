//! Report aggregation.
//!
//! This module turns per-company business rows and their survey responses
//! into the three parts of the demographic data report. Every function is
//! pure: inputs are borrowed, outputs are freshly built.

use crate::analysis::eligibility::is_primarily_diverse;
use crate::demographics::{DemographicCategory, DemographicField};
use crate::models::{
    Business, CategoryBreakdown, DemographicCount, DemographicTally, InvestmentDetail, PartIData,
    PartIIData, PartIIItem1And2, PartIIItem3Data, ReportData, SurveyResponse,
};
use tracing::debug;

/// `part / total * 100`, or 0 when there is nothing to divide by.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        (part / total) * 100.0
    } else {
        0.0
    }
}

/// Collect every response from every business, in business order.
pub fn flatten_responses(businesses: &[Business]) -> Vec<SurveyResponse> {
    businesses.iter().flat_map(|b| b.responses.iter().copied()).collect()
}

/// Sum of invested dollars across businesses.
pub fn sum_investment_dollars(businesses: &[Business]) -> f64 {
    businesses.iter().map(|b| b.total_investment_amount).sum()
}

/// Part I: raw tally of every demographic selection across all responses.
pub fn compute_part_i(all_responses: &[SurveyResponse]) -> PartIData {
    let demographics = DemographicCategory::ALL
        .iter()
        .map(|category| DemographicTally {
            category: *category,
            title: category.title().to_string(),
            counts: category
                .fields()
                .iter()
                .map(|field| DemographicCount {
                    label: field.label().to_string(),
                    field: *field,
                    count: all_responses
                        .iter()
                        .filter(|r| r.has(*field))
                        .count(),
                })
                .collect(),
        })
        .collect();

    PartIData {
        demographics,
        total_responses: all_responses.len(),
        decline_all_count: all_responses.iter().filter(|r| r.decline_all).count(),
    }
}

/// Part II Items 1 and 2: share of investments, by count and by dollars,
/// going to primarily diverse businesses.
pub fn compute_part_ii_items_1_and_2(businesses: &[Business]) -> PartIIItem1And2 {
    let total_investment_count = businesses.len();
    let total_investment_dollars = sum_investment_dollars(businesses);

    let mut diverse_investment_count = 0;
    let mut diverse_investment_dollars = 0.0;

    for business in businesses {
        let diverse = is_primarily_diverse(business.total_founders, &business.responses);
        debug!(
            "{}: {} of {} founders responded, primarily diverse: {}",
            business.company_name,
            business.responses.len(),
            business.total_founders,
            diverse
        );

        if diverse {
            diverse_investment_count += 1;
            diverse_investment_dollars += business.total_investment_amount;
        }
    }

    PartIIItem1And2 {
        diverse_investment_count,
        total_investment_count,
        diverse_investment_percentage: percentage(
            diverse_investment_count as f64,
            total_investment_count as f64,
        ),
        diverse_investment_dollars,
        total_investment_dollars,
        diverse_dollar_percentage: percentage(diverse_investment_dollars, total_investment_dollars),
    }
}

/// Part II Item 3: per-field breakdown of diverse investments.
///
/// A business qualifies for a field when it is primarily diverse and at
/// least one of its respondents selected the field. Percentages share the
/// Items 1 and 2 denominators.
pub fn compute_part_ii_item_3(businesses: &[Business]) -> PartIIItem3Data {
    let total_investment_count = businesses.len();
    let total_investment_dollars = sum_investment_dollars(businesses);

    let diverse_businesses: Vec<&Business> = businesses
        .iter()
        .filter(|b| is_primarily_diverse(b.total_founders, &b.responses))
        .collect();

    let categories = DemographicField::category_fields()
        .iter()
        .map(|field| {
            let qualifying: Vec<&&Business> = diverse_businesses
                .iter()
                .filter(|b| b.responses.iter().any(|r| r.has(*field)))
                .collect();

            let qualifying_count = qualifying.len();
            let qualifying_dollars: f64 = qualifying.iter().map(|b| b.total_investment_amount).sum();

            CategoryBreakdown {
                label: field.label().to_string(),
                field: *field,
                investment_count_percentage: percentage(
                    qualifying_count as f64,
                    total_investment_count as f64,
                ),
                investment_dollar_percentage: percentage(
                    qualifying_dollars,
                    total_investment_dollars,
                ),
                qualifying_count,
                qualifying_dollars,
            }
        })
        .collect();

    PartIIItem3Data {
        categories,
        total_investment_count,
        total_investment_dollars,
    }
}

/// Part III: one detail row per business, in input order.
pub fn compute_investment_details(businesses: &[Business]) -> Vec<InvestmentDetail> {
    businesses
        .iter()
        .map(|b| InvestmentDetail {
            business_name: b.company_name.clone(),
            total_investment_amount: b.total_investment_amount,
            principal_place_of_business: b.principal_place_of_business.clone(),
        })
        .collect()
}

/// Bundle the report parts. Part I is computed from `all_responses` as given.
pub fn compose_report(
    calendar_year: i32,
    vc_firm_name: &str,
    businesses: &[Business],
    all_responses: &[SurveyResponse],
) -> ReportData {
    ReportData {
        calendar_year,
        vc_firm_name: vc_firm_name.to_string(),
        part_i: compute_part_i(all_responses),
        part_ii: PartIIData {
            item1_and_2: compute_part_ii_items_1_and_2(businesses),
            item3: compute_part_ii_item_3(businesses),
        },
        investment_details: compute_investment_details(businesses),
    }
}

/// Generate the full report for a firm and calendar year.
///
/// Part I is computed over the responses of `businesses`, so it always
/// describes the same respondents as Part II.
pub fn generate_full_report(
    calendar_year: i32,
    vc_firm_name: &str,
    businesses: &[Business],
) -> ReportData {
    let all_responses = flatten_responses(businesses);
    debug!(
        "Generating {} report for {}: {} businesses, {} responses",
        calendar_year,
        vc_firm_name,
        businesses.len(),
        all_responses.len()
    );

    compose_report(calendar_year, vc_firm_name, businesses, &all_responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use DemographicField::*;

    fn respond(fields: &[DemographicField]) -> SurveyResponse {
        SurveyResponse::with_fields(fields)
    }

    fn create_test_business(
        name: &str,
        amount: f64,
        total_founders: usize,
        responses: Vec<SurveyResponse>,
    ) -> Business {
        Business {
            company_id: name.to_lowercase().replace(' ', "-"),
            company_name: name.to_string(),
            principal_place_of_business: "San Francisco, CA".to_string(),
            total_investment_amount: amount,
            total_founders,
            responses,
        }
    }

    fn diverse_and_not() -> Vec<Business> {
        vec![
            create_test_business(
                "Company A",
                1_000_000.0,
                2,
                vec![respond(&[GenderWoman, RaceAsian]), respond(&[GenderWoman, RaceBlack])],
            ),
            create_test_business(
                "Company B",
                500_000.0,
                2,
                vec![respond(&[GenderMan, RaceWhite]), respond(&[GenderMan, RaceWhite])],
            ),
        ]
    }

    #[test]
    fn test_percentage_guards_zero() {
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(percentage(1.0, 4.0), 25.0);
    }

    #[test]
    fn test_part_i_counts() {
        let responses = vec![
            respond(&[GenderWoman, RaceAsian, LgbtqYes]),
            respond(&[GenderMan, RaceWhite, LgbtqNo]),
            respond(&[GenderWoman, RaceBlack, RaceAsian]),
        ];

        let result = compute_part_i(&responses);

        assert_eq!(result.total_responses, 3);
        assert_eq!(result.decline_all_count, 0);
        assert_eq!(result.count_for(GenderWoman), Some(2));
        assert_eq!(result.count_for(GenderMan), Some(1));
        assert_eq!(result.count_for(RaceAsian), Some(2));
        assert_eq!(result.count_for(RaceBlack), Some(1));
        assert_eq!(result.count_for(LgbtqYes), Some(1));
        assert_eq!(result.count_for(CaResidentYes), Some(0));
    }

    #[test]
    fn test_part_i_layout_follows_field_table() {
        let result = compute_part_i(&[]);

        let categories: Vec<DemographicCategory> =
            result.demographics.iter().map(|d| d.category).collect();
        assert_eq!(categories, DemographicCategory::ALL.to_vec());

        let race = result.category(DemographicCategory::RaceEthnicity).unwrap();
        assert_eq!(race.title, "Race/Ethnicity");
        assert_eq!(race.counts.len(), 8);
        assert_eq!(race.counts[2].label, "Hispanic or Latino/Latina");
    }

    #[test]
    fn test_part_i_empty() {
        let result = compute_part_i(&[]);
        assert_eq!(result.total_responses, 0);
        assert_eq!(result.decline_all_count, 0);
        for tally in &result.demographics {
            for count in &tally.counts {
                assert_eq!(count.count, 0);
            }
        }
    }

    #[test]
    fn test_part_i_decline_all() {
        let responses = vec![respond(&[DeclineAll]), respond(&[DeclineAll]), respond(&[GenderWoman])];
        let result = compute_part_i(&responses);
        assert_eq!(result.decline_all_count, 2);
        assert_eq!(result.total_responses, 3);
    }

    #[test]
    fn test_part_i_counts_flags_alongside_decline_all() {
        let result = compute_part_i(&[respond(&[DeclineAll, GenderWoman])]);
        assert_eq!(result.decline_all_count, 1);
        assert_eq!(result.count_for(GenderWoman), Some(1));
    }

    #[test]
    fn test_items_1_and_2() {
        let result = compute_part_ii_items_1_and_2(&diverse_and_not());

        assert_eq!(result.diverse_investment_count, 1);
        assert_eq!(result.total_investment_count, 2);
        assert_eq!(result.diverse_investment_percentage, 50.0);
        assert_eq!(result.diverse_investment_dollars, 1_000_000.0);
        assert_eq!(result.total_investment_dollars, 1_500_000.0);
        assert!((result.diverse_dollar_percentage - 66.666_666).abs() < 0.001);
    }

    #[test]
    fn test_items_1_and_2_empty() {
        let result = compute_part_ii_items_1_and_2(&[]);
        assert_eq!(result.diverse_investment_count, 0);
        assert_eq!(result.total_investment_count, 0);
        assert_eq!(result.diverse_investment_percentage, 0.0);
        assert_eq!(result.diverse_dollar_percentage, 0.0);
    }

    #[test]
    fn test_items_1_and_2_all_diverse() {
        let businesses = vec![
            create_test_business("A", 100_000.0, 1, vec![respond(&[GenderWoman])]),
            create_test_business("B", 200_000.0, 1, vec![respond(&[RaceAsian])]),
        ];
        let result = compute_part_ii_items_1_and_2(&businesses);
        assert_eq!(result.diverse_investment_percentage, 100.0);
        assert_eq!(result.diverse_dollar_percentage, 100.0);
    }

    #[test]
    fn test_items_1_and_2_zero_dollars() {
        let businesses = vec![create_test_business("A", 0.0, 1, vec![respond(&[GenderWoman])])];
        let result = compute_part_ii_items_1_and_2(&businesses);
        assert_eq!(result.diverse_investment_percentage, 100.0);
        assert_eq!(result.diverse_dollar_percentage, 0.0);
    }

    #[test]
    fn test_items_1_and_2_no_responses() {
        let businesses = vec![create_test_business("Co", 100_000.0, 3, vec![])];
        let result = compute_part_ii_items_1_and_2(&businesses);
        assert_eq!(result.diverse_investment_count, 0);
        assert_eq!(result.total_investment_count, 1);
    }

    #[test]
    fn test_item_3_attribution() {
        let result = compute_part_ii_item_3(&diverse_and_not());

        let woman = result.breakdown(GenderWoman).unwrap();
        assert_eq!(woman.qualifying_count, 1);
        assert_eq!(woman.investment_count_percentage, 50.0);
        assert!((woman.investment_dollar_percentage - 66.67).abs() < 0.01);

        let asian = result.breakdown(RaceAsian).unwrap();
        assert_eq!(asian.investment_count_percentage, 50.0);

        // Company B has men but is not primarily diverse
        let man = result.breakdown(GenderMan).unwrap();
        assert_eq!(man.qualifying_count, 0);
        assert_eq!(man.investment_count_percentage, 0.0);
    }

    #[test]
    fn test_item_3_counts_men_on_diverse_teams() {
        let businesses = vec![create_test_business(
            "Mixed",
            250_000.0,
            2,
            vec![respond(&[GenderWoman]), respond(&[GenderMan, RaceWhite])],
        )];
        let result = compute_part_ii_item_3(&businesses);

        assert_eq!(result.breakdown(GenderMan).unwrap().qualifying_count, 1);
        assert_eq!(result.breakdown(RaceWhite).unwrap().qualifying_dollars, 250_000.0);
        assert_eq!(result.breakdown(RaceBlack).unwrap().qualifying_count, 0);
    }

    #[test]
    fn test_item_3_non_diverse_never_qualifies() {
        let everything: Vec<DemographicField> = DemographicField::ALL
            .iter()
            .copied()
            .filter(|f| !crate::analysis::DIVERSITY_SIGNALS.contains(f))
            .collect();
        let businesses = vec![create_test_business("Nope", 75_000.0, 1, vec![respond(&everything)])];

        let result = compute_part_ii_item_3(&businesses);
        for row in &result.categories {
            assert_eq!(row.qualifying_count, 0, "{}", row.field);
            assert_eq!(row.qualifying_dollars, 0.0);
        }
    }

    #[test]
    fn test_item_3_covers_category_fields_only() {
        let result = compute_part_ii_item_3(&[]);
        assert_eq!(result.categories.len(), 27);
        assert!(result.breakdown(DeclineAll).is_none());
        assert!(result.breakdown(RaceNoneOfAbove).is_some());
        assert_eq!(result.total_investment_count, 0);
        for row in &result.categories {
            assert_eq!(row.investment_count_percentage, 0.0);
            assert_eq!(row.investment_dollar_percentage, 0.0);
        }
    }

    #[test]
    fn test_investment_details() {
        let mut business = create_test_business("TechCo", 2_500_000.0, 3, vec![]);
        business.principal_place_of_business = String::new();

        let details = compute_investment_details(&[business]);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].business_name, "TechCo");
        assert_eq!(details[0].total_investment_amount, 2_500_000.0);
        assert_eq!(details[0].principal_place_of_business, "");
    }

    #[test]
    fn test_investment_details_keep_input_order() {
        let businesses = vec![
            create_test_business("Zeta Labs", 300_000.0, 1, vec![]),
            create_test_business("Alpha Works", 100_000.0, 1, vec![]),
            create_test_business("Mid Corp", 200_000.0, 1, vec![]),
        ];

        let details = compute_investment_details(&businesses);
        let names: Vec<&str> = details.iter().map(|d| d.business_name.as_str()).collect();
        assert_eq!(names, ["Zeta Labs", "Alpha Works", "Mid Corp"]);

        let amounts: Vec<f64> = details.iter().map(|d| d.total_investment_amount).collect();
        assert_eq!(amounts, [300_000.0, 100_000.0, 200_000.0]);
    }

    #[test]
    fn test_generate_full_report() {
        let businesses = vec![create_test_business(
            "Company A",
            1_000_000.0,
            2,
            vec![respond(&[GenderWoman, RaceAsian]), respond(&[RaceBlack, LgbtqYes])],
        )];

        let report = generate_full_report(2025, "Test VC Fund", &businesses);

        assert_eq!(report.calendar_year, 2025);
        assert_eq!(report.vc_firm_name, "Test VC Fund");
        assert_eq!(report.part_i.total_responses, 2);
        assert_eq!(report.part_ii.item1_and_2.total_investment_count, 1);
        assert_eq!(report.part_ii.item1_and_2.diverse_investment_count, 1);
        assert_eq!(report.investment_details.len(), 1);
    }

    #[test]
    fn test_generate_full_report_empty() {
        let report = generate_full_report(2025, "Empty Fund", &[]);
        assert_eq!(report.part_i.total_responses, 0);
        assert_eq!(report.part_ii.item1_and_2.total_investment_count, 0);
        assert!(report.investment_details.is_empty());
    }

    #[test]
    fn test_compose_report_uses_given_responses() {
        let businesses = diverse_and_not();
        let extra = vec![respond(&[VeteranYes])];

        let report = compose_report(2024, "Fund", &businesses, &extra);

        assert_eq!(report.part_i, compute_part_i(&extra));
        assert_eq!(report.part_ii.item1_and_2, compute_part_ii_items_1_and_2(&businesses));
        assert_eq!(report.part_ii.item3, compute_part_ii_item_3(&businesses));
        assert_eq!(report.investment_details, compute_investment_details(&businesses));
    }

    #[test]
    fn test_flatten_responses_keeps_order() {
        let businesses = diverse_and_not();
        let flat = flatten_responses(&businesses);
        assert_eq!(flat.len(), 4);
        assert!(flat[0].race_asian);
        assert!(flat[3].gender_man);
    }
}
