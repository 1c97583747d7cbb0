//! Shared generators for survey responses and businesses.

use proptest::prelude::*;

use vcdisclose::{Business, DemographicField, SurveyResponse};

/// Any combination of the 28 survey flags.
pub fn survey_response() -> impl Strategy<Value = SurveyResponse> {
    proptest::collection::vec(any::<bool>(), DemographicField::ALL.len()).prop_map(|flags| {
        let mut response = SurveyResponse::default();
        for (field, value) in DemographicField::ALL.iter().zip(flags) {
            response.set(*field, value);
        }
        response
    })
}

/// A business with up to eight founders and any number of responses up to the team size.
///
/// Amounts are whole dollars so sums are exact in `f64`.
pub fn business() -> impl Strategy<Value = Business> {
    (0usize..=8)
        .prop_flat_map(|founders| {
            (
                Just(founders),
                proptest::collection::vec(survey_response(), 0..=founders),
                1u32..=10_000_000,
                "[A-Za-z][A-Za-z0-9 ]{0,20}",
            )
        })
        .prop_map(|(founders, responses, amount, name)| Business {
            company_id: name.to_lowercase().replace(' ', "-"),
            company_name: name,
            principal_place_of_business: "Oakland, CA".to_string(),
            total_investment_amount: f64::from(amount),
            total_founders: founders,
            responses,
        })
}

/// Up to a dozen businesses.
pub fn businesses() -> impl Strategy<Value = Vec<Business>> {
    proptest::collection::vec(business(), 0..=12)
}
