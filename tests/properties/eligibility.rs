//! Property tests for the diverse founder and primarily diverse rules.

use proptest::prelude::*;

use vcdisclose::analysis::DIVERSITY_SIGNALS;
use vcdisclose::{is_diverse_founder, is_primarily_diverse, DemographicField, SurveyResponse};

use crate::strategies::survey_response;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a respondent is diverse exactly when a diversity signal is selected.
    #[test]
    fn property_diverse_iff_any_signal(response in survey_response()) {
        let expected = DIVERSITY_SIGNALS.iter().any(|field| response.has(*field));
        prop_assert_eq!(is_diverse_founder(&response), expected);
    }

    /// PROPERTY: non-signal answers never make a respondent diverse.
    #[test]
    fn property_non_signal_answers_never_diverse(response in survey_response()) {
        let mut stripped = response;
        for field in DIVERSITY_SIGNALS {
            stripped.set(field, false);
        }
        prop_assert!(!is_diverse_founder(&stripped));
    }

    /// PROPERTY: the thresholds match an exact integer oracle.
    ///
    /// `responded > founders / 2` and `diverse >= responded / 2` in real
    /// division are `2 * responded > founders` and `2 * diverse >= responded`.
    #[test]
    fn property_primarily_diverse_matches_integer_oracle(
        founders in 0usize..=12,
        diverse in 0usize..=12,
        non_diverse in 0usize..=12,
    ) {
        let mut responses = vec![SurveyResponse::with_fields(&[DemographicField::RaceAsian]); diverse];
        responses.extend(vec![SurveyResponse::with_fields(&[DemographicField::GenderMan]); non_diverse]);
        let responded = diverse + non_diverse;

        let expected = founders > 0 && 2 * responded > founders && 2 * diverse >= responded;
        prop_assert_eq!(is_primarily_diverse(founders, &responses), expected);
    }

    /// PROPERTY: response order does not change the outcome.
    #[test]
    fn property_primarily_diverse_ignores_order(
        founders in 0usize..=8,
        mut responses in proptest::collection::vec(survey_response(), 0..=8),
    ) {
        let forward = is_primarily_diverse(founders, &responses);
        responses.reverse();
        prop_assert_eq!(is_primarily_diverse(founders, &responses), forward);
    }
}
