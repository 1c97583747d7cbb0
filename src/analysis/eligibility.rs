//! Statutory eligibility rules.
//!
//! Decides who counts as a diverse founding team member and which businesses
//! are primarily founded by diverse founding team members.

use crate::demographics::DemographicField;
use crate::models::SurveyResponse;

/// Fields whose selection makes a respondent a diverse founding team member.
pub const DIVERSITY_SIGNALS: [DemographicField; 12] = [
    DemographicField::GenderWoman,
    DemographicField::GenderNonbinary,
    DemographicField::GenderTransgender,
    DemographicField::RaceBlack,
    DemographicField::RaceAsian,
    DemographicField::RaceHispanic,
    DemographicField::RaceNativeAmerican,
    DemographicField::RaceNativeHawaiian,
    DemographicField::DisabilityYes,
    DemographicField::VeteranYes,
    DemographicField::VeteranDisabled,
    DemographicField::LgbtqYes,
];

/// Whether a respondent is a diverse founding team member.
///
/// True when any diversity signal is selected. Non-signal answers (man,
/// white, the "no" options, every decline flag) never cancel a signal.
pub fn is_diverse_founder(response: &SurveyResponse) -> bool {
    response.gender_woman
        || response.gender_nonbinary
        || response.gender_transgender
        || response.race_black
        || response.race_asian
        || response.race_hispanic
        || response.race_native_american
        || response.race_native_hawaiian
        || response.disability_yes
        || response.veteran_yes
        || response.veteran_disabled
        || response.lgbtq_yes
}

/// Whether a business is primarily founded by diverse founding team members.
///
/// Requires more than half of the full team to have responded, and at least
/// half of the respondents to be diverse. Both thresholds are compared with
/// real division so odd team sizes are not rounded.
pub fn is_primarily_diverse(total_founders: usize, responses: &[SurveyResponse]) -> bool {
    if total_founders == 0 {
        return false;
    }

    let total_responded = responses.len() as f64;
    if total_responded <= total_founders as f64 / 2.0 {
        return false;
    }

    let diverse_responded = responses.iter().filter(|r| is_diverse_founder(r)).count() as f64;
    diverse_responded >= total_responded / 2.0
}

/// Looks up a field on a response by its form name.
///
/// Unknown names are treated as unselected.
pub fn has_category(response: &SurveyResponse, field_name: &str) -> bool {
    DemographicField::from_name(field_name)
        .map(|field| response.has(field))
        .unwrap_or(false)
}
