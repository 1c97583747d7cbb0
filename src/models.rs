//! Data models for the demographic data report.
//!
//! This module contains the plain data structures the aggregation engine
//! consumes (survey responses and per-company business rows) and the
//! structures it produces (the three parts of the report).

use crate::demographics::{DemographicCategory, DemographicField};
use serde::{Deserialize, Serialize};

/// One founding team member's answers to the demographic survey.
///
/// Every flag is independent. Nothing here enforces exclusivity within a
/// category, and `decline_all` does not clear the other flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyResponse {
    pub gender_woman: bool,
    pub gender_man: bool,
    pub gender_nonbinary: bool,
    pub gender_transgender: bool,
    pub gender_none_of_above: bool,
    pub gender_decline: bool,
    pub race_black: bool,
    pub race_asian: bool,
    pub race_hispanic: bool,
    pub race_native_american: bool,
    pub race_native_hawaiian: bool,
    pub race_white: bool,
    pub race_none_of_above: bool,
    pub race_decline: bool,
    pub lgbtq_yes: bool,
    pub lgbtq_no: bool,
    pub lgbtq_decline: bool,
    pub disability_yes: bool,
    pub disability_no: bool,
    pub disability_decline: bool,
    pub veteran_yes: bool,
    pub veteran_disabled: bool,
    pub veteran_no: bool,
    pub veteran_decline: bool,
    pub ca_resident_yes: bool,
    pub ca_resident_no: bool,
    pub ca_resident_decline: bool,
    pub decline_all: bool,
}

impl SurveyResponse {
    /// Builds a response with exactly the given fields selected.
    pub fn with_fields(fields: &[DemographicField]) -> Self {
        let mut response = Self::default();
        for field in fields {
            response.set(*field, true);
        }
        response
    }

    /// Returns the value of a single field.
    pub fn has(&self, field: DemographicField) -> bool {
        match field {
            DemographicField::GenderWoman => self.gender_woman,
            DemographicField::GenderMan => self.gender_man,
            DemographicField::GenderNonbinary => self.gender_nonbinary,
            DemographicField::GenderTransgender => self.gender_transgender,
            DemographicField::GenderNoneOfAbove => self.gender_none_of_above,
            DemographicField::GenderDecline => self.gender_decline,
            DemographicField::RaceBlack => self.race_black,
            DemographicField::RaceAsian => self.race_asian,
            DemographicField::RaceHispanic => self.race_hispanic,
            DemographicField::RaceNativeAmerican => self.race_native_american,
            DemographicField::RaceNativeHawaiian => self.race_native_hawaiian,
            DemographicField::RaceWhite => self.race_white,
            DemographicField::RaceNoneOfAbove => self.race_none_of_above,
            DemographicField::RaceDecline => self.race_decline,
            DemographicField::LgbtqYes => self.lgbtq_yes,
            DemographicField::LgbtqNo => self.lgbtq_no,
            DemographicField::LgbtqDecline => self.lgbtq_decline,
            DemographicField::DisabilityYes => self.disability_yes,
            DemographicField::DisabilityNo => self.disability_no,
            DemographicField::DisabilityDecline => self.disability_decline,
            DemographicField::VeteranYes => self.veteran_yes,
            DemographicField::VeteranDisabled => self.veteran_disabled,
            DemographicField::VeteranNo => self.veteran_no,
            DemographicField::VeteranDecline => self.veteran_decline,
            DemographicField::CaResidentYes => self.ca_resident_yes,
            DemographicField::CaResidentNo => self.ca_resident_no,
            DemographicField::CaResidentDecline => self.ca_resident_decline,
            DemographicField::DeclineAll => self.decline_all,
        }
    }

    /// Sets the value of a single field.
    pub fn set(&mut self, field: DemographicField, value: bool) {
        let slot = match field {
            DemographicField::GenderWoman => &mut self.gender_woman,
            DemographicField::GenderMan => &mut self.gender_man,
            DemographicField::GenderNonbinary => &mut self.gender_nonbinary,
            DemographicField::GenderTransgender => &mut self.gender_transgender,
            DemographicField::GenderNoneOfAbove => &mut self.gender_none_of_above,
            DemographicField::GenderDecline => &mut self.gender_decline,
            DemographicField::RaceBlack => &mut self.race_black,
            DemographicField::RaceAsian => &mut self.race_asian,
            DemographicField::RaceHispanic => &mut self.race_hispanic,
            DemographicField::RaceNativeAmerican => &mut self.race_native_american,
            DemographicField::RaceNativeHawaiian => &mut self.race_native_hawaiian,
            DemographicField::RaceWhite => &mut self.race_white,
            DemographicField::RaceNoneOfAbove => &mut self.race_none_of_above,
            DemographicField::RaceDecline => &mut self.race_decline,
            DemographicField::LgbtqYes => &mut self.lgbtq_yes,
            DemographicField::LgbtqNo => &mut self.lgbtq_no,
            DemographicField::LgbtqDecline => &mut self.lgbtq_decline,
            DemographicField::DisabilityYes => &mut self.disability_yes,
            DemographicField::DisabilityNo => &mut self.disability_no,
            DemographicField::DisabilityDecline => &mut self.disability_decline,
            DemographicField::VeteranYes => &mut self.veteran_yes,
            DemographicField::VeteranDisabled => &mut self.veteran_disabled,
            DemographicField::VeteranNo => &mut self.veteran_no,
            DemographicField::VeteranDecline => &mut self.veteran_decline,
            DemographicField::CaResidentYes => &mut self.ca_resident_yes,
            DemographicField::CaResidentNo => &mut self.ca_resident_no,
            DemographicField::CaResidentDecline => &mut self.ca_resident_decline,
            DemographicField::DeclineAll => &mut self.decline_all,
        };
        *slot = value;
    }

    /// Fields currently selected, in table order.
    pub fn selected_fields(&self) -> Vec<DemographicField> {
        DemographicField::ALL
            .iter()
            .copied()
            .filter(|field| self.has(*field))
            .collect()
    }
}

/// One portfolio company's investment activity for a calendar year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Identifier of the company in the ledger.
    pub company_id: String,
    /// Company name.
    pub company_name: String,
    /// Principal place of business (free text, may be empty).
    #[serde(default)]
    pub principal_place_of_business: String,
    /// Sum of all investments made in the company during the year.
    pub total_investment_amount: f64,
    /// Size of the full founding team, whether or not they responded.
    pub total_founders: usize,
    /// Survey responses collected from the team for the year.
    #[serde(default)]
    pub responses: Vec<SurveyResponse>,
}

/// Count of responses selecting one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicCount {
    pub label: String,
    pub field: DemographicField,
    pub count: usize,
}

/// Counts for every field of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicTally {
    pub category: DemographicCategory,
    pub title: String,
    pub counts: Vec<DemographicCount>,
}

impl DemographicTally {
    /// Count recorded for a field, if the field belongs to this category.
    pub fn count_for(&self, field: DemographicField) -> Option<usize> {
        self.counts.iter().find(|c| c.field == field).map(|c| c.count)
    }
}

/// Part I: aggregated survey demographic data responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartIData {
    pub demographics: Vec<DemographicTally>,
    pub total_responses: usize,
    pub decline_all_count: usize,
}

impl PartIData {
    /// Tally for a category.
    pub fn category(&self, category: DemographicCategory) -> Option<&DemographicTally> {
        self.demographics.iter().find(|d| d.category == category)
    }

    /// Count recorded for a field across the whole of Part I.
    pub fn count_for(&self, field: DemographicField) -> Option<usize> {
        match field {
            DemographicField::DeclineAll => Some(self.decline_all_count),
            _ => field
                .category()
                .and_then(|c| self.category(c))
                .and_then(|tally| tally.count_for(field)),
        }
    }
}

/// Part II Items 1 and 2: investments in primarily diverse businesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartIIItem1And2 {
    pub diverse_investment_count: usize,
    pub total_investment_count: usize,
    pub diverse_investment_percentage: f64,
    pub diverse_investment_dollars: f64,
    pub total_investment_dollars: f64,
    pub diverse_dollar_percentage: f64,
}

/// Part II Item 3 row for one demographic field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub label: String,
    pub field: DemographicField,
    /// (A) qualifying businesses over all investments, as a percentage.
    pub investment_count_percentage: f64,
    /// (B) qualifying dollars over all invested dollars, as a percentage.
    pub investment_dollar_percentage: f64,
    pub qualifying_count: usize,
    pub qualifying_dollars: f64,
}

/// Part II Item 3: per-field breakdown of diverse investments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartIIItem3Data {
    pub categories: Vec<CategoryBreakdown>,
    pub total_investment_count: usize,
    pub total_investment_dollars: f64,
}

impl PartIIItem3Data {
    /// Breakdown row for a field.
    pub fn breakdown(&self, field: DemographicField) -> Option<&CategoryBreakdown> {
        self.categories.iter().find(|c| c.field == field)
    }
}

/// Part II of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartIIData {
    pub item1_and_2: PartIIItem1And2,
    pub item3: PartIIItem3Data,
}

/// Part III row: one business and what was invested in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentDetail {
    pub business_name: String,
    pub total_investment_amount: f64,
    pub principal_place_of_business: String,
}

/// The complete demographic data report for one firm and calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub calendar_year: i32,
    pub vc_firm_name: String,
    pub part_i: PartIData,
    pub part_ii: PartIIData,
    pub investment_details: Vec<InvestmentDetail>,
}
