//! Demographic categories and fields of the founder survey.
//!
//! The survey form groups its answers into six fixed categories. Every answer
//! is identified by the camelCase field name used on the statutory form
//! (`genderWoman`, `raceNativeHawaiian`, ...). The order of categories and of
//! fields within a category is the order the report prints them in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six survey categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemographicCategory {
    Gender,
    RaceEthnicity,
    Lgbtq,
    Disability,
    Veteran,
    CaliforniaResidency,
}

impl DemographicCategory {
    /// All categories in report order.
    pub const ALL: [DemographicCategory; 6] = [
        DemographicCategory::Gender,
        DemographicCategory::RaceEthnicity,
        DemographicCategory::Lgbtq,
        DemographicCategory::Disability,
        DemographicCategory::Veteran,
        DemographicCategory::CaliforniaResidency,
    ];

    /// Heading used for the category in the report.
    pub fn title(&self) -> &'static str {
        match self {
            DemographicCategory::Gender => "Gender",
            DemographicCategory::RaceEthnicity => "Race/Ethnicity",
            DemographicCategory::Lgbtq => "LGBTQ+",
            DemographicCategory::Disability => "Disability Status",
            DemographicCategory::Veteran => "Veteran Status",
            DemographicCategory::CaliforniaResidency => "California Residency",
        }
    }

    /// Fields belonging to this category, in report order.
    pub fn fields(&self) -> &'static [DemographicField] {
        use DemographicField::*;
        match self {
            DemographicCategory::Gender => &[
                GenderWoman,
                GenderMan,
                GenderNonbinary,
                GenderTransgender,
                GenderNoneOfAbove,
                GenderDecline,
            ],
            DemographicCategory::RaceEthnicity => &[
                RaceBlack,
                RaceAsian,
                RaceHispanic,
                RaceNativeAmerican,
                RaceNativeHawaiian,
                RaceWhite,
                RaceNoneOfAbove,
                RaceDecline,
            ],
            DemographicCategory::Lgbtq => &[LgbtqYes, LgbtqNo, LgbtqDecline],
            DemographicCategory::Disability => &[DisabilityYes, DisabilityNo, DisabilityDecline],
            DemographicCategory::Veteran => &[VeteranYes, VeteranDisabled, VeteranNo, VeteranDecline],
            DemographicCategory::CaliforniaResidency => {
                &[CaResidentYes, CaResidentNo, CaResidentDecline]
            }
        }
    }
}

impl fmt::Display for DemographicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

static FIELD_TABLE: [DemographicField; 28] = DemographicField::ALL;

/// A single answer on the survey form.
///
/// `DeclineAll` is the only field that sits outside the six categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DemographicField {
    GenderWoman,
    GenderMan,
    GenderNonbinary,
    GenderTransgender,
    GenderNoneOfAbove,
    GenderDecline,
    RaceBlack,
    RaceAsian,
    RaceHispanic,
    RaceNativeAmerican,
    RaceNativeHawaiian,
    RaceWhite,
    RaceNoneOfAbove,
    RaceDecline,
    LgbtqYes,
    LgbtqNo,
    LgbtqDecline,
    DisabilityYes,
    DisabilityNo,
    DisabilityDecline,
    VeteranYes,
    VeteranDisabled,
    VeteranNo,
    VeteranDecline,
    CaResidentYes,
    CaResidentNo,
    CaResidentDecline,
    DeclineAll,
}

impl DemographicField {
    /// Every recognized field, `DeclineAll` last.
    pub const ALL: [DemographicField; 28] = [
        DemographicField::GenderWoman,
        DemographicField::GenderMan,
        DemographicField::GenderNonbinary,
        DemographicField::GenderTransgender,
        DemographicField::GenderNoneOfAbove,
        DemographicField::GenderDecline,
        DemographicField::RaceBlack,
        DemographicField::RaceAsian,
        DemographicField::RaceHispanic,
        DemographicField::RaceNativeAmerican,
        DemographicField::RaceNativeHawaiian,
        DemographicField::RaceWhite,
        DemographicField::RaceNoneOfAbove,
        DemographicField::RaceDecline,
        DemographicField::LgbtqYes,
        DemographicField::LgbtqNo,
        DemographicField::LgbtqDecline,
        DemographicField::DisabilityYes,
        DemographicField::DisabilityNo,
        DemographicField::DisabilityDecline,
        DemographicField::VeteranYes,
        DemographicField::VeteranDisabled,
        DemographicField::VeteranNo,
        DemographicField::VeteranDecline,
        DemographicField::CaResidentYes,
        DemographicField::CaResidentNo,
        DemographicField::CaResidentDecline,
        DemographicField::DeclineAll,
    ];

    /// The 27 fields that belong to a category, flattened in report order.
    pub fn category_fields() -> &'static [DemographicField] {
        &FIELD_TABLE[..27]
    }

    /// Field name as it appears on the survey form.
    pub fn name(&self) -> &'static str {
        match self {
            DemographicField::GenderWoman => "genderWoman",
            DemographicField::GenderMan => "genderMan",
            DemographicField::GenderNonbinary => "genderNonbinary",
            DemographicField::GenderTransgender => "genderTransgender",
            DemographicField::GenderNoneOfAbove => "genderNoneOfAbove",
            DemographicField::GenderDecline => "genderDecline",
            DemographicField::RaceBlack => "raceBlack",
            DemographicField::RaceAsian => "raceAsian",
            DemographicField::RaceHispanic => "raceHispanic",
            DemographicField::RaceNativeAmerican => "raceNativeAmerican",
            DemographicField::RaceNativeHawaiian => "raceNativeHawaiian",
            DemographicField::RaceWhite => "raceWhite",
            DemographicField::RaceNoneOfAbove => "raceNoneOfAbove",
            DemographicField::RaceDecline => "raceDecline",
            DemographicField::LgbtqYes => "lgbtqYes",
            DemographicField::LgbtqNo => "lgbtqNo",
            DemographicField::LgbtqDecline => "lgbtqDecline",
            DemographicField::DisabilityYes => "disabilityYes",
            DemographicField::DisabilityNo => "disabilityNo",
            DemographicField::DisabilityDecline => "disabilityDecline",
            DemographicField::VeteranYes => "veteranYes",
            DemographicField::VeteranDisabled => "veteranDisabled",
            DemographicField::VeteranNo => "veteranNo",
            DemographicField::VeteranDecline => "veteranDecline",
            DemographicField::CaResidentYes => "caResidentYes",
            DemographicField::CaResidentNo => "caResidentNo",
            DemographicField::CaResidentDecline => "caResidentDecline",
            DemographicField::DeclineAll => "declineAll",
        }
    }

    /// Row label printed in the report.
    pub fn label(&self) -> &'static str {
        match self {
            DemographicField::GenderWoman => "Woman",
            DemographicField::GenderMan => "Man",
            DemographicField::GenderNonbinary => "Nonbinary",
            DemographicField::GenderTransgender => "Transgender",
            DemographicField::RaceBlack => "Black or African American",
            DemographicField::RaceAsian => "Asian",
            DemographicField::RaceHispanic => "Hispanic or Latino/Latina",
            DemographicField::RaceNativeAmerican => "Native American or Alaskan",
            DemographicField::RaceNativeHawaiian => "Native Hawaiian or Other Pacific Islander",
            DemographicField::RaceWhite => "White",
            DemographicField::GenderNoneOfAbove | DemographicField::RaceNoneOfAbove => {
                "None of the above"
            }
            DemographicField::LgbtqYes => "LGBTQ+",
            DemographicField::LgbtqNo => "Not LGBTQ+",
            DemographicField::DisabilityYes => "A Person with a Disability",
            DemographicField::DisabilityNo => "Not a Person with a Disability",
            DemographicField::VeteranYes => "A Veteran",
            DemographicField::VeteranDisabled => "A Disabled Veteran",
            DemographicField::VeteranNo => "Not a Veteran",
            DemographicField::CaResidentYes => "A Resident of California",
            DemographicField::CaResidentNo => "Not a Resident of California",
            DemographicField::GenderDecline
            | DemographicField::RaceDecline
            | DemographicField::LgbtqDecline
            | DemographicField::DisabilityDecline
            | DemographicField::VeteranDecline
            | DemographicField::CaResidentDecline => "Decline to state",
            DemographicField::DeclineAll => "Decline to state for all responses",
        }
    }

    /// Category the field belongs to; `None` for `DeclineAll`.
    pub fn category(&self) -> Option<DemographicCategory> {
        use DemographicField::*;
        match self {
            GenderWoman | GenderMan | GenderNonbinary | GenderTransgender | GenderNoneOfAbove
            | GenderDecline => Some(DemographicCategory::Gender),
            RaceBlack | RaceAsian | RaceHispanic | RaceNativeAmerican | RaceNativeHawaiian
            | RaceWhite | RaceNoneOfAbove | RaceDecline => Some(DemographicCategory::RaceEthnicity),
            LgbtqYes | LgbtqNo | LgbtqDecline => Some(DemographicCategory::Lgbtq),
            DisabilityYes | DisabilityNo | DisabilityDecline => Some(DemographicCategory::Disability),
            VeteranYes | VeteranDisabled | VeteranNo | VeteranDecline => {
                Some(DemographicCategory::Veteran)
            }
            CaResidentYes | CaResidentNo | CaResidentDecline => {
                Some(DemographicCategory::CaliforniaResidency)
            }
            DeclineAll => None,
        }
    }

    /// Look a field up by its form name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

impl fmt::Display for DemographicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown demographic field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for DemographicField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownField(s.to_string()))
    }
}
