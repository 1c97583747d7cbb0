//! Portfolio records and the business rows derived from them.
//!
//! A portfolio file holds the raw records a firm keeps for the disclosure
//! report: portfolio companies, their founding team members, investments and
//! survey invitations with the answers collected. This module loads and
//! validates that file and rolls the records up into one [`Business`] per
//! company for a calendar year.

mod error;

pub use error::{LedgerError, LedgerResult};

use crate::models::{Business, SurveyResponse};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// The reporting venture capital firm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Firm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
}

/// A portfolio company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_place_of_business: Option<String>,
}

/// A founding team member of a portfolio company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundingMember {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Passive investors are not surveyed but still count toward team size.
    #[serde(default)]
    pub passive_investor: bool,
}

/// A single investment made by the firm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    pub company_id: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Investment {
    /// Calendar year the investment is reported in.
    pub fn calendar_year(&self) -> i32 {
        self.date.year()
    }
}

/// Delivery state of a survey invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Sent,
    Completed,
    Expired,
}

/// A survey invitation sent to one founding member for one calendar year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyInvitation {
    pub member_id: String,
    pub calendar_year: i32,
    #[serde(default)]
    pub status: InvitationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<SurveyResponse>,
}

/// Survey progress for a calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyStatus {
    pub calendar_year: i32,
    pub portfolio_companies: usize,
    pub total_investments: usize,
    pub total_investment_amount: f64,
    pub surveys_sent: usize,
    pub surveys_completed: usize,
    pub response_rate: f64,
}

/// Everything the firm has on record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub firm: Firm,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub members: Vec<FoundingMember>,
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub invitations: Vec<SurveyInvitation>,
}

impl Portfolio {
    /// Load and validate a portfolio file.
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LedgerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let portfolio: Portfolio = if is_json {
            serde_json::from_str(&content).map_err(|source| LedgerError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&content).map_err(|source| LedgerError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };

        portfolio.validate()?;
        info!(
            "Loaded portfolio for {}: {} companies, {} investments, {} invitations",
            portfolio.firm.name,
            portfolio.companies.len(),
            portfolio.investments.len(),
            portfolio.invitations.len()
        );

        Ok(portfolio)
    }

    /// Check the records are well formed and reference each other correctly.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.firm.name.trim().is_empty() {
            return Err(LedgerError::MissingName {
                kind: "firm",
                id: String::new(),
            });
        }

        let mut company_ids = HashSet::new();
        for company in &self.companies {
            if !company_ids.insert(company.id.as_str()) {
                return Err(LedgerError::DuplicateId {
                    kind: "company",
                    id: company.id.clone(),
                });
            }
            if company.name.trim().is_empty() {
                return Err(LedgerError::MissingName {
                    kind: "company",
                    id: company.id.clone(),
                });
            }
        }

        let mut member_ids = HashSet::new();
        for member in &self.members {
            if !member_ids.insert(member.id.as_str()) {
                return Err(LedgerError::DuplicateId {
                    kind: "member",
                    id: member.id.clone(),
                });
            }
            if member.name.trim().is_empty() {
                return Err(LedgerError::MissingName {
                    kind: "member",
                    id: member.id.clone(),
                });
            }
            if !is_plausible_email(&member.email) {
                return Err(LedgerError::InvalidEmail {
                    member: member.id.clone(),
                    email: member.email.clone(),
                });
            }
            if !company_ids.contains(member.company_id.as_str()) {
                return Err(LedgerError::UnknownCompany {
                    kind: "member",
                    id: member.id.clone(),
                    company_id: member.company_id.clone(),
                });
            }
        }

        let mut investment_ids = HashSet::new();
        for investment in &self.investments {
            if !investment_ids.insert(investment.id.as_str()) {
                return Err(LedgerError::DuplicateId {
                    kind: "investment",
                    id: investment.id.clone(),
                });
            }
            if !investment.amount.is_finite() || investment.amount <= 0.0 {
                return Err(LedgerError::InvalidAmount {
                    investment: investment.id.clone(),
                    amount: investment.amount,
                });
            }
            if !company_ids.contains(investment.company_id.as_str()) {
                return Err(LedgerError::UnknownCompany {
                    kind: "investment",
                    id: investment.id.clone(),
                    company_id: investment.company_id.clone(),
                });
            }
        }

        for invitation in &self.invitations {
            if !member_ids.contains(invitation.member_id.as_str()) {
                return Err(LedgerError::UnknownMember {
                    member_id: invitation.member_id.clone(),
                    year: invitation.calendar_year,
                });
            }
            if invitation.status == InvitationStatus::Completed && invitation.response.is_none() {
                return Err(LedgerError::MissingResponse {
                    member_id: invitation.member_id.clone(),
                    year: invitation.calendar_year,
                });
            }
        }

        Ok(())
    }

    /// Roll the records up into one business row per company invested in
    /// during `year`.
    ///
    /// Companies appear in the order of their first investment that year.
    /// Team size counts every founding member, passive investors included.
    /// Only completed invitations for `year` contribute responses.
    pub fn businesses_for_year(&self, year: i32) -> Vec<Business> {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, f64> = HashMap::new();

        for investment in self.investments.iter().filter(|i| i.calendar_year() == year) {
            let company_id = investment.company_id.as_str();
            if !totals.contains_key(company_id) {
                order.push(company_id);
            }
            *totals.entry(company_id).or_insert(0.0) += investment.amount;
        }

        let companies: HashMap<&str, &Company> =
            self.companies.iter().map(|c| (c.id.as_str(), c)).collect();

        order
            .into_iter()
            .filter_map(|company_id| {
                let company = companies.get(company_id)?;
                let team: Vec<&FoundingMember> = self
                    .members
                    .iter()
                    .filter(|m| m.company_id == company_id)
                    .collect();

                let responses: Vec<SurveyResponse> = team
                    .iter()
                    .copied()
                    .flat_map(|member| self.completed_responses(&member.id, year))
                    .collect();

                debug!(
                    "{}: {} founders, {} completed surveys for {}",
                    company.name,
                    team.len(),
                    responses.len(),
                    year
                );

                Some(Business {
                    company_id: company.id.clone(),
                    company_name: company.name.clone(),
                    principal_place_of_business: company
                        .principal_place_of_business
                        .clone()
                        .unwrap_or_default(),
                    total_investment_amount: totals.get(company_id).copied().unwrap_or(0.0),
                    total_founders: team.len(),
                    responses,
                })
            })
            .collect()
    }

    /// Survey progress across the companies invested in during `year`.
    ///
    /// `portfolio_companies` counts every company the firm has ever invested
    /// in; the other figures cover `year` only.
    pub fn survey_status(&self, year: i32) -> SurveyStatus {
        let investments: Vec<&Investment> = self
            .investments
            .iter()
            .filter(|i| i.calendar_year() == year)
            .collect();

        let invested: HashSet<&str> = investments.iter().map(|i| i.company_id.as_str()).collect();
        let member_company: HashMap<&str, &str> = self
            .members
            .iter()
            .map(|m| (m.id.as_str(), m.company_id.as_str()))
            .collect();

        let invitations: Vec<&SurveyInvitation> = self
            .invitations
            .iter()
            .filter(|inv| inv.calendar_year == year)
            .filter(|inv| {
                member_company
                    .get(inv.member_id.as_str())
                    .map(|company| invested.contains(company))
                    .unwrap_or(false)
            })
            .collect();

        let surveys_sent = invitations
            .iter()
            .filter(|inv| inv.status != InvitationStatus::Pending)
            .count();
        let surveys_completed = invitations
            .iter()
            .filter(|inv| inv.status == InvitationStatus::Completed)
            .count();

        SurveyStatus {
            calendar_year: year,
            portfolio_companies: self
                .investments
                .iter()
                .map(|i| i.company_id.as_str())
                .collect::<HashSet<_>>()
                .len(),
            total_investments: investments.len(),
            total_investment_amount: investments.iter().map(|i| i.amount).sum(),
            surveys_sent,
            surveys_completed,
            response_rate: crate::analysis::percentage(
                surveys_completed as f64,
                surveys_sent as f64,
            ),
        }
    }

    /// Responses from a member's completed invitations for `year`.
    fn completed_responses<'a>(
        &'a self,
        member_id: &'a str,
        year: i32,
    ) -> impl Iterator<Item = SurveyResponse> + 'a {
        self.invitations
            .iter()
            .filter(move |inv| {
                inv.member_id == member_id
                    && inv.calendar_year == year
                    && inv.status == InvitationStatus::Completed
            })
            .filter_map(|inv| inv.response)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}
