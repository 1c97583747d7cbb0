//! vcdisclose - Venture Capital Demographic Data Report engine
//!
//! Turns a firm's portfolio records into the three-part annual demographic
//! disclosure: aggregated founder survey responses (Part I), investments in
//! businesses primarily founded by diverse founding team members (Part II)
//! and per-business investment details (Part III).
//!
//! The aggregation engine in [`analysis`] is pure and infallible. Loading and
//! validation of records lives in [`ledger`], rendering in [`report`].

pub mod analysis;
pub mod cli;
pub mod config;
pub mod demographics;
pub mod ledger;
pub mod models;
pub mod report;

pub use analysis::{
    compose_report, generate_full_report, has_category, is_diverse_founder, is_primarily_diverse,
};
pub use demographics::{DemographicCategory, DemographicField};
pub use ledger::{LedgerError, LedgerResult, Portfolio};
pub use models::{Business, ReportData, SurveyResponse};
