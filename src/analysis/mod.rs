//! The statutory aggregation engine.
//!
//! `eligibility` holds the per-founder and per-business rules, `aggregator`
//! builds the report parts on top of them.

pub mod aggregator;
pub mod eligibility;

pub use aggregator::*;
pub use eligibility::*;
