//! Errors raised while loading and validating portfolio records.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Reasons a portfolio file cannot be turned into report inputs.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for a portfolio.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is not valid TOML for a portfolio.
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A firm, company or member has an empty name.
    #[error("{kind} '{id}' has an empty name")]
    MissingName { kind: &'static str, id: String },

    /// A founding member's email address is not usable.
    #[error("member '{member}' has an invalid email address '{email}'")]
    InvalidEmail { member: String, email: String },

    /// An investment amount is zero, negative or not a number.
    #[error("investment '{investment}' has invalid amount {amount}; amounts must be positive")]
    InvalidAmount { investment: String, amount: f64 },

    /// A record points at a company that does not exist.
    #[error("{kind} '{id}' references unknown company '{company_id}'")]
    UnknownCompany {
        kind: &'static str,
        id: String,
        company_id: String,
    },

    /// An invitation points at a member that does not exist.
    #[error("survey invitation for {year} references unknown member '{member_id}'")]
    UnknownMember { member_id: String, year: i32 },

    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// A completed invitation carries no answers.
    #[error("completed survey invitation for member '{member_id}' ({year}) has no response")]
    MissingResponse { member_id: String, year: i32 },
}
