//! Error types for loading a deal snapshot

use thiserror::Error;

/// Result type for store construction
pub type DealResult<T> = Result<T, DealError>;

/// Errors raised while building a [`crate::DealStore`]
///
/// Queries never fail; every variant here describes malformed seed data.
#[derive(Debug, Error)]
pub enum DealError {
    #[error("I/O error reading deal data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed deal on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate deal id '{0}'")]
    DuplicateId(String),

    #[error("Invalid deal '{id}': {reason}")]
    InvalidDeal { id: String, reason: String },
}

impl DealError {
    pub fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        DealError::InvalidDeal {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
