//! Error types for the external collaborators

use thiserror::Error;

/// PostgreSQL `unique_violation`, reported when the email is already stored
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Failure inserting a signup row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A row with the same unique key already exists
    #[error("duplicate record ({code}): {message}")]
    Duplicate { code: String, message: String },

    /// The store answered with an error other than a duplicate
    #[error("store rejected insert with status {status}: {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The request never got a usable answer
    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not decode store response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Build the right variant from an error code returned by the store
    pub fn from_code(status: u16, code: Option<String>, message: String) -> Self {
        match code {
            Some(code) if code == UNIQUE_VIOLATION_CODE => Self::Duplicate { code, message },
            code => Self::Rejected {
                status,
                code,
                message,
            },
        }
    }
}

/// Failure asking the verification service about an email.
///
/// Every variant means "inconclusive"; a definite "not academic" answer is
/// `Ok(false)`, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecheckError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("verification service returned status {0}")]
    Status(u16),

    #[error("could not decode verification response: {0}")]
    Decode(String),
}
