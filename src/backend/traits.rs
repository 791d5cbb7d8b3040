//! Trait abstractions for the external collaborators to enable mocking in tests

use super::error::{PrecheckError, StoreError};
use crate::state::FormRecord;
use async_trait::async_trait;

/// Where finished signups are stored
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupStore: Send + Sync {
    /// Insert one complete record
    async fn insert_signup(&self, record: &FormRecord) -> Result<(), StoreError>;
}

/// Remote check that an email belongs to an academic institution
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcademicEmailVerifier: Send + Sync {
    /// `Ok(true)` valid, `Ok(false)` definitely not academic, `Err` inconclusive
    async fn verify(&self, email: &str) -> Result<bool, PrecheckError>;
}
