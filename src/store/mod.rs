//! src/store/mod.rs
use crate::domain::EmailSubmission;
use crate::utils::error_chain_fmt;
use std::future::Future;

mod rest;
pub use rest::RestEmailStore;

/// Table the prompt writes to unless configured otherwise.
pub const DEFAULT_TABLE: &str = "emails";

/// The single persistence capability the prompt needs.
pub trait EmailStore {
    fn insert(
        &self,
        table: &str,
        submission: &EmailSubmission,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl<T> EmailStore for &T
where
    T: EmailStore + Sync,
{
    fn insert(
        &self,
        table: &str,
        submission: &EmailSubmission,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).insert(table, submission)
    }
}

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("Failed to send the insert request")]
    Transport(#[source] reqwest::Error),
    #[error("The remote table rejected the insert with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
