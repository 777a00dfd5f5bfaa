//! src/domain/submission.rs
use crate::domain::EmailAddress;
use serde::Serialize;

/// The row inserted into the remote table.
#[derive(Debug, Clone, Serialize)]
pub struct EmailSubmission {
    pub email: EmailAddress,
}

impl From<EmailAddress> for EmailSubmission {
    fn from(email: EmailAddress) -> Self {
        Self { email }
    }
}
