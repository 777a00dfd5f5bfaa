//! src/domain/mod.rs
mod email;
pub use email::EmailAddress;

mod error;
pub use error::PromptError;

mod submission;
pub use submission::EmailSubmission;
