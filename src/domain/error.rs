//! src/domain/error.rs

/// Everything that can go wrong while the prompt is on screen.
///
/// The `Display` strings are shown to the user as-is.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptError {
    #[error("Please enter your email address")]
    EmptyInput,
    #[error("Please enter a valid email address")]
    InvalidFormat,
    #[error("Failed to save email. Please try again.")]
    SubmissionFailed,
}
