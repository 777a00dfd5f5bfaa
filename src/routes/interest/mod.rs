//! src/routes/interest/mod.rs
mod get;
pub use get::*;

mod post;
pub use post::*;

/// Where a submitted address goes and where the user lands afterwards.
#[derive(Debug, Clone)]
pub struct PromptTarget {
    pub table: String,
    pub home_path: String,
}
