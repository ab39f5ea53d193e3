//! CLI support for shape-lang
//!
//! Provides programmatic access to the `shape` CLI functionality for
//! embedding in other tools.

mod check;
mod convert;
mod docs;
mod onboard;

pub use check::{CheckArgs, CheckResult, execute_check};
pub use convert::json_to_value;
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use onboard::get_onboarding_content;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Validation failed: {0}")]
    Validation(#[from] crate::ValidationError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'shape docs' to see available categories.")]
    UnknownCategory(String),
}
