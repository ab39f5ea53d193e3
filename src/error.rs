use thiserror::Error;

use crate::{evaluator::ValidationError, parser::ParseError};

/// Either half of a one-shot compile-and-check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The type text is malformed
    #[error("invalid type: {0}")]
    Parse(#[from] ParseError),

    /// The value does not match the type
    #[error("value does not match: {0}")]
    Validation(#[from] ValidationError),
}
