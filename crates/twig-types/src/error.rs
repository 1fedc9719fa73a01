//! Validation error types.

use thiserror::Error;

/// Errors produced when constructing validated values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The branch name violates ref-name rules.
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    /// The commit message is empty or too long.
    #[error("invalid commit message: {0}")]
    InvalidMessage(String),
}
