//! Storage error types.

use thiserror::Error;
use twig_types::{CommitId, TypeError};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A caller supplied a malformed branch name or commit message.
    #[error(transparent)]
    InvalidInput(#[from] TypeError),

    /// The requested branch does not exist.
    #[error("branch not found: {0}")]
    BranchNotFound(String),

    /// A branch with this name already exists.
    #[error("branch already exists: {0}")]
    BranchExists(String),

    /// The requested commit does not exist.
    #[error("commit not found: {0}")]
    CommitNotFound(CommitId),

    /// A repository with this name already exists.
    #[error("repository already exists: {0}")]
    RepoExists(String),

    /// The requested repository does not exist.
    #[error("repository not found: {0}")]
    RepoNotFound(String),

    /// The repository configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An internal invariant was broken.
    #[error("corruption detected: {0}")]
    Corruption(String),
}

impl StorageError {
    /// Returns true for errors caused by caller input rather than state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
