//! Repository configuration.

use crate::{Result, StorageError};
use serde::{Deserialize, Serialize};
use twig_types::{BranchName, MAX_MESSAGE_LENGTH};

/// Configuration for a [`Repository`](crate::Repository).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Branch created implicitly when the repository is initialized.
    pub default_branch: BranchName,
    /// Maximum commit message length in bytes.
    pub max_message_len: usize,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            default_branch: BranchName::default(),
            max_message_len: MAX_MESSAGE_LENGTH,
        }
    }
}

impl RepoConfig {
    /// Checks the configuration for values no repository can run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_message_len == 0 {
            return Err(StorageError::InvalidConfig(
                "max_message_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
