//! Commit records and the append-only commit table.

use crate::{Result, StorageError};
use serde::{Deserialize, Serialize};
use twig_types::CommitId;

/// An immutable history record.
///
/// Each commit points back at the commit it was made on top of, forming
/// a chain that ends at a root commit with no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    id: CommitId,
    parent: Option<CommitId>,
    message: String,
}

impl Commit {
    /// Returns the commit id.
    pub fn id(&self) -> CommitId {
        self.id
    }

    /// Returns the parent commit id, or `None` for a root commit.
    pub fn parent(&self) -> Option<CommitId> {
        self.parent
    }

    /// Returns the commit message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this commit has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only table of commits addressed by id.
///
/// Ids are handed out by a single counter starting at [`CommitId::FIRST`],
/// so a commit's id is also its position in the table. Parents always
/// precede their children.
#[derive(Debug)]
pub struct CommitStore {
    commits: Vec<Commit>,
    next_id: CommitId,
}

impl Default for CommitStore {
    fn default() -> Self {
        Self {
            commits: Vec::new(),
            next_id: CommitId::FIRST,
        }
    }
}

impl CommitStore {
    /// Creates a new empty commit store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id the next appended commit will receive.
    pub fn next_id(&self) -> CommitId {
        self.next_id
    }

    /// Appends a commit on top of `parent` and returns its id.
    pub fn append(
        &mut self,
        parent: Option<CommitId>,
        message: impl Into<String>,
    ) -> Result<CommitId> {
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(StorageError::Corruption(format!(
                    "parent {parent} is not in the commit table"
                )));
            }
        }

        let id = self.next_id;
        let next_id = id.checked_next().ok_or_else(|| {
            StorageError::Corruption(format!("commit id counter exhausted at {id}"))
        })?;
        debug_assert_eq!(id.as_index(), self.commits.len());

        self.next_id = next_id;
        self.commits.push(Commit {
            id,
            parent,
            message: message.into(),
        });
        Ok(id)
    }

    /// Retrieves a commit by id.
    pub fn get(&self, id: CommitId) -> Result<&Commit> {
        self.commits
            .get(id.as_index())
            .ok_or(StorageError::CommitNotFound(id))
    }

    /// Checks if a commit exists.
    pub fn contains(&self, id: CommitId) -> bool {
        id.as_index() < self.commits.len()
    }

    /// Returns the number of commits in the store.
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Iterates over all commits in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Commit> {
        self.commits.iter()
    }
}
