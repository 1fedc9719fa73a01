//! Branch management.

use crate::{Result, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use twig_types::{BranchName, CommitId};

/// A named pointer to the newest commit on one line of history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    name: BranchName,
    tip: Option<CommitId>,
}

impl Branch {
    /// Creates a branch pointing at `tip`.
    pub fn new(name: BranchName, tip: Option<CommitId>) -> Self {
        Self { name, tip }
    }

    /// Returns the branch name.
    pub fn name(&self) -> &BranchName {
        &self.name
    }

    /// Returns the tip commit, or `None` if nothing was committed yet.
    pub fn tip(&self) -> Option<CommitId> {
        self.tip
    }
}

/// The set of branches in a repository, keyed by name.
#[derive(Debug, Default)]
pub struct RefStore {
    branches: BTreeMap<BranchName, Branch>,
}

impl RefStore {
    /// Creates a new empty branch store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a branch store holding a single branch.
    pub fn with_branch(branch: Branch) -> Self {
        let mut branches = BTreeMap::new();
        branches.insert(branch.name.clone(), branch);
        Self { branches }
    }

    /// Gets a branch by name.
    pub fn get(&self, name: &BranchName) -> Result<&Branch> {
        self.branches
            .get(name)
            .ok_or_else(|| StorageError::BranchNotFound(name.to_string()))
    }

    /// Checks if a branch exists.
    pub fn contains(&self, name: &BranchName) -> bool {
        self.branches.contains_key(name)
    }

    /// Inserts a new branch. Existing branches are never replaced.
    pub fn insert(&mut self, branch: Branch) -> Result<()> {
        if self.contains(&branch.name) {
            return Err(StorageError::BranchExists(branch.name.to_string()));
        }
        self.branches.insert(branch.name.clone(), branch);
        Ok(())
    }

    /// Moves a branch tip to `target`.
    pub fn set_tip(&mut self, name: &BranchName, target: CommitId) -> Result<()> {
        let branch = self
            .branches
            .get_mut(name)
            .ok_or_else(|| StorageError::BranchNotFound(name.to_string()))?;
        branch.tip = Some(target);
        Ok(())
    }

    /// Lists all branches ordered by name.
    pub fn list(&self) -> impl Iterator<Item = &Branch> {
        self.branches.values()
    }

    /// Returns the number of branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Returns true if there are no branches.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> BranchName {
        BranchName::new(s).unwrap()
    }

    #[test]
    fn test_ref_store_basic() {
        let mut store = RefStore::new();
        store.insert(Branch::new(name("master"), None)).unwrap();

        let branch = store.get(&name("master")).unwrap();
        assert_eq!(branch.name().as_str(), "master");
        assert!(branch.tip().is_none());
    }

    #[test]
    fn test_ref_store_with_branch() {
        let store = RefStore::with_branch(Branch::new(name("main"), None));
        assert_eq!(store.len(), 1);
        assert!(store.contains(&name("main")));
    }

    #[test]
    fn test_ref_store_set_tip() {
        let mut store = RefStore::new();
        store.insert(Branch::new(name("master"), None)).unwrap();

        store.set_tip(&name("master"), CommitId::new(0)).unwrap();
        assert_eq!(store.get(&name("master")).unwrap().tip(), Some(CommitId::new(0)));

        store.set_tip(&name("master"), CommitId::new(1)).unwrap();
        assert_eq!(store.get(&name("master")).unwrap().tip(), Some(CommitId::new(1)));
    }

    #[test]
    fn test_ref_store_get_not_found() {
        let store = RefStore::new();
        let result = store.get(&name("nonexistent"));
        assert!(matches!(result, Err(StorageError::BranchNotFound(_))));
    }

    #[test]
    fn test_ref_store_set_tip_not_found() {
        let mut store = RefStore::new();
        let result = store.set_tip(&name("nonexistent"), CommitId::new(0));
        assert!(matches!(result, Err(StorageError::BranchNotFound(_))));
    }

    #[test]
    fn test_ref_store_duplicate_insert_keeps_original() {
        let mut store = RefStore::new();
        store
            .insert(Branch::new(name("master"), Some(CommitId::new(1))))
            .unwrap();

        let result = store.insert(Branch::new(name("master"), None));
        assert!(matches!(result, Err(StorageError::BranchExists(_))));
        assert_eq!(store.get(&name("master")).unwrap().tip(), Some(CommitId::new(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ref_listing_sorted() {
        let mut store = RefStore::new();
        store.insert(Branch::new(name("testing"), None)).unwrap();
        store.insert(Branch::new(name("feature"), None)).unwrap();
        store.insert(Branch::new(name("master"), None)).unwrap();

        let names: Vec<&str> = store.list().map(|b| b.name().as_str()).collect();
        assert_eq!(names, vec!["feature", "master", "testing"]);
    }

    #[test]
    fn test_ref_store_default() {
        let store: RefStore = Default::default();
        assert!(store.is_empty());
        assert_eq!(store.list().count(), 0);
    }
}
