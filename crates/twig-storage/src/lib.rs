//! In-memory commit history for Twig.
//!
//! This crate provides the version-tracking core: an append-only table
//! of commits, a set of named branches pointing into it, and a
//! [`Repository`] that ties them together behind `commit`, `checkout`
//! and `log`.
//!
//! ```
//! use twig_storage::Repository;
//!
//! let mut repo = Repository::new("demo");
//! repo.commit("Initial commit").unwrap();
//! repo.commit("Change 1").unwrap();
//!
//! repo.checkout("testing").unwrap().commit("Change 2").unwrap();
//! repo.checkout("master").unwrap();
//!
//! let ids: Vec<u64> = repo.log().unwrap().iter().map(|c| c.id().get()).collect();
//! assert_eq!(ids, vec![1, 0]);
//! ```

mod config;
mod error;
mod history;
mod object;
mod refs;
mod store;

pub use config::RepoConfig;
pub use error::StorageError;
pub use history::History;
pub use object::{Commit, CommitStore};
pub use refs::{Branch, RefStore};
pub use store::{RepoStore, Repository, SharedRepository};

pub use twig_types::{BranchName, CommitId, TypeError};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
