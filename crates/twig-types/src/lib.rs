//! Common types used throughout `twig`.
//!
//! This crate provides the validated values shared by the Twig
//! history store: commit identifiers, branch names and commit
//! message checks.

mod branch;
mod error;
mod id;
mod message;

pub use branch::{BranchName, MAX_BRANCH_NAME_LENGTH};
pub use error::TypeError;
pub use id::CommitId;
pub use message::{validate_message, MAX_MESSAGE_LENGTH};

/// Name of the branch a fresh repository starts on.
pub const DEFAULT_BRANCH: &str = "master";
