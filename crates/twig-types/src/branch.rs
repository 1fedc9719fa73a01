//! Branch names.

use crate::TypeError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters and sequences git never allows anywhere in a ref name:
/// ASCII control characters, space, `~ ^ : ? * [ \`, `..` and `@{`.
static FORBIDDEN_SEQUENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x1f\x7f ~^:?*\[\\]|\.\.|@\{").expect("Invalid regex")
});

/// Maximum length of a branch name in bytes.
pub const MAX_BRANCH_NAME_LENGTH: usize = 255;

/// A validated branch name.
///
/// Names follow git's refname rules (see `git check-ref-format`):
/// - cannot be empty or exactly `@`
/// - cannot start with `-` or `.`
/// - cannot end with `/`, `.` or `.lock`
/// - cannot contain `..`, `@{`, `//`, space, `~ ^ : ? * [ \` or control characters
/// - no path component may start with `.` or end with `.lock`
///
/// Everything else is accepted, including non-ASCII text.
///
/// ```
/// use twig_types::BranchName;
///
/// assert!(BranchName::new("feature/login").is_ok());
/// assert!(BranchName::new("café").is_ok());
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("bad..name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Creates a validated branch name.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidBranchName`] if `name` breaks any rule.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(reason: impl Into<String>) -> Result<(), TypeError> {
    Err(TypeError::InvalidBranchName(reason.into()))
}

fn validate(name: &str) -> Result<(), TypeError> {
    if name.is_empty() {
        return invalid("branch name cannot be empty");
    }
    if name.len() > MAX_BRANCH_NAME_LENGTH {
        return invalid(format!("branch name exceeds {MAX_BRANCH_NAME_LENGTH} bytes"));
    }
    if name == "@" {
        return invalid("branch name cannot be '@'");
    }
    if name.starts_with('-') {
        return invalid("branch name cannot start with '-'");
    }
    if let Some(found) = FORBIDDEN_SEQUENCE_REGEX.find(name) {
        return invalid(format!("branch name cannot contain {:?}", found.as_str()));
    }
    if name.contains("//") {
        return invalid("branch name cannot contain '//'");
    }
    if name.ends_with('/') {
        return invalid("branch name cannot end with '/'");
    }
    if name.ends_with('.') {
        return invalid("branch name cannot end with '.'");
    }
    for component in name.split('/') {
        if component.starts_with('.') {
            return invalid("path component cannot start with '.'");
        }
        if component.ends_with(".lock") {
            return invalid("path component cannot end with '.lock'");
        }
    }

    Ok(())
}

impl Default for BranchName {
    /// The branch a fresh repository starts on.
    fn default() -> Self {
        Self(crate::DEFAULT_BRANCH.to_string())
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BranchName {
    type Error = TypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: names without forbidden characters are accepted, non-ASCII included
        #[test]
        fn prop_simple_names_accepted(name in "[a-zA-Z0-9éü日][a-zA-Z0-9éü日#+@_-]{0,40}") {
            prop_assert!(BranchName::new(name.clone()).is_ok());
        }

        /// Property: whitespace anywhere is rejected
        #[test]
        fn prop_whitespace_rejected(prefix in "[a-z]{1,10}", suffix in "[a-z]{0,10}") {
            let name = format!("{prefix} {suffix}");
            prop_assert!(BranchName::new(name).is_err());
        }
    }
}
