//! Backward history traversal.

use crate::{Commit, CommitStore};
use std::iter::FusedIterator;
use twig_types::CommitId;

/// Iterator walking parent links from a starting commit to the root.
///
/// Yields the starting commit first and the root last. Walking never
/// mutates the store, and a new walk from the same start yields the
/// same sequence. A walk that hits a missing commit stops early;
/// [`Repository::log`](crate::Repository::log) reports that as corruption.
#[derive(Debug, Clone)]
pub struct History<'a> {
    store: &'a CommitStore,
    next: Option<CommitId>,
}

impl<'a> History<'a> {
    /// Starts a walk at `from`. A `None` start yields nothing.
    pub fn new(store: &'a CommitStore, from: Option<CommitId>) -> Self {
        Self { store, next: from }
    }
}

impl<'a> Iterator for History<'a> {
    type Item = &'a Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        match self.store.get(id) {
            Ok(commit) => {
                debug_assert!(commit.parent().map_or(true, |parent| parent < id));
                self.next = commit.parent();
                Some(commit)
            }
            Err(err) => {
                tracing::error!(commit = %id, error = %err, "history walk hit a missing commit");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            // Parents have smaller ids, so at most id + 1 commits remain.
            Some(id) => (0, Some(id.as_index().saturating_add(1))),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for History<'_> {}
