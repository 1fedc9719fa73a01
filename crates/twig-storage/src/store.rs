//! Repository and repository registry.

use crate::{Branch, Commit, CommitStore, History, RefStore, RepoConfig, Result, StorageError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use twig_types::{validate_message, BranchName, CommitId};

/// A repository: commits, branches and the checked-out branch (HEAD).
///
/// `Repository` holds no locks. Share one between threads through
/// [`RepoStore`], which wraps each repository in a [`RwLock`].
#[derive(Debug)]
pub struct Repository {
    name: String,
    config: RepoConfig,
    commits: CommitStore,
    refs: RefStore,
    head: BranchName,
}

impl Repository {
    /// Creates a new empty repository on the default branch.
    pub fn new(name: impl Into<String>) -> Self {
        Self::init(name.into(), RepoConfig::default())
    }

    /// Creates a new empty repository with a custom configuration.
    pub fn with_config(name: impl Into<String>, config: RepoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::init(name.into(), config))
    }

    fn init(name: String, config: RepoConfig) -> Self {
        let head = config.default_branch.clone();
        let refs = RefStore::with_branch(Branch::new(head.clone(), None));
        tracing::debug!(repo = %name, branch = %head, "Initialized repository");

        Self {
            name,
            config,
            commits: CommitStore::new(),
            refs,
            head,
        }
    }

    /// Returns the repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the repository configuration.
    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// Records a new commit on top of HEAD and advances HEAD's branch to it.
    ///
    /// Ids come from one repository-wide counter, so the first commit on
    /// a forked branch continues the sequence instead of restarting at 0.
    /// A rejected message leaves the repository untouched.
    pub fn commit(&mut self, message: impl Into<String>) -> Result<Commit> {
        let message = message.into();
        if let Err(err) = validate_message(&message, self.config.max_message_len) {
            tracing::warn!(repo = %self.name, error = %err, "Rejected commit");
            return Err(err.into());
        }

        let parent = self.head_branch()?.tip();
        let id = self.commits.append(parent, message)?;
        self.refs.set_tip(&self.head, id)?;

        let commit = self.commits.get(id)?;
        tracing::debug!(
            repo = %self.name,
            branch = %self.head,
            commit = %id,
            message = %commit.message(),
            "Created commit"
        );
        Ok(commit.clone())
    }

    /// Switches HEAD to `name`, creating the branch if it does not exist.
    ///
    /// A new branch forks at HEAD's current tip. Checkout never creates
    /// commits and never moves an existing branch.
    pub fn checkout(&mut self, name: &str) -> Result<&mut Self> {
        let name = BranchName::new(name).inspect_err(|err| {
            tracing::warn!(repo = %self.name, error = %err, "Rejected checkout");
        })?;

        if self.refs.contains(&name) {
            self.switch_to(name);
        } else {
            self.fork_to(name)?;
        }
        Ok(self)
    }

    /// Creates a new branch at HEAD's tip and switches to it.
    ///
    /// Fails with [`StorageError::BranchExists`] if the name is taken.
    pub fn create_branch(&mut self, name: &str) -> Result<&mut Self> {
        let name = BranchName::new(name)?;
        if self.refs.contains(&name) {
            return Err(StorageError::BranchExists(name.to_string()));
        }
        self.fork_to(name)?;
        Ok(self)
    }

    /// Switches HEAD to an existing branch.
    ///
    /// Fails with [`StorageError::BranchNotFound`] if there is no such branch.
    pub fn switch_branch(&mut self, name: &str) -> Result<&mut Self> {
        let name = BranchName::new(name)?;
        if !self.refs.contains(&name) {
            return Err(StorageError::BranchNotFound(name.to_string()));
        }
        self.switch_to(name);
        Ok(self)
    }

    fn switch_to(&mut self, name: BranchName) {
        tracing::info!(repo = %self.name, branch = %name, "Switched to existing branch");
        self.head = name;
    }

    fn fork_to(&mut self, name: BranchName) -> Result<()> {
        let tip = self.head_branch()?.tip();
        self.refs.insert(Branch::new(name.clone(), tip))?;
        tracing::info!(
            repo = %self.name,
            branch = %name,
            from = %self.head,
            "Switched to new branch"
        );
        self.head = name;
        Ok(())
    }

    /// Returns the visible history of HEAD, newest first.
    ///
    /// Empty when nothing has been committed on the current branch.
    pub fn log(&self) -> Result<Vec<&Commit>> {
        self.collect_history(self.head_branch()?.tip())
    }

    /// Returns the history of any branch without switching to it.
    pub fn log_branch(&self, name: &str) -> Result<Vec<&Commit>> {
        let name = BranchName::new(name)?;
        let tip = self.refs.get(&name)?.tip();
        self.collect_history(tip)
    }

    /// Materializes a walk and checks that it ends at a root commit.
    fn collect_history(&self, tip: Option<CommitId>) -> Result<Vec<&Commit>> {
        let commits: Vec<&Commit> = self.history(tip).collect();
        match (tip, commits.last()) {
            (None, _) => Ok(commits),
            (Some(_), Some(last)) if last.is_root() => Ok(commits),
            (Some(tip), _) => Err(StorageError::Corruption(format!(
                "history from {tip} does not reach a root commit"
            ))),
        }
    }

    /// Lazily walks history backward from `from` to the root.
    pub fn history(&self, from: Option<CommitId>) -> History<'_> {
        History::new(&self.commits, from)
    }

    /// Returns true if `ancestor` is reachable from `descendant` by parent links.
    ///
    /// A commit counts as its own ancestor.
    pub fn is_ancestor(&self, ancestor: CommitId, descendant: CommitId) -> Result<bool> {
        self.commits.get(ancestor)?;
        self.commits.get(descendant)?;
        Ok(self
            .history(Some(descendant))
            .take_while(|commit| commit.id() >= ancestor)
            .any(|commit| commit.id() == ancestor))
    }

    /// Returns the currently checked-out branch name.
    pub fn current_branch(&self) -> &BranchName {
        &self.head
    }

    /// Returns the commit at HEAD's tip, if any.
    pub fn head(&self) -> Result<Option<&Commit>> {
        match self.head_branch()?.tip() {
            Some(id) => Ok(Some(self.commits.get(id)?)),
            None => Ok(None),
        }
    }

    /// Gets a branch by name.
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        let name = BranchName::new(name).ok()?;
        self.refs.get(&name).ok()
    }

    /// Lists all branches ordered by name.
    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.refs.list()
    }

    /// Returns the number of branches.
    pub fn branch_count(&self) -> usize {
        self.refs.len()
    }

    /// Retrieves a commit by id.
    pub fn get_commit(&self, id: CommitId) -> Result<&Commit> {
        self.commits.get(id)
    }

    /// Returns the number of commits across all branches.
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    fn head_branch(&self) -> Result<&Branch> {
        self.refs.get(&self.head).map_err(|_| {
            debug_assert!(false, "HEAD names missing branch {}", self.head);
            StorageError::Corruption(format!("HEAD names missing branch {}", self.head))
        })
    }
}

/// A repository shared between threads.
pub type SharedRepository = Arc<RwLock<Repository>>;

/// Registry of repositories keyed by name.
///
/// Each repository sits behind its own lock, giving one writer at a time
/// per repository.
#[derive(Debug, Default)]
pub struct RepoStore {
    repos: RwLock<HashMap<String, SharedRepository>>,
}

impl RepoStore {
    /// Creates a new empty repository store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new repository with the default configuration.
    pub fn create(&self, name: &str) -> Result<SharedRepository> {
        self.create_with_config(name, RepoConfig::default())
    }

    /// Creates a new repository with a custom configuration.
    pub fn create_with_config(&self, name: &str, config: RepoConfig) -> Result<SharedRepository> {
        let mut repos = self.repos.write();
        if repos.contains_key(name) {
            return Err(StorageError::RepoExists(name.to_string()));
        }

        let repo = Arc::new(RwLock::new(Repository::with_config(name, config)?));
        repos.insert(name.to_string(), repo.clone());
        tracing::info!(repo = %name, "Created repository");
        Ok(repo)
    }

    /// Gets a repository by name.
    pub fn get(&self, name: &str) -> Result<SharedRepository> {
        self.repos
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::RepoNotFound(name.to_string()))
    }

    /// Removes a repository and returns it.
    pub fn remove(&self, name: &str) -> Result<SharedRepository> {
        self.repos
            .write()
            .remove(name)
            .ok_or_else(|| StorageError::RepoNotFound(name.to_string()))
    }

    /// Lists repository names in sorted order.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.repos.read().keys().cloned().collect();
        names.sort();
        names
    }
}
