//! Git integration adapter
//!
//! Implements the `Repository` port on top of `git2`.
//!
//! - [`hooks`] - pre-receive hook installation

pub mod hooks;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use git2::{Oid, Sort};

use crate::core::models::{Commit, Identity, ObjectId, RefChange};
use crate::core::ports::Repository;

pub use hooks::install_pre_receive;

/// Refs whose history counts as already known to the server
const KNOWN_REFS: &[&str] = &["refs/heads/*", "refs/tags/*"];

/// `git2`-backed repository handle
///
/// Meant to run inside a `pre-receive` hook: pushed objects are already in
/// the object database but refs still point at their old values, so every
/// commit reachable from an existing branch or tag is considered known.
pub struct GitRepository {
    repo: Mutex<git2::Repository>,
    git_dir: PathBuf,
    pusher: Option<Identity>,
}

impl GitRepository {
    /// Wrap an opened repository
    #[must_use]
    pub fn new(repo: git2::Repository) -> Self {
        let git_dir = repo.path().to_path_buf();
        Self {
            repo: Mutex::new(repo),
            git_dir,
            pusher: None,
        }
    }

    /// Open the repository at `path`
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(git2::Repository::open(path)?))
    }

    /// Open the repository git runs the hook in (`GIT_DIR`, else discovery)
    pub fn open_from_env() -> anyhow::Result<Self> {
        Ok(Self::new(git2::Repository::open_from_env()?))
    }

    /// Set the identity of the user pushing
    #[must_use]
    pub fn with_pusher(mut self, pusher: Option<Identity>) -> Self {
        self.pusher = pusher;
        self
    }

    /// The repository's git directory
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }
}

impl std::fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepository")
            .field("git_dir", &self.git_dir)
            .field("pusher", &self.pusher)
            .finish_non_exhaustive()
    }
}

impl Repository for GitRepository {
    fn new_commits(&self, change: &RefChange) -> anyhow::Result<Vec<Commit>> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| anyhow::anyhow!("repository handle poisoned"))?;

        let mut walk = repo.revwalk()?;
        walk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        walk.push(parse_oid(change.to_hash())?)?;

        if !change.from_hash().is_zero() {
            walk.hide(parse_oid(change.from_hash())?)?;
        }
        for glob in KNOWN_REFS {
            walk.hide_glob(glob)?;
        }

        let mut commits = Vec::new();
        for oid in walk {
            let commit = repo.find_commit(oid?)?;
            commits.push(to_commit(&commit));
        }

        log::debug!("{}: {} new commit(s)", change.ref_id(), commits.len());
        Ok(commits)
    }

    fn pusher(&self) -> Option<Identity> {
        self.pusher.clone()
    }
}

fn parse_oid(id: &ObjectId) -> anyhow::Result<Oid> {
    Oid::from_str(id.as_str()).map_err(|e| anyhow::anyhow!("invalid object id {id}: {e}"))
}

fn to_commit(commit: &git2::Commit<'_>) -> Commit {
    Commit {
        id: commit.id().to_string(),
        message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        author: to_identity(&commit.author()),
        committer: to_identity(&commit.committer()),
        parent_count: commit.parent_count(),
    }
}

fn to_identity(signature: &git2::Signature<'_>) -> Identity {
    Identity::new(
        String::from_utf8_lossy(signature.name_bytes()),
        String::from_utf8_lossy(signature.email_bytes()),
    )
}
