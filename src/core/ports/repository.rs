//! Repository port
//!
//! Defines the read-only view of the repository that policy rules need.

use crate::core::models::{Commit, Identity, RefChange};

/// Repository handle abstraction
///
/// Implementations resolve commit history for a pushed ref. The core never
/// writes through this trait.
pub trait Repository: Send + Sync {
    /// Commits introduced by `change`, oldest first
    ///
    /// Commits already reachable from existing refs are not included.
    fn new_commits(&self, change: &RefChange) -> anyhow::Result<Vec<Commit>>;

    /// Identity of the user performing the push, if known
    fn pusher(&self) -> Option<Identity>;
}
