//! Commit model
//!
//! The subset of commit metadata policy rules look at.

use serde::{Deserialize, Serialize};

/// A person as recorded on a commit, or the user pushing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl Identity {
    /// Create an identity
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A commit introduced by a push
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full hex commit id
    pub id: String,
    /// Raw commit message
    pub message: String,
    /// Author identity
    pub author: Identity,
    /// Committer identity
    pub committer: Identity,
    /// Number of parents
    pub parent_count: usize,
}

impl Commit {
    /// Whether this is a merge commit
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        self.parent_count > 1
    }

    /// Message without the line terminators git leaves at the end
    ///
    /// Every message pattern is matched against this. Trailing spaces and
    /// tabs are kept.
    #[must_use]
    pub fn trimmed_message(&self) -> &str {
        self.message.trim_end_matches(['\r', '\n'])
    }
}
