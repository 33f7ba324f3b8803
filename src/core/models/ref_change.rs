//! Ref change model
//!
//! A ref change is one line of a push: "move this ref from A to B".
//!
//! # Examples
//!
//! ```
//! use pushgate::core::models::{ObjectId, RefChange, RefChangeType};
//!
//! let change = RefChange::new(
//!     "refs/heads/feature/login",
//!     RefChangeType::Add,
//!     ObjectId::zero(),
//!     ObjectId::new("3f786850e387550fdab836ed7e6dc881de23001b"),
//! );
//! assert_eq!(change.branch_name(), Some("feature/login"));
//! assert!(change.from_hash().is_zero());
//! ```

use serde::{Deserialize, Serialize};

/// Prefix of branch refs
pub const BRANCH_PREFIX: &str = "refs/heads/";

/// Prefix of tag refs
pub const TAG_PREFIX: &str = "refs/tags/";

/// A hex object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// The all-zero identifier git uses for "does not exist"
    pub const ZERO: &'static str = "0000000000000000000000000000000000000000";

    /// Wrap a hex identifier
    #[must_use]
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// The all-zero identifier
    #[must_use]
    pub fn zero() -> Self {
        Self(Self::ZERO.to_string())
    }

    /// Whether this identifier denotes a nonexistent object
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b == b'0')
    }

    /// The hex string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of ref update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RefChangeType {
    /// Ref is created
    Add,
    /// Ref moves to a new commit
    Update,
    /// Ref is removed
    Delete,
}

impl RefChangeType {
    /// Derive the change type from the old and new identifiers of a hook line
    #[must_use]
    pub fn infer(from: &ObjectId, to: &ObjectId) -> Self {
        if to.is_zero() {
            Self::Delete
        } else if from.is_zero() {
            Self::Add
        } else {
            Self::Update
        }
    }
}

impl std::fmt::Display for RefChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "ADD"),
            Self::Update => write!(f, "UPDATE"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single ref update within a push
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefChange {
    ref_id: String,
    change_type: RefChangeType,
    from_hash: ObjectId,
    to_hash: ObjectId,
}

impl RefChange {
    /// Create a ref change
    #[must_use]
    pub fn new(
        ref_id: impl Into<String>,
        change_type: RefChangeType,
        from_hash: ObjectId,
        to_hash: ObjectId,
    ) -> Self {
        Self {
            ref_id: ref_id.into(),
            change_type,
            from_hash,
            to_hash,
        }
    }

    /// Full ref name, e.g. `refs/heads/master`
    #[must_use]
    pub fn ref_id(&self) -> &str {
        &self.ref_id
    }

    /// Kind of update
    #[must_use]
    pub const fn change_type(&self) -> RefChangeType {
        self.change_type
    }

    /// Object the ref pointed to before the push
    #[must_use]
    pub const fn from_hash(&self) -> &ObjectId {
        &self.from_hash
    }

    /// Object the ref points to after the push
    #[must_use]
    pub const fn to_hash(&self) -> &ObjectId {
        &self.to_hash
    }

    /// Whether this ref is a branch
    #[must_use]
    pub fn is_branch(&self) -> bool {
        self.ref_id.starts_with(BRANCH_PREFIX)
    }

    /// Whether this ref is a tag
    #[must_use]
    pub fn is_tag(&self) -> bool {
        self.ref_id.starts_with(TAG_PREFIX)
    }

    /// Branch name without `refs/heads/`, or `None` for non-branch refs
    #[must_use]
    pub fn branch_name(&self) -> Option<&str> {
        self.ref_id.strip_prefix(BRANCH_PREFIX)
    }
}
