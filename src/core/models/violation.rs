//! Policy violation model
//!
//! A violation is one human-readable rule failure. Violations are values,
//! never errors: they accumulate and end up in the rejection message.

use serde::{Deserialize, Serialize};

/// Which rule (or configuration problem) produced a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Author email differs from the pusher's
    AuthorEmail,
    /// Author name differs from the pusher's
    AuthorName,
    /// Author email doesn't match the configured pattern
    AuthorEmailRegex,
    /// Commit message doesn't match the configured pattern
    CommitMessage,
    /// New branch name doesn't match the configured pattern
    BranchName,
    /// An option could not be used (e.g. invalid regex)
    Configuration,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthorEmail => write!(f, "author_email"),
            Self::AuthorName => write!(f, "author_name"),
            Self::AuthorEmailRegex => write!(f, "author_email_regex"),
            Self::CommitMessage => write!(f, "commit_message"),
            Self::BranchName => write!(f, "branch_name"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

/// A single rule failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyViolation {
    kind: ViolationKind,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ref_id: Option<String>,
}

impl PolicyViolation {
    /// Create an untagged violation
    #[must_use]
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            ref_id: None,
        }
    }

    /// Create a configuration violation
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Configuration, message)
    }

    /// Copy of this violation attached to a ref
    #[must_use]
    pub fn with_ref(mut self, ref_id: impl Into<String>) -> Self {
        self.ref_id = Some(ref_id.into());
        self
    }

    /// Copy of this violation with extra text appended to the message
    #[must_use]
    pub fn with_detail(mut self, detail: &str) -> Self {
        self.message = format!("{}\n\n    {detail}", self.message);
        self
    }

    /// Kind of violation
    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Ref this violation belongs to, once attached
    #[must_use]
    pub fn ref_id(&self) -> Option<&str> {
        self.ref_id.as_deref()
    }
}

impl std::fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.ref_id {
            Some(ref_id) => write!(f, "{ref_id}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
