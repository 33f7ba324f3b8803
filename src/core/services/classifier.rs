//! Ref change classifier - decides which ref changes get policy-checked
//!
//! Pure function of the ref change. Rules, first match wins:
//! 1. Deletions are never checked
//! 2. Changes to the all-zero object are never checked
//! 3. Refs in an excluded namespace (git notes) are never checked

use crate::core::models::{RefChange, RefChangeType};

/// Ref namespaces that are never policy-checked
pub const EXCLUDED_NAMESPACES: &[&str] = &["refs/notes/"];

/// Why a ref change was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The ref is being deleted
    Delete,
    /// The ref moves to the all-zero object
    NonexistentTarget,
    /// The ref lives in an excluded namespace
    ExcludedNamespace,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delete => write!(f, "deletion"),
            Self::NonexistentTarget => write!(f, "target does not exist"),
            Self::ExcludedNamespace => write!(f, "excluded namespace"),
        }
    }
}

/// Classifier verdict for one ref change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Run the rules
    Check,
    /// Don't run the rules
    Skip(SkipReason),
}

/// Classify a ref change
#[must_use]
pub fn classify(change: &RefChange) -> Classification {
    if change.change_type() == RefChangeType::Delete {
        return Classification::Skip(SkipReason::Delete);
    }

    if change.to_hash().is_zero() {
        return Classification::Skip(SkipReason::NonexistentTarget);
    }

    if EXCLUDED_NAMESPACES.iter().any(|ns| change.ref_id().starts_with(ns)) {
        return Classification::Skip(SkipReason::ExcludedNamespace);
    }

    Classification::Check
}

/// Whether a ref change must be policy-checked
#[must_use]
pub fn should_check(change: &RefChange) -> bool {
    classify(change) == Classification::Check
}
