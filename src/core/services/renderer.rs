//! Rejection message rendering
//!
//! Layout, byte for byte:
//!
//! ```text
//! <header>\n
//! \n
//! <ref>: <violation>\n
//! \n
//! ... one pair of lines per violation ...
//! <footer>\n            (only when a non-blank footer is configured)
//! \n
//! ```
//!
//! A blank header (empty after trimming) falls back to [`DEFAULT_HEADER`].
//! Nothing is truncated, reordered or deduplicated.

use crate::config::{PolicyConfig, non_blank};
use crate::core::models::PolicyViolation;

/// Banner printed when no custom header is configured
pub const DEFAULT_HEADER: &str = concat!(
    "+----------------------------------------------------------+\n",
    "|                PUSH REJECTED BY PUSHGATE                 |\n",
    "+----------------------------------------------------------+\n",
    "\n",
    "The changes below do not follow this repository's commit policy.\n",
    "Fix them (git commit --amend, git rebase -i) and push again."
);

/// Render the rejection block
#[must_use]
pub fn render(header: Option<&str>, violations: &[PolicyViolation], footer: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(non_blank(header).unwrap_or(DEFAULT_HEADER));
    out.push_str("\n\n");

    for violation in violations {
        out.push_str(&violation.to_string());
        out.push_str("\n\n");
    }

    if let Some(footer) = non_blank(footer) {
        out.push_str(footer);
        out.push_str("\n\n");
    }

    out
}

/// Collects violations across ref changes, in the order refs are evaluated
#[derive(Debug, Clone, Default)]
pub struct ViolationAggregator {
    violations: Vec<PolicyViolation>,
}

impl ViolationAggregator {
    /// Empty aggregator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Attach `violations` to `ref_id` and append them
    pub fn add(&mut self, ref_id: &str, violations: Vec<PolicyViolation>) {
        self.violations.extend(violations.into_iter().map(|v| v.with_ref(ref_id)));
    }

    /// Whether nothing was collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of collected violations
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Collected violations, ref-tagged
    #[must_use]
    pub fn violations(&self) -> &[PolicyViolation] {
        &self.violations
    }

    /// Render with the header and footer from `config`
    #[must_use]
    pub fn render(&self, config: &PolicyConfig) -> String {
        render(
            config.error_message_header.as_deref(),
            &self.violations,
            config.error_message_footer.as_deref(),
        )
    }

    /// Take the collected violations
    #[must_use]
    pub fn into_violations(self) -> Vec<PolicyViolation> {
        self.violations
    }
}
