//! Policy rules
//!
//! Each rule is an independent check over one ref change. Rules know
//! nothing about each other; the evaluator runs them in a fixed order.
//!
//! A rule with no configured option reports nothing.
//!
//! - [`BranchNameRule`] - `branchNameRegex`
//! - [`AuthorEmailRule`] - `requireMatchingAuthorEmail`
//! - [`AuthorNameRule`] - `requireMatchingAuthorName`
//! - [`AuthorEmailRegexRule`] - `authorEmailRegex`
//! - [`CommitMessageRule`] - `commitMessageRegex`

mod author;
mod branch_name;
mod commit_message;
pub mod commits;
pub mod pattern;

pub use author::{AuthorEmailRegexRule, AuthorEmailRule, AuthorNameRule};
pub use branch_name::BranchNameRule;
pub use commit_message::CommitMessageRule;

use crate::config::PolicyConfig;
use crate::core::models::{Commit, Identity, PolicyViolation, RefChange};

/// Everything a rule may look at for one ref change
///
/// Commits are fetched and filtered once per ref change, then shared by
/// every rule.
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    config: &'a PolicyConfig,
    change: &'a RefChange,
    pusher: Option<Identity>,
    commits: &'a [Commit],
}

impl<'a> RuleContext<'a> {
    /// Context for `change`; `commits` are the new commits that survived
    /// the commit filter, oldest first
    #[must_use]
    pub const fn new(
        config: &'a PolicyConfig,
        change: &'a RefChange,
        pusher: Option<Identity>,
        commits: &'a [Commit],
    ) -> Self {
        Self {
            config,
            change,
            pusher,
            commits,
        }
    }

    /// Policy options
    #[must_use]
    pub const fn config(&self) -> &'a PolicyConfig {
        self.config
    }

    /// The ref change under evaluation
    #[must_use]
    pub const fn change(&self) -> &'a RefChange {
        self.change
    }

    /// Identity of the user pushing, if known
    #[must_use]
    pub const fn pusher(&self) -> Option<&Identity> {
        self.pusher.as_ref()
    }

    /// Commits to check, oldest first
    #[must_use]
    pub const fn commits(&self) -> &'a [Commit] {
        self.commits
    }
}

/// A single policy check
pub trait Rule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether this rule reads commits under `config`
    ///
    /// When no rule does, the repository is never asked for commits.
    fn uses_commits(&self, _config: &PolicyConfig) -> bool {
        false
    }

    /// Violations in `context`; configuration problems included
    fn check(&self, context: &RuleContext<'_>) -> Vec<PolicyViolation>;
}

/// The built-in rules, in evaluation order
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(BranchNameRule),
        Box::new(AuthorEmailRule),
        Box::new(AuthorNameRule),
        Box::new(AuthorEmailRegexRule),
        Box::new(CommitMessageRule),
    ]
}
