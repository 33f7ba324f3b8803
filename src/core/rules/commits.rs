//! Commit selection shared by the per-commit rules
//!
//! Merge commits, commits by excluded users and commits whose message
//! matches `excludeByRegex` are dropped before any commit rule sees them.

use regex::Regex;

use super::pattern;
use crate::config::PolicyConfig;
use crate::core::models::{Commit, PolicyViolation};

/// Decides which commits the commit rules look at
#[derive(Debug, Clone)]
pub struct CommitFilter {
    exclude_merges: bool,
    exclude_message: Option<Regex>,
    excluded_users: Vec<String>,
}

impl CommitFilter {
    /// Build the filter from config
    ///
    /// A malformed `excludeByRegex` disables that part of the filter and is
    /// returned as the violation to report.
    #[must_use]
    pub fn from_config(config: &PolicyConfig) -> (Self, Option<PolicyViolation>) {
        let (exclude_message, issue) =
            match pattern::compile("excludeByRegex", config.exclude_by_regex.as_deref(), true) {
                Ok(re) => (re, None),
                Err(violation) => (None, Some(violation)),
            };

        let filter = Self {
            exclude_merges: config.exclude_merge_commits,
            exclude_message,
            excluded_users: config.excluded_users(),
        };
        (filter, issue)
    }

    /// Whether `commit` should be checked
    #[must_use]
    pub fn keep(&self, commit: &Commit) -> bool {
        if self.exclude_merges && commit.is_merge() {
            log::debug!("{}: merge commit excluded", commit.id);
            return false;
        }

        if self
            .exclude_message
            .as_ref()
            .is_some_and(|re| re.is_match(commit.trimmed_message()))
        {
            log::debug!("{}: excluded by message", commit.id);
            return false;
        }

        let name = commit.author.name.to_lowercase();
        let email = commit.author.email.to_lowercase();
        if self.excluded_users.iter().any(|u| *u == name || *u == email) {
            log::debug!("{}: author excluded", commit.id);
            return false;
        }

        true
    }

    /// The commits worth checking, order kept
    #[must_use]
    pub fn apply(&self, commits: Vec<Commit>) -> Vec<Commit> {
        commits.into_iter().filter(|c| self.keep(c)).collect()
    }
}
