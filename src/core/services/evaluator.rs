//! Rule evaluator - runs every rule against one ref change
//!
//! Violations come back in rule order, and within a rule in commit order.
//! Configuration problems become violations; only repository failures are
//! returned as errors.
//!
//! New commits are read from the repository at most once per ref change,
//! and only when some rule reads commits under the current config.

use crate::config::{PolicyConfig, non_blank};
use crate::core::models::{PolicyViolation, RefChange, ViolationKind};
use crate::core::ports::Repository;
use crate::core::rules::{self, Rule, RuleContext, commits::CommitFilter, pattern};

/// Produces the violations for a single ref change
pub trait RefChangeEvaluator: Send + Sync {
    /// Violations caused by `change`, in a deterministic order
    fn evaluate(
        &self,
        repository: &dyn Repository,
        config: &PolicyConfig,
        change: &RefChange,
    ) -> anyhow::Result<Vec<PolicyViolation>>;
}

/// Evaluator backed by an ordered list of rules
pub struct RuleEvaluator {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEvaluator {
    /// Evaluator running `rules` in the given order
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Names of the rules, in evaluation order
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new(rules::default_rules())
    }
}

impl std::fmt::Debug for RuleEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEvaluator").field("rules", &self.rule_names()).finish()
    }
}

impl RefChangeEvaluator for RuleEvaluator {
    fn evaluate(
        &self,
        repository: &dyn Repository,
        config: &PolicyConfig,
        change: &RefChange,
    ) -> anyhow::Result<Vec<PolicyViolation>> {
        let mut violations = Vec::new();

        match pattern::compile("excludeBranchRegex", config.exclude_branch_regex.as_deref(), false)
        {
            Ok(Some(regex)) => {
                if change.branch_name().is_some_and(|b| regex.is_match(b)) {
                    log::debug!("{}: branch excluded", change.ref_id());
                    return Ok(Vec::new());
                }
            },
            Ok(None) => {},
            Err(violation) => violations.push(violation),
        }

        let (filter, issue) = CommitFilter::from_config(config);
        violations.extend(issue);

        let commits = if self.rules.iter().any(|r| r.uses_commits(config)) {
            filter.apply(repository.new_commits(change)?)
        } else {
            Vec::new()
        };
        let context = RuleContext::new(config, change, repository.pusher(), &commits);

        for rule in &self.rules {
            let found = rule.check(&context);
            log::debug!("{}: rule {} found {} violation(s)", change.ref_id(), rule.name(), found.len());

            violations.extend(found.into_iter().map(|v| match custom_message(config, v.kind()) {
                Some(detail) => v.with_detail(detail),
                None => v,
            }));
        }

        Ok(violations)
    }
}

/// Configured extra text for a violation kind
fn custom_message(config: &PolicyConfig, kind: ViolationKind) -> Option<&str> {
    let message = match kind {
        ViolationKind::AuthorEmail => &config.error_message_author_email,
        ViolationKind::AuthorName => &config.error_message_author_name,
        ViolationKind::AuthorEmailRegex => &config.error_message_author_email_regex,
        ViolationKind::CommitMessage => &config.error_message_commit_message,
        ViolationKind::BranchName => &config.error_message_branch_name,
        ViolationKind::Configuration => return None,
    };
    non_blank(message.as_deref())
}
