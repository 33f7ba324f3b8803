//! Branch naming rule (`branchNameRegex`)
//!
//! Only newly created branches are checked. Existing branches that predate
//! the rule can still be pushed to.

use super::{Rule, RuleContext, pattern};
use crate::core::models::{PolicyViolation, RefChangeType, ViolationKind};

/// New branch names must match `branchNameRegex`
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchNameRule;

impl Rule for BranchNameRule {
    fn name(&self) -> &'static str {
        "branch-name"
    }

    fn check(&self, context: &RuleContext<'_>) -> Vec<PolicyViolation> {
        let change = context.change();
        let Some(branch) = change.branch_name() else {
            return Vec::new();
        };
        if change.change_type() != RefChangeType::Add {
            return Vec::new();
        }

        let raw = context.config().branch_name_regex.as_deref();
        let regex = match pattern::compile("branchNameRegex", raw, false) {
            Ok(Some(regex)) => regex,
            Ok(None) => return Vec::new(),
            Err(violation) => return vec![violation],
        };

        if regex.is_match(branch) {
            return Vec::new();
        }

        vec![PolicyViolation::new(
            ViolationKind::BranchName,
            format!(
                "Invalid branch name. '{branch}' does not match regex '{}'",
                raw.unwrap_or_default()
            ),
        )]
    }
}
