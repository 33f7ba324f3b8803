//! Commit message rule (`commitMessageRegex`)

use super::{Rule, RuleContext, pattern};
use crate::config::{PolicyConfig, non_blank};
use crate::core::models::{PolicyViolation, ViolationKind};

/// Whole commit message must match `commitMessageRegex`
///
/// `.` matches newlines so a pattern like `[A-Z]+-[0-9]+ .*` covers the
/// subject and any body. The trailing newline git stores is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitMessageRule;

impl Rule for CommitMessageRule {
    fn name(&self) -> &'static str {
        "commit-message"
    }

    fn uses_commits(&self, config: &PolicyConfig) -> bool {
        non_blank(config.commit_message_regex.as_deref()).is_some()
    }

    fn check(&self, context: &RuleContext<'_>) -> Vec<PolicyViolation> {
        let raw = context.config().commit_message_regex.as_deref();
        let regex = match pattern::compile("commitMessageRegex", raw, true) {
            Ok(Some(regex)) => regex,
            Ok(None) => return Vec::new(),
            Err(violation) => return vec![violation],
        };

        context
            .commits()
            .iter()
            .filter(|c| !regex.is_match(c.trimmed_message()))
            .map(|c| {
                PolicyViolation::new(
                    ViolationKind::CommitMessage,
                    format!(
                        "{}: commit message doesn't match regex: {}",
                        c.id,
                        raw.unwrap_or_default()
                    ),
                )
            })
            .collect()
    }
}
