//! Author identity rules
//!
//! - [`AuthorEmailRule`] - author email equals the pusher's email
//! - [`AuthorNameRule`] - author name equals the pusher's name
//! - [`AuthorEmailRegexRule`] - author email matches `authorEmailRegex`
//!
//! The matching rules compare case-insensitively. When the host cannot tell
//! who is pushing they report nothing.

use super::{Rule, RuleContext, pattern};
use crate::config::{PolicyConfig, non_blank};
use crate::core::models::{PolicyViolation, ViolationKind};

/// Author email must equal the pusher's (`requireMatchingAuthorEmail`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorEmailRule;

impl Rule for AuthorEmailRule {
    fn name(&self) -> &'static str {
        "author-email"
    }

    fn uses_commits(&self, config: &PolicyConfig) -> bool {
        config.require_matching_author_email
    }

    fn check(&self, context: &RuleContext<'_>) -> Vec<PolicyViolation> {
        if !context.config().require_matching_author_email {
            return Vec::new();
        }
        let Some(pusher) = context.pusher().filter(|p| !p.email.trim().is_empty()) else {
            log::debug!("pusher email unknown, skipping author email check");
            return Vec::new();
        };

        let expected = pusher.email.trim();
        context
            .commits()
            .iter()
            .filter(|c| !c.author.email.trim().eq_ignore_ascii_case(expected))
            .map(|c| {
                PolicyViolation::new(
                    ViolationKind::AuthorEmail,
                    format!(
                        "{}: expected author email '{expected}' but found '{}'",
                        c.id, c.author.email
                    ),
                )
            })
            .collect()
    }
}

/// Author name must equal the pusher's (`requireMatchingAuthorName`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorNameRule;

impl Rule for AuthorNameRule {
    fn name(&self) -> &'static str {
        "author-name"
    }

    fn uses_commits(&self, config: &PolicyConfig) -> bool {
        config.require_matching_author_name
    }

    fn check(&self, context: &RuleContext<'_>) -> Vec<PolicyViolation> {
        if !context.config().require_matching_author_name {
            return Vec::new();
        }
        let Some(pusher) = context.pusher().filter(|p| !p.name.trim().is_empty()) else {
            log::debug!("pusher name unknown, skipping author name check");
            return Vec::new();
        };

        let expected = pusher.name.trim().to_lowercase();
        context
            .commits()
            .iter()
            .filter(|c| c.author.name.trim().to_lowercase() != expected)
            .map(|c| {
                PolicyViolation::new(
                    ViolationKind::AuthorName,
                    format!(
                        "{}: expected author name '{}' but found '{}'",
                        c.id,
                        pusher.name.trim(),
                        c.author.name
                    ),
                )
            })
            .collect()
    }
}

/// Author email must match `authorEmailRegex`
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorEmailRegexRule;

impl Rule for AuthorEmailRegexRule {
    fn name(&self) -> &'static str {
        "author-email-regex"
    }

    fn uses_commits(&self, config: &PolicyConfig) -> bool {
        non_blank(config.author_email_regex.as_deref()).is_some()
    }

    fn check(&self, context: &RuleContext<'_>) -> Vec<PolicyViolation> {
        let raw = context.config().author_email_regex.as_deref();
        let regex = match pattern::compile("authorEmailRegex", raw, false) {
            Ok(Some(regex)) => regex,
            Ok(None) => return Vec::new(),
            Err(violation) => return vec![violation],
        };

        context
            .commits()
            .iter()
            .filter(|c| !regex.is_match(&c.author.email))
            .map(|c| {
                PolicyViolation::new(
                    ViolationKind::AuthorEmailRegex,
                    format!(
                        "{}: author email '{}' does not match regex '{}'",
                        c.id,
                        c.author.email,
                        raw.unwrap_or_default()
                    ),
                )
            })
            .collect()
    }
}
