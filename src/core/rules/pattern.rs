//! Pattern options
//!
//! All pattern options are full matches: `feature/.*` accepts
//! `feature/login` but not `my-feature/login`.

use regex::{Regex, RegexBuilder};

use crate::config::non_blank;
use crate::core::models::PolicyViolation;

/// Compile a full-match pattern for `option`
///
/// An unset or blank pattern yields `Ok(None)`. A pattern that does not
/// compile yields the configuration violation to report.
pub fn compile(
    option: &str,
    pattern: Option<&str>,
    dot_matches_new_line: bool,
) -> Result<Option<Regex>, PolicyViolation> {
    let Some(pattern) = non_blank(pattern) else {
        return Ok(None);
    };

    // validate unwrapped first so `a)|(b` can't close the anchoring group
    RegexBuilder::new(pattern)
        .build()
        .and_then(|_| {
            RegexBuilder::new(&format!("^(?:{pattern})$"))
                .dot_matches_new_line(dot_matches_new_line)
                .build()
        })
        .map(Some)
        .map_err(|e| {
            log::debug!("invalid {option} pattern '{pattern}': {e}");
            PolicyViolation::configuration(format!("Invalid {option} regex '{pattern}': {e}"))
        })
}
