//! Output formatting for human and JSON modes
//!
//! The rejection block always goes to stderr, where git relays it to the
//! pusher. These types cover what the commands print to stdout.

use serde::Serialize;

use crate::config::ConfigIssue;
use crate::core::models::PushDecision;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a `check-config` run
#[derive(Debug, Serialize)]
pub struct ConfigCheckResult {
    /// Whether every option is usable
    pub valid: bool,
    /// Problems found
    pub issues: Vec<ConfigIssue>,
}

impl ConfigCheckResult {
    /// Build from validation issues
    #[must_use]
    pub fn new(issues: Vec<ConfigIssue>) -> Self {
        Self {
            valid: issues.is_empty(),
            issues,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("Policy configuration OK.");
            return;
        }

        println!("Invalid options:\n");
        for issue in &self.issues {
            println!("  {}", issue.option);
            println!("          {}\n", issue.message);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Print a push decision on stdout in JSON mode
///
/// Human mode prints nothing here; the rejection block is written to
/// stderr by the caller.
pub fn render_decision(decision: &PushDecision, mode: OutputMode) {
    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(decision).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
