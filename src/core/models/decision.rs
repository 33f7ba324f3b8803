//! Push decision model

use std::io::Write;

use serde::Serialize;

use super::PolicyViolation;

/// Outcome of evaluating a whole push
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushDecision {
    /// Whether the push may proceed
    pub accepted: bool,
    /// Rendered rejection message (present only when rejected)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Every collected violation, ref-tagged, in push order
    pub violations: Vec<PolicyViolation>,
}

impl PushDecision {
    /// Accept the push
    #[must_use]
    pub const fn accept() -> Self {
        Self {
            accepted: true,
            message: None,
            violations: Vec::new(),
        }
    }

    /// Reject the push with a rendered message
    #[must_use]
    pub const fn reject(message: String, violations: Vec<PolicyViolation>) -> Self {
        Self {
            accepted: false,
            message: Some(message),
            violations,
        }
    }

    /// Write the rejection message to `sink`; accepted pushes write nothing
    pub fn write_rejection<W: Write>(&self, sink: &mut W) -> std::io::Result<()> {
        if let Some(message) = &self.message {
            sink.write_all(message.as_bytes())?;
            sink.flush()?;
        }
        Ok(())
    }
}
