//! `pre-receive` hook input
//!
//! git feeds the hook one line per ref update:
//!
//! ```text
//! <old-value> SP <new-value> SP <ref-name> LF
//! ```

use std::io::BufRead;

use thiserror::Error;

use crate::core::models::{ObjectId, RefChange, RefChangeType};

/// Errors reading hook input
#[derive(Debug, Error)]
pub enum HookInputError {
    /// Line doesn't have three fields
    #[error("line {line}: expected '<old> <new> <ref>', got '{text}'")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// Offending line
        text: String,
    },

    /// Field isn't a hex object id
    #[error("line {line}: invalid object id '{value}'")]
    InvalidObjectId {
        /// 1-based line number
        line: usize,
        /// Offending value
        value: String,
    },

    /// Reading stdin failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one hook line
pub fn parse_line(line: usize, text: &str) -> Result<RefChange, HookInputError> {
    let mut fields = text.split_whitespace();
    let (Some(old), Some(new), Some(ref_id), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(HookInputError::Malformed {
            line,
            text: text.to_string(),
        });
    };

    let from = parse_object_id(line, old)?;
    let to = parse_object_id(line, new)?;
    let change_type = RefChangeType::infer(&from, &to);
    Ok(RefChange::new(ref_id, change_type, from, to))
}

/// Parse all hook lines, skipping blank ones
pub fn parse(input: &str) -> Result<Vec<RefChange>, HookInputError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| parse_line(i + 1, text))
        .collect()
}

/// Read and parse hook input from `reader`
pub fn read_from<R: BufRead>(reader: R) -> Result<Vec<RefChange>, HookInputError> {
    let mut changes = Vec::new();
    for (i, text) in reader.lines().enumerate() {
        let text = text?;
        if text.trim().is_empty() {
            continue;
        }
        changes.push(parse_line(i + 1, &text)?);
    }
    Ok(changes)
}

/// SHA-1 and SHA-256 object ids
fn parse_object_id(line: usize, value: &str) -> Result<ObjectId, HookInputError> {
    let valid_len = matches!(value.len(), 40 | 64);
    if valid_len && value.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(ObjectId::new(value.to_lowercase()))
    } else {
        Err(HookInputError::InvalidObjectId {
            line,
            value: value.to_string(),
        })
    }
}
