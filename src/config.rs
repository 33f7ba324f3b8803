//! Policy configuration
//!
//! `PolicyConfig` is the immutable record every rule reads from. It is built
//! once per push, either from the host's key/value settings accessor or from
//! a `pushgate.toml` file, and never mutated afterwards.
//!
//! Option names are camelCase on both paths:
//!
//! ```toml
//! errorMessageHeader = "Push rejected"
//! commitMessageRegex = "[A-Z]+-[0-9]+ .*"
//! requireMatchingAuthorEmail = true
//! excludeUsers = "ci-bot, release-bot"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a policy file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for a policy
    #[error("invalid policy file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Problem with a single option, reported by [`PolicyConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    /// Option name, e.g. `commitMessageRegex`
    pub option: String,
    /// What is wrong with it
    pub message: String,
}

/// Every recognized policy option, with defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyConfig {
    /// Replaces the built-in banner when non-blank
    pub error_message_header: Option<String>,
    /// Appended after the errors when non-blank
    pub error_message_footer: Option<String>,

    /// Author email must equal the pusher's email
    pub require_matching_author_email: bool,
    /// Author name must equal the pusher's name
    pub require_matching_author_name: bool,
    /// Author email must fully match this pattern
    pub author_email_regex: Option<String>,
    /// Commit message must fully match this pattern
    pub commit_message_regex: Option<String>,
    /// Names of newly created branches must fully match this pattern
    pub branch_name_regex: Option<String>,

    /// Skip merge commits
    pub exclude_merge_commits: bool,
    /// Skip commits whose message fully matches this pattern
    pub exclude_by_regex: Option<String>,
    /// Skip branches whose name fully matches this pattern
    pub exclude_branch_regex: Option<String>,
    /// Comma-separated author names or emails whose commits are skipped
    pub exclude_users: Option<String>,

    /// Extra text for author email violations
    pub error_message_author_email: Option<String>,
    /// Extra text for author name violations
    pub error_message_author_name: Option<String>,
    /// Extra text for author email pattern violations
    pub error_message_author_email_regex: Option<String>,
    /// Extra text for commit message violations
    pub error_message_commit_message: Option<String>,
    /// Extra text for branch name violations
    pub error_message_branch_name: Option<String>,
}

impl PolicyConfig {
    /// Name of the policy file looked up in a repository's git directory
    pub const FILE_NAME: &'static str = "pushgate.toml";

    /// Build a config from a key/value settings accessor
    ///
    /// Missing keys take their defaults. Boolean options accept
    /// `true/false`, `yes/no` and `1/0`; anything else is false.
    #[must_use]
    pub fn from_settings<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).is_some_and(|v| parse_flag(&v));

        Self {
            error_message_header: lookup("errorMessageHeader"),
            error_message_footer: lookup("errorMessageFooter"),
            require_matching_author_email: flag("requireMatchingAuthorEmail"),
            require_matching_author_name: flag("requireMatchingAuthorName"),
            author_email_regex: lookup("authorEmailRegex"),
            commit_message_regex: lookup("commitMessageRegex"),
            branch_name_regex: lookup("branchNameRegex"),
            exclude_merge_commits: flag("excludeMergeCommits"),
            exclude_by_regex: lookup("excludeByRegex"),
            exclude_branch_regex: lookup("excludeBranchRegex"),
            exclude_users: lookup("excludeUsers"),
            error_message_author_email: lookup("errorMessageAuthorEmail"),
            error_message_author_name: lookup("errorMessageAuthorName"),
            error_message_author_email_regex: lookup("errorMessageAuthorEmailRegex"),
            error_message_commit_message: lookup("errorMessageCommitMessage"),
            error_message_branch_name: lookup("errorMessageBranchName"),
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `pushgate.toml` from `dir` if present, else the default config
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(Self::FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("no {} in {}, using defaults", Self::FILE_NAME, dir.display());
            Ok(Self::default())
        }
    }

    /// Header option, if set to something non-blank
    #[must_use]
    pub fn header(&self) -> Option<&str> {
        non_blank(self.error_message_header.as_deref())
    }

    /// Footer option, if set to something non-blank
    #[must_use]
    pub fn footer(&self) -> Option<&str> {
        non_blank(self.error_message_footer.as_deref())
    }

    /// Users listed in `excludeUsers`, trimmed and lowercased
    #[must_use]
    pub fn excluded_users(&self) -> Vec<String> {
        self.exclude_users
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|u| u.trim().to_lowercase())
            .filter(|u| !u.is_empty())
            .collect()
    }

    /// Every pattern option, paired with its option name
    #[must_use]
    pub fn patterns(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("authorEmailRegex", self.author_email_regex.as_deref()),
            ("commitMessageRegex", self.commit_message_regex.as_deref()),
            ("branchNameRegex", self.branch_name_regex.as_deref()),
            ("excludeByRegex", self.exclude_by_regex.as_deref()),
            ("excludeBranchRegex", self.exclude_branch_regex.as_deref()),
        ]
    }

    /// Check every pattern option compiles
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.patterns()
            .into_iter()
            .filter_map(|(option, pattern)| {
                let pattern = non_blank(pattern)?;
                Regex::new(pattern).err().map(|e| ConfigIssue {
                    option: option.to_string(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

/// `Some(value)` unless the value is absent or empty after trimming
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "yes" | "1")
}
