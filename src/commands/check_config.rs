//! Validate a policy file

use std::path::Path;

use pushgate::adapters::git::GitRepository;
use pushgate::config::PolicyConfig;
use pushgate::output::{ConfigCheckResult, OutputMode};

/// Report every unusable option; exits with status 1 if there are any
pub fn check_config(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => PolicyConfig::load(path)?,
        None => PolicyConfig::load_or_default(GitRepository::open_from_env()?.git_dir())?,
    };

    let result = ConfigCheckResult::new(config.validate());
    result.render(mode);

    if !result.valid {
        std::process::exit(1);
    }

    Ok(())
}
