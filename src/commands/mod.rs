//! Command implementations

use std::path::Path;

use pushgate::config::PolicyConfig;

mod check_config;
mod install;
mod pre_receive;

pub use check_config::check_config;
pub use install::install;
pub use pre_receive::pre_receive;

/// Load the policy from `path`, or from `pushgate.toml` in `git_dir`
fn load_config(path: Option<&Path>, git_dir: &Path) -> anyhow::Result<PolicyConfig> {
    let config = match path {
        Some(path) => PolicyConfig::load(path)?,
        None => PolicyConfig::load_or_default(git_dir)?,
    };
    for issue in config.validate() {
        log::warn!("{}: {}", issue.option, issue.message);
    }
    Ok(config)
}
