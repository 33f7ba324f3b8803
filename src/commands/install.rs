//! Install the pre-receive hook

use std::path::Path;

use pushgate::adapters::git::{self, GitRepository};
use pushgate::config::PolicyConfig;
use pushgate::output::{OperationResult, OutputMode};

/// Install the pre-receive hook into `git_dir` (or the discovered repository)
pub fn install(git_dir: Option<&Path>, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let git_dir = match git_dir {
        Some(dir) => dir.to_path_buf(),
        None => GitRepository::open_from_env()?.git_dir().to_path_buf(),
    };

    let hook_path = git::install_pre_receive(&git_dir, force)?;

    let mut message = format!("Installed {}", hook_path.display());
    if !git_dir.join(PolicyConfig::FILE_NAME).exists() {
        message.push_str(&format!(
            "\nNo {} in {} yet; every push is accepted until one is added.",
            PolicyConfig::FILE_NAME,
            git_dir.display()
        ));
    }

    OperationResult {
        success: true,
        message,
    }
    .render(mode);

    Ok(())
}
