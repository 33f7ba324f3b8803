//! Git hooks installation
//!
//! Installs a `pre-receive` hook that pipes git's ref updates into
//! `pushgate pre-receive`.
//!
//! A pre-receive hook that is already in place is renamed to
//! `pre-receive.pushgate-orig` and still runs first, with its own
//! interpreter, arguments and exit status.

use std::fs;
use std::path::{Path, PathBuf};

/// File name the previous hook is moved to
pub const ORIGINAL_HOOK: &str = "pre-receive.pushgate-orig";

const HOOK_CONTENT: &str = r#"#!/bin/sh
# pushgate pre-receive hook
# Rejects pushes whose commits break the repository's commit policy

exec pushgate pre-receive "$@"
"#;

const CHAINED_HOOK_CONTENT: &str = r#"#!/bin/sh
# pushgate pre-receive hook
# Runs the previous pre-receive hook, then pushgate, on the same input

input=$(cat)

printf '%s\n' "$input" | "$(dirname "$0")/pre-receive.pushgate-orig" "$@" || exit $?

printf '%s\n' "$input" | pushgate pre-receive "$@"
"#;

/// Install the pre-receive hook into `git_dir/hooks`
///
/// An existing hook that already mentions pushgate is left alone unless
/// `force` is set. Any other existing hook is moved to [`ORIGINAL_HOOK`]
/// and chained in front of pushgate.
///
/// # Errors
///
/// Returns an error if the hooks directory is missing, if a previous hook
/// would overwrite an earlier [`ORIGINAL_HOOK`], or if the hook cannot be
/// written.
pub fn install_pre_receive(git_dir: &Path, force: bool) -> anyhow::Result<PathBuf> {
    let hooks_dir = git_dir.join("hooks");
    if !hooks_dir.is_dir() {
        anyhow::bail!("Not a git directory ({} not found)", hooks_dir.display());
    }

    let hook_path = hooks_dir.join("pre-receive");

    if hook_path.exists() && !force {
        let existing = fs::read_to_string(&hook_path)?;
        if existing.contains("pushgate") {
            return Ok(hook_path);
        }

        let original = hooks_dir.join(ORIGINAL_HOOK);
        if original.exists() {
            anyhow::bail!(
                "{} already exists; move it away or use --force",
                original.display()
            );
        }
        // rename keeps the mode and shebang of the previous hook
        fs::rename(&hook_path, &original)?;
        log::debug!("moved existing hook to {}", original.display());
        fs::write(&hook_path, CHAINED_HOOK_CONTENT)?;
    } else {
        fs::write(&hook_path, HOOK_CONTENT)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    Ok(hook_path)
}
