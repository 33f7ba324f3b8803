//! Evaluate a push from pre-receive hook input

use std::io;
use std::path::Path;

use pushgate::adapters::git::GitRepository;
use pushgate::adapters::hook_input;
use pushgate::core::models::Identity;
use pushgate::core::services::evaluate_push;
use pushgate::output::{self, OutputMode};

use super::load_config;

/// Check the ref updates on stdin (pre-receive hook)
///
/// Exits with status 1 when the push is rejected.
pub fn pre_receive(
    config_path: Option<&Path>,
    pusher_name: Option<String>,
    pusher_email: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let changes = hook_input::read_from(io::stdin().lock())?;
    log::debug!("received {} ref change(s)", changes.len());

    let pusher = match (pusher_name, pusher_email) {
        (None, None) => None,
        (name, email) => Some(Identity::new(name.unwrap_or_default(), email.unwrap_or_default())),
    };
    let repository = GitRepository::open_from_env()?.with_pusher(pusher);
    let config = load_config(config_path, repository.git_dir())?;

    let decision = evaluate_push(&changes, &config, &repository)?;

    output::render_decision(&decision, mode);
    decision.write_rejection(&mut io::stderr().lock())?;

    if !decision.accepted {
        std::process::exit(1);
    }

    Ok(())
}
