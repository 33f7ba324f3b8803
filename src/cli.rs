//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use pushgate::output::OutputMode;

/// pushgate - Commit policy enforcement for git pushes
#[derive(Parser, Debug)]
#[command(
    name = "pushgate",
    version,
    about = "Commit policy enforcement for git pushes",
    long_about = "Reject pushes whose commits break the repository's commit policy.\n\n\
                  Runs as a pre-receive hook: ref updates arrive on stdin, the\n\
                  rejection message goes to stderr and is shown to the pusher."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the pushed ref updates read from stdin (used by the pre-receive hook)
    PreReceive {
        /// Policy file (default: pushgate.toml in the git directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name of the user pushing
        #[arg(long, env = "PUSHGATE_PUSHER_NAME")]
        pusher_name: Option<String>,

        /// Email of the user pushing
        #[arg(long, env = "PUSHGATE_PUSHER_EMAIL")]
        pusher_email: Option<String>,
    },

    /// Validate a policy file
    CheckConfig {
        /// Policy file (default: pushgate.toml in the git directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Install the pre-receive hook into a repository
    Install {
        /// Git directory of the repository (default: discovered from the current directory)
        #[arg(long)]
        git_dir: Option<PathBuf>,

        /// Replace an existing pre-receive hook
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stderr is relayed to the pusher, so keep it quiet unless asked
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::PreReceive {
            config,
            pusher_name,
            pusher_email,
        }) => commands::pre_receive(config.as_deref(), pusher_name, pusher_email, output_mode),
        Some(Command::CheckConfig { config }) => commands::check_config(config.as_deref(), output_mode),
        Some(Command::Install { git_dir, force }) => {
            commands::install(git_dir.as_deref(), force, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("pushgate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("pushgate v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'pushgate --help' for usage");
                println!("Run 'pushgate install' to set up the pre-receive hook");
            }
            Ok(())
        },
    }
}
