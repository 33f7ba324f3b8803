//! pushgate - A server-side git push hook that enforces commit policy
//!
//! Reads git's pre-receive input, evaluates every pushed ref against the
//! repository's policy and rejects the push with one aggregated message.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the pushgate CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("pushgate: {err:#}");
        std::process::exit(2);
    }
}
