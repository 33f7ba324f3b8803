//! pushgate - A server-side git push hook that enforces commit policy
//!
//! This library provides the policy engine: ref change classification,
//! rule evaluation, rejection message rendering and the push decision,
//! plus the adapters that connect it to a real git repository.
//!
//! ```
//! use pushgate::config::PolicyConfig;
//! use pushgate::core::models::{Commit, Identity, ObjectId, RefChange, RefChangeType};
//! use pushgate::core::ports::Repository;
//! use pushgate::core::services::evaluate_push;
//!
//! struct NoCommits;
//!
//! impl Repository for NoCommits {
//!     fn new_commits(&self, _: &RefChange) -> anyhow::Result<Vec<Commit>> {
//!         Ok(Vec::new())
//!     }
//!
//!     fn pusher(&self) -> Option<Identity> {
//!         None
//!     }
//! }
//!
//! let delete = RefChange::new(
//!     "refs/heads/old",
//!     RefChangeType::Delete,
//!     ObjectId::new("3f786850e387550fdab836ed7e6dc881de23001b"),
//!     ObjectId::zero(),
//! );
//! let decision = evaluate_push(&[delete], &PolicyConfig::default(), &NoCommits).unwrap();
//! assert!(decision.accepted);
//! ```

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
