//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - `git2`-backed repository handle, hook installation
//! - `hook_input` - Parsing of git's `pre-receive` input

pub mod git;
pub mod hook_input;
