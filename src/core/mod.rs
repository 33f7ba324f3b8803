//! Core domain logic for pushgate
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RefChange`, `Commit`, `PolicyViolation`, `PushDecision`)
//! - `rules/` - Independent policy checks
//! - `services/` - Classification, evaluation, rendering, push decision
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod rules;
pub mod services;

