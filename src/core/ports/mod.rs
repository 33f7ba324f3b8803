//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the policy engine and the
//! hosting platform (repository storage, user lookup).
//!
//! Implementations live in the `adapters` module.

mod repository;

pub use repository::Repository;
