//! Domain models for pushgate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RefChange`] - "Move this ref from A to B"
//! - [`Commit`] - A commit introduced by a push
//! - [`PolicyViolation`] - "This rule failed because..."
//! - [`PushDecision`] - Accept, or reject with a message

mod commit;
mod decision;
mod ref_change;
mod violation;

pub use commit::{Commit, Identity};
pub use decision::PushDecision;
pub use ref_change::{BRANCH_PREFIX, ObjectId, RefChange, RefChangeType, TAG_PREFIX};
pub use violation::{PolicyViolation, ViolationKind};
