//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`classifier`] - Decide which ref changes get checked
//! - [`evaluator`] - Run the rules against one ref change
//! - [`renderer`] - Aggregate violations and render the rejection message
//! - [`controller`] - Accept or reject a whole push

pub mod classifier;
pub mod controller;
pub mod evaluator;
pub mod renderer;

pub use classifier::{Classification, EXCLUDED_NAMESPACES, SkipReason, classify, should_check};
pub use controller::{PushController, evaluate_push};
pub use evaluator::{RefChangeEvaluator, RuleEvaluator};
pub use renderer::{DEFAULT_HEADER, ViolationAggregator, render};
