//! Push decision controller
//!
//! For each ref change, in input order: classify, then skip or evaluate,
//! then collect. Once every change is processed the push is accepted when
//! nothing was collected and rejected otherwise. Only a rejection carries a
//! rendered message.

use super::classifier::{Classification, classify};
use super::evaluator::{RefChangeEvaluator, RuleEvaluator};
use super::renderer::ViolationAggregator;
use crate::config::PolicyConfig;
use crate::core::models::{PushDecision, RefChange};
use crate::core::ports::Repository;

/// Orchestrates classification, evaluation and rendering for a push
#[derive(Debug, Default)]
pub struct PushController<E = RuleEvaluator> {
    evaluator: E,
}

impl<E: RefChangeEvaluator> PushController<E> {
    /// Controller using `evaluator` for non-skipped ref changes
    #[must_use]
    pub const fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Decide whether the push made of `changes` is accepted
    ///
    /// # Errors
    ///
    /// Returns the first repository failure hit while evaluating.
    pub fn evaluate(
        &self,
        changes: &[RefChange],
        config: &PolicyConfig,
        repository: &dyn Repository,
    ) -> anyhow::Result<PushDecision> {
        let mut aggregator = ViolationAggregator::new();

        for change in changes {
            if let Classification::Skip(reason) = classify(change) {
                log::debug!("{}: skipped ({reason})", change.ref_id());
                continue;
            }

            let violations = self.evaluator.evaluate(repository, config, change)?;
            aggregator.add(change.ref_id(), violations);
        }

        if aggregator.is_empty() {
            log::debug!("push accepted ({} ref change(s))", changes.len());
            return Ok(PushDecision::accept());
        }

        log::info!("push rejected with {} violation(s)", aggregator.len());
        let message = aggregator.render(config);
        Ok(PushDecision::reject(message, aggregator.into_violations()))
    }
}

/// Evaluate a push with the built-in rules
///
/// # Errors
///
/// Returns repository failures; policy and configuration problems are part
/// of the decision.
pub fn evaluate_push(
    changes: &[RefChange],
    config: &PolicyConfig,
    repository: &dyn Repository,
) -> anyhow::Result<PushDecision> {
    PushController::new(RuleEvaluator::default()).evaluate(changes, config, repository)
}
