//! The query-strategy contract and the single model touchpoint.

use turnwise_core::errors::{QueryError, TurnwiseResult};
use turnwise_core::{DialogueDataset, IClassifier, TurnProbabilities};
use turnwise_pool::LabeledPool;

use crate::scoring::validate_distribution;

/// Chooses unlabeled pool items to label next.
pub trait IQueryStrategy {
    /// Strategy name as accepted by [`crate::registry::StrategyKind`].
    fn name(&self) -> &str;

    /// Select up to `n` distinct, currently unlabeled pool indices.
    ///
    /// The unlabeled view is read once at the start of the call. When `n`
    /// exceeds the number of candidates the budget is clamped. The pool is
    /// not mutated; promoting the result is the caller's job.
    fn select(
        &mut self,
        pool: &LabeledPool,
        model: &dyn IClassifier,
        n: usize,
    ) -> TurnwiseResult<Vec<usize>>;
}

/// Ask `model` for per-turn distributions of every dialogue in `dataset`.
///
/// The result is shape-checked against the dataset and every distribution
/// must be non-negative and sum to 1.
pub fn predict_prob(
    model: &dyn IClassifier,
    dataset: &DialogueDataset,
) -> TurnwiseResult<Vec<TurnProbabilities>> {
    let probs = model.predict_prob(dataset)?;

    if probs.len() != dataset.len() {
        return Err(QueryError::ShapeMismatch {
            context: "dialogues".to_string(),
            expected: dataset.len(),
            actual: probs.len(),
        }
        .into());
    }

    for (dialogue_idx, (dialogue, dialogue_probs)) in dataset.iter().zip(&probs).enumerate() {
        if dialogue_probs.len() != dialogue.num_turns() {
            return Err(QueryError::ShapeMismatch {
                context: format!("turns of dialogue {dialogue_idx}"),
                expected: dialogue.num_turns(),
                actual: dialogue_probs.len(),
            }
            .into());
        }
        for (turn_idx, distribution) in dialogue_probs.iter().enumerate() {
            validate_distribution(distribution, dialogue_idx, turn_idx)?;
        }
    }

    Ok(probs)
}
