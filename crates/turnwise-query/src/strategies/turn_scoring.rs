use tracing::{debug, debug_span};

use turnwise_core::errors::{QueryError, TurnwiseResult};
use turnwise_core::IClassifier;
use turnwise_pool::LabeledPool;

use crate::aggregation::Aggregation;
use crate::scoring::TurnMeasure;
use crate::selection::{clamp_budget, top_k};
use crate::strategy::{predict_prob, IQueryStrategy};

/// Scores every unlabeled dialogue from its per-turn distributions and picks
/// the highest scoring ones.
///
/// Per turn the [`TurnMeasure`] is computed, the sequence is cut to the first
/// `clipping` turns, and the [`Aggregation`] reduces it to the dialogue score.
/// Dialogues without turns have no score and are never selected.
#[derive(Debug, Clone)]
pub struct TurnScoringStrategy {
    name: String,
    measure: TurnMeasure,
    aggregation: Aggregation,
    clipping: Option<usize>,
}

impl TurnScoringStrategy {
    pub fn new(
        measure: TurnMeasure,
        aggregation: Aggregation,
        clipping: Option<usize>,
    ) -> Result<Self, QueryError> {
        if clipping == Some(0) {
            return Err(QueryError::InvalidClipping { value: 0 });
        }
        Ok(Self {
            name: format!("{}Turn{}", aggregation.as_str(), measure.as_str()),
            measure,
            aggregation,
            clipping,
        })
    }

    /// Least-confidence scoring.
    pub fn uncertainty(
        aggregation: Aggregation,
        clipping: Option<usize>,
    ) -> Result<Self, QueryError> {
        Self::new(TurnMeasure::Uncertainty, aggregation, clipping)
    }

    /// Entropy scoring.
    pub fn entropy(aggregation: Aggregation, clipping: Option<usize>) -> Result<Self, QueryError> {
        Self::new(TurnMeasure::Entropy, aggregation, clipping)
    }

    pub fn measure(&self) -> TurnMeasure {
        self.measure
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    pub fn clipping(&self) -> Option<usize> {
        self.clipping
    }

    /// Dialogue score from its per-turn distributions. `None` without turns.
    pub fn score_dialogue(&self, turn_probs: &[Vec<f64>]) -> Option<f64> {
        let limit = self.clipping.unwrap_or(usize::MAX);
        let per_turn: Vec<f64> = turn_probs
            .iter()
            .take(limit)
            .map(|distribution| self.measure.score(distribution))
            .collect();
        self.aggregation.apply(&per_turn)
    }
}

impl IQueryStrategy for TurnScoringStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn select(
        &mut self,
        pool: &LabeledPool,
        model: &dyn IClassifier,
        n: usize,
    ) -> TurnwiseResult<Vec<usize>> {
        let _span = debug_span!("turnwise.query", strategy = %self.name, budget = n).entered();

        let view = pool.unlabeled_view();
        if view.is_empty() || n == 0 {
            return Ok(Vec::new());
        }

        let probs = predict_prob(model, view.dataset())?;

        // Scores are keyed by local position in the view.
        let scores: Vec<(usize, f64)> = probs
            .iter()
            .enumerate()
            .filter_map(|(local, turn_probs)| {
                self.score_dialogue(turn_probs).map(|score| (local, score))
            })
            .collect();

        let skipped = view.len() - scores.len();
        if skipped > 0 {
            debug!(skipped, "dialogues without turns excluded from candidacy");
        }

        let budget = clamp_budget(n, scores.len(), &self.name);
        let locals = top_k(&scores, budget);
        let selected = view.to_original(&locals)?;

        debug!(
            candidates = scores.len(),
            selected = selected.len(),
            "scored selection"
        );
        Ok(selected)
    }
}
