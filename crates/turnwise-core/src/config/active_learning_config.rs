use serde::{Deserialize, Serialize};

use super::defaults;

/// Active-learning loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveLearningConfig {
    /// Query strategy name, e.g. "MaxTurnUncertainty".
    pub strategy: String,
    /// Only the first `clipping` turns of a dialogue are scored.
    pub clipping: Option<usize>,
    /// Dialogues labeled at random before the first round.
    pub n_init_labeled: usize,
    /// Dialogues promoted per round.
    pub n_query: usize,
    /// Number of query rounds after the initial fit.
    pub n_round: usize,
}

impl Default for ActiveLearningConfig {
    fn default() -> Self {
        Self {
            strategy: defaults::DEFAULT_STRATEGY.to_string(),
            clipping: None,
            n_init_labeled: defaults::DEFAULT_N_INIT_LABELED,
            n_query: defaults::DEFAULT_N_QUERY,
            n_round: defaults::DEFAULT_N_ROUND,
        }
    }
}
