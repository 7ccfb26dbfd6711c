//! JSON scenarios: a pool plus the top-class probabilities a stub model
//! reports for each of its turns.

use serde::Deserialize;
use turnwise_core::DialogueDataset;

use crate::model::StubModel;
use crate::{distribution_with_top, keyed_dialogue};

/// One dialogue of a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioDialogue {
    pub key: String,
    /// Top-class probability per turn.
    pub top_probs: Vec<f64>,
}

/// A pool with fixed model outputs and the expected selections.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub seed: u64,
    pub n_init_labeled: usize,
    pub dialogues: Vec<ScenarioDialogue>,
    pub rankings: Vec<Ranking>,
}

/// Hand-computed ordering of every pool index by a strategy's score, best first.
#[derive(Debug, Clone, Deserialize)]
pub struct Ranking {
    pub strategy: String,
    pub order: Vec<usize>,
}

impl Scenario {
    pub fn load(relative_path: &str) -> Self {
        crate::load_fixture(relative_path)
    }

    pub fn dataset(&self) -> DialogueDataset {
        self.dialogues
            .iter()
            .map(|d| keyed_dialogue(&d.key, d.top_probs.len()))
            .collect()
    }

    /// The first `budget` entries of the strategy's ranking that are still unlabeled.
    ///
    /// # Panics
    /// Panics if the scenario has no ranking for `strategy`.
    pub fn expected_selection(
        &self,
        strategy: &str,
        unlabeled: &[usize],
        budget: usize,
    ) -> Vec<usize> {
        let ranking = self
            .rankings
            .iter()
            .find(|r| r.strategy == strategy)
            .unwrap_or_else(|| panic!("scenario has no ranking for {strategy}"));
        ranking
            .order
            .iter()
            .copied()
            .filter(|index| unlabeled.contains(index))
            .take(budget)
            .collect()
    }

    pub fn model(&self, n_epoch: usize) -> StubModel {
        let mut model = StubModel::new(n_epoch);
        for d in &self.dialogues {
            let probs = d.top_probs.iter().map(|&p| distribution_with_top(p)).collect();
            model.insert(d.key.clone(), probs);
        }
        model
    }
}
