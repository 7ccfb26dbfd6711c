//! Deterministic stand-ins for the neural classifier.

use std::cell::Cell;
use std::collections::HashMap;

use turnwise_core::errors::{ModelError, TurnwiseResult};
use turnwise_core::{
    AdapterSettings, Dialogue, DialogueDataset, EpochSummary, IClassifier, IModelAdapter,
    TurnProbabilities,
};
use turnwise_core::traits::EpochCallback;

/// Model returning fixed per-turn distributions keyed by a dialogue's first turn.
///
/// Unknown dialogues get uniform distributions over `n_classes` when a
/// fallback is configured, otherwise prediction fails.
#[derive(Debug, Default)]
pub struct StubModel {
    probs: HashMap<String, TurnProbabilities>,
    fallback_classes: Option<usize>,
    n_epoch: usize,
    predict_prob_calls: Cell<usize>,
    /// Size of the dataset passed to each `train` call.
    pub train_sizes: Vec<usize>,
}

impl StubModel {
    pub fn new(n_epoch: usize) -> Self {
        Self {
            n_epoch,
            ..Default::default()
        }
    }

    /// Stub running the configured number of epochs per `train` call.
    pub fn from_settings(settings: &AdapterSettings) -> Self {
        Self::new(settings.n_epoch)
    }

    /// Uniform distributions for dialogues without explicit probabilities.
    pub fn with_uniform_fallback(mut self, n_classes: usize) -> Self {
        self.fallback_classes = Some(n_classes);
        self
    }

    /// Fixed distributions for the dialogue whose first turn is `key`.
    pub fn with_probs(mut self, key: impl Into<String>, probs: TurnProbabilities) -> Self {
        self.probs.insert(key.into(), probs);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, probs: TurnProbabilities) {
        self.probs.insert(key.into(), probs);
    }

    pub fn predict_prob_calls(&self) -> usize {
        self.predict_prob_calls.get()
    }

    fn probs_for(&self, dialogue: &Dialogue) -> TurnwiseResult<TurnProbabilities> {
        let Some(key) = dialogue.turns().first() else {
            return Ok(Vec::new());
        };
        if let Some(probs) = self.probs.get(key) {
            return Ok(probs.clone());
        }
        match self.fallback_classes {
            Some(c) => Ok(vec![vec![1.0 / c as f64; c]; dialogue.num_turns()]),
            None => Err(ModelError::PredictionFailed {
                reason: format!("no probabilities for dialogue {key:?}"),
            }
            .into()),
        }
    }
}

impl IClassifier for StubModel {
    fn predict_prob(&self, dataset: &DialogueDataset) -> TurnwiseResult<Vec<TurnProbabilities>> {
        self.predict_prob_calls.set(self.predict_prob_calls.get() + 1);
        dataset.iter().map(|d| self.probs_for(d)).collect()
    }

    fn predict(&self, dataset: &DialogueDataset) -> TurnwiseResult<Vec<usize>> {
        let mut labels = Vec::with_capacity(dataset.total_turns());
        for dialogue in dataset {
            for distribution in self.probs_for(dialogue)? {
                let argmax = distribution
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.total_cmp(b))
                    .map(|(class, _)| class)
                    .unwrap_or(0);
                labels.push(argmax);
            }
        }
        Ok(labels)
    }
}

impl IModelAdapter for StubModel {
    fn name(&self) -> &str {
        "stub"
    }

    /// Reports a loss of `1 / (epoch + 1)` scaled by the inverse dataset size.
    fn train(
        &mut self,
        dataset: &DialogueDataset,
        on_epoch: &mut EpochCallback<'_>,
    ) -> TurnwiseResult<()> {
        self.train_sizes.push(dataset.len());
        let scale = 1.0 / (dataset.len().max(1) as f64);
        for epoch in 0..self.n_epoch {
            let summary = EpochSummary {
                epoch,
                loss: scale / (epoch + 1) as f64,
            };
            on_epoch(&*self, summary)?;
        }
        Ok(())
    }
}
