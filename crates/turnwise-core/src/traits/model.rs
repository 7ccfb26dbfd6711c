use serde::{Deserialize, Serialize};

use crate::dialogue::{DialogueDataset, TurnProbabilities};
use crate::errors::TurnwiseResult;

/// Inference side of a dialogue-act classifier.
pub trait IClassifier {
    /// One `TurnProbabilities` per dialogue, one distribution per turn.
    fn predict_prob(&self, dataset: &DialogueDataset) -> TurnwiseResult<Vec<TurnProbabilities>>;

    /// Predicted label per turn, concatenated in dataset order.
    fn predict(&self, dataset: &DialogueDataset) -> TurnwiseResult<Vec<usize>>;
}

/// Loss report handed to the epoch callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochSummary {
    /// Zero-based epoch index within one `train` call.
    pub epoch: usize,
    /// Mean training loss over the epoch.
    pub loss: f64,
}

/// Called once per epoch with the model in its post-epoch state.
pub type EpochCallback<'a> =
    dyn FnMut(&dyn IClassifier, EpochSummary) -> TurnwiseResult<()> + 'a;

/// Trainable classifier. The neural network behind it is opaque to turnwise.
pub trait IModelAdapter: IClassifier {
    /// Human-readable adapter name.
    fn name(&self) -> &str;

    /// Fit on `dataset`, invoking `on_epoch` after every epoch. An error
    /// returned by the callback aborts training and is propagated.
    fn train(
        &mut self,
        dataset: &DialogueDataset,
        on_epoch: &mut EpochCallback<'_>,
    ) -> TurnwiseResult<()>;
}
