use serde::{Deserialize, Serialize};

use super::DatasetParams;

/// Construction-time inputs for a model adapter.
///
/// `IModelAdapter::train` only receives data and an epoch callback, so the
/// epoch count, seed and dataset hyperparameters reach the adapter through
/// its constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterSettings {
    /// Epochs run by every `train` call.
    pub n_epoch: usize,
    pub seed: u64,
    pub params: DatasetParams,
}
