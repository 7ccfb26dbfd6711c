use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings shared by passive and active runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Seed for every random choice made by the run.
    pub seed: u64,
    /// Training epochs per fit, passed to the model adapter through
    /// [`super::AdapterSettings`].
    pub n_epoch: usize,
    /// Fraction of the training split kept, in (0, 1].
    pub fraction: f64,
    /// Dataset name: "SWDA", "DYDA" or "KPN".
    pub dataset_name: String,
    /// Directory holding `<dataset>.json` corpora.
    pub dataset_dir: String,
    /// Where experiment records are written as JSON lines.
    pub output_path: Option<String>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            seed: defaults::DEFAULT_SEED,
            n_epoch: defaults::DEFAULT_N_EPOCH,
            fraction: defaults::DEFAULT_FRACTION,
            dataset_name: defaults::DEFAULT_DATASET_NAME.to_string(),
            dataset_dir: defaults::DEFAULT_DATASET_DIR.to_string(),
            output_path: None,
        }
    }
}
