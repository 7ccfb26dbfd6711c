use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_MODEL_NAME;
use crate::errors::TurnwiseError;

/// Built-in dialogue-act corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetName {
    #[serde(rename = "SWDA")]
    Swda,
    #[serde(rename = "DYDA")]
    Dyda,
    #[serde(rename = "KPN")]
    Kpn,
}

impl DatasetName {
    pub const ALL: [DatasetName; 3] = [Self::Swda, Self::Dyda, Self::Kpn];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Swda => "SWDA",
            Self::Dyda => "DYDA",
            Self::Kpn => "KPN",
        }
    }

    /// File stem of the corpus on disk.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Swda => "swda",
            Self::Dyda => "dyda_da",
            Self::Kpn => "kpn",
        }
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetName {
    type Err = TurnwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TurnwiseError::NotImplemented {
                name: format!("dataset {s}"),
            })
    }
}

/// Data-loader arguments handed to the model adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderArgs {
    pub batch_size: usize,
    pub num_workers: usize,
}

impl Default for LoaderArgs {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            num_workers: defaults::DEFAULT_NUM_WORKERS,
        }
    }
}

/// Optimizer arguments handed to the model adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerArgs {
    pub lr: f64,
}

impl Default for OptimizerArgs {
    fn default() -> Self {
        Self {
            lr: defaults::DEFAULT_LEARNING_RATE,
        }
    }
}

/// Per-dataset hyperparameters for the sequence classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetParams {
    /// Number of dialogue-act classes.
    pub n_labels: usize,
    /// Pretrained encoder identifier.
    pub model_name: String,
    /// Maximum tokens kept per turn.
    pub turn_length: usize,
    #[serde(default)]
    pub train_args: LoaderArgs,
    #[serde(default)]
    pub test_args: LoaderArgs,
    #[serde(default)]
    pub optimizer_args: OptimizerArgs,
}

impl DatasetParams {
    fn profile(n_labels: usize, turn_length: usize) -> Self {
        Self {
            n_labels,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            turn_length,
            train_args: LoaderArgs::default(),
            test_args: LoaderArgs::default(),
            optimizer_args: OptimizerArgs::default(),
        }
    }

    /// Built-in profile for a dataset.
    pub fn defaults_for(name: DatasetName) -> Self {
        match name {
            DatasetName::Swda => Self::profile(defaults::SWDA_N_LABELS, defaults::SWDA_TURN_LENGTH),
            DatasetName::Dyda => Self::profile(defaults::DYDA_N_LABELS, defaults::DYDA_TURN_LENGTH),
            DatasetName::Kpn => Self::profile(defaults::KPN_N_LABELS, defaults::KPN_TURN_LENGTH),
        }
    }
}

/// Hyperparameters for every built-in dataset, overridable per table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetTable {
    pub swda: DatasetParams,
    pub dyda: DatasetParams,
    pub kpn: DatasetParams,
}

impl DatasetTable {
    pub fn get(&self, name: DatasetName) -> &DatasetParams {
        match name {
            DatasetName::Swda => &self.swda,
            DatasetName::Dyda => &self.dyda,
            DatasetName::Kpn => &self.kpn,
        }
    }
}

impl Default for DatasetTable {
    fn default() -> Self {
        Self {
            swda: DatasetParams::defaults_for(DatasetName::Swda),
            dyda: DatasetParams::defaults_for(DatasetName::Dyda),
            kpn: DatasetParams::defaults_for(DatasetName::Kpn),
        }
    }
}
