//! Train/test corpora stored as JSON documents.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use turnwise_core::errors::{ConfigError, TurnwiseResult};
use turnwise_core::{DatasetName, DialogueDataset};

/// A dataset split into the training pool and the held-out test set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub train: DialogueDataset,
    pub test: DialogueDataset,
}

impl Corpus {
    pub fn new(train: DialogueDataset, test: DialogueDataset) -> Self {
        Self { train, test }
    }

    pub fn from_json_str(source: &str) -> TurnwiseResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> TurnwiseResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let corpus = Self::from_json_str(&source)?;
        info!(
            path = %path.display(),
            train = corpus.train.len(),
            test = corpus.test.len(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Load the corpus for `name` from `dataset_dir`.
    pub fn load(dataset_dir: impl AsRef<Path>, name: DatasetName) -> TurnwiseResult<Self> {
        Self::from_json_file(corpus_path(dataset_dir, name))
    }

    /// Keep the first `floor(train.len() * fraction)` training dialogues.
    /// The test split is untouched.
    pub fn subsample(&self, fraction: f64) -> Result<Self, ConfigError> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "fraction".to_string(),
                reason: format!("{fraction} is outside (0, 1]"),
            });
        }
        let keep = (self.train.len() as f64 * fraction).floor() as usize;
        Ok(Self {
            train: self.train.head(keep),
            test: self.test.clone(),
        })
    }
}

/// `<dataset_dir>/<file stem>.json`.
pub fn corpus_path(dataset_dir: impl AsRef<Path>, name: DatasetName) -> PathBuf {
    dataset_dir
        .as_ref()
        .join(format!("{}.json", name.file_stem()))
}
