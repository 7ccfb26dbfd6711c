//! Configuration loaded from TOML. Every section falls back to the values in
//! [`defaults`] when omitted.

mod active_learning_config;
mod adapter_settings;
pub mod defaults;
mod dataset_params;
mod experiment_config;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use active_learning_config::ActiveLearningConfig;
pub use adapter_settings::AdapterSettings;
pub use dataset_params::{DatasetName, DatasetParams, DatasetTable, LoaderArgs, OptimizerArgs};
pub use experiment_config::ExperimentConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{ConfigError, TurnwiseResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnwiseConfig {
    pub experiment: ExperimentConfig,
    pub active_learning: ActiveLearningConfig,
    pub observability: ObservabilityConfig,
    pub datasets: DatasetTable,
}

impl TurnwiseConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> TurnwiseResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> TurnwiseResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> TurnwiseResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Resolve the configured dataset name.
    pub fn dataset(&self) -> TurnwiseResult<DatasetName> {
        self.experiment.dataset_name.parse()
    }

    /// Hyperparameters of the configured dataset.
    pub fn dataset_params(&self) -> TurnwiseResult<&DatasetParams> {
        Ok(self.datasets.get(self.dataset()?))
    }

    /// Settings for constructing the model adapter of this run.
    pub fn adapter_settings(&self) -> TurnwiseResult<AdapterSettings> {
        Ok(AdapterSettings {
            n_epoch: self.experiment.n_epoch,
            seed: self.experiment.seed,
            params: self.dataset_params()?.clone(),
        })
    }

    /// Reject values no run can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fraction = self.experiment.fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "experiment.fraction".to_string(),
                reason: format!("{fraction} is outside (0, 1]"),
            });
        }
        if self.experiment.n_epoch == 0 {
            return Err(ConfigError::InvalidValue {
                field: "experiment.n_epoch".to_string(),
                reason: "at least one epoch is required".to_string(),
            });
        }
        if self.active_learning.clipping == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "active_learning.clipping".to_string(),
                reason: "clipping must keep at least one turn".to_string(),
            });
        }
        Ok(())
    }
}
