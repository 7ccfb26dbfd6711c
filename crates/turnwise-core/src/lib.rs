//! # turnwise-core
//!
//! Foundation crate for turnwise.
//! Defines dialogue types, model-adapter traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod dialogue;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AdapterSettings, DatasetName, DatasetParams, TurnwiseConfig};
pub use dialogue::{Dialogue, DialogueDataset, TurnProbabilities};
pub use errors::{TurnwiseError, TurnwiseResult};
pub use traits::{EpochSummary, IClassifier, IModelAdapter};
