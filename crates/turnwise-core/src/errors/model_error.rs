/// Errors surfaced by model adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("prediction failed: {reason}")]
    PredictionFailed { reason: String },

    #[error("training failed at epoch {epoch}: {reason}")]
    TrainingFailed { epoch: usize, reason: String },
}
