/// Metric computation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("label count mismatch: {y_true} true labels, {y_pred} predictions")]
    LengthMismatch { y_true: usize, y_pred: usize },

    #[error("cannot evaluate an empty label sequence")]
    Empty,
}
