/// Query-strategy errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid distribution at dialogue {dialogue}, turn {turn}: {reason}")]
    InvalidDistribution {
        dialogue: usize,
        turn: usize,
        reason: String,
    },

    #[error("shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("clipping must be at least 1, got {value}")]
    InvalidClipping { value: usize },
}
