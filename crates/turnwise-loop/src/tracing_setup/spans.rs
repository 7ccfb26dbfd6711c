//! Span definitions for active-learning rounds and training.

/// Create an active-learning round span.
#[macro_export]
macro_rules! round_span {
    ($round:expr, $labeled:expr) => {
        tracing::info_span!("turnwise.round", round = $round, labeled = $labeled)
    };
}

/// Create a training span.
#[macro_export]
macro_rules! train_span {
    ($model:expr, $dialogues:expr) => {
        tracing::info_span!("turnwise.train", model = %$model, dialogues = $dialogues)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ROUND: &str = "turnwise.round";
    pub const TRAIN: &str = "turnwise.train";
}
