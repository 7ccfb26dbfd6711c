//! Error hierarchy: one enum per subsystem, wrapped by [`TurnwiseError`].

mod config_error;
mod evaluation_error;
mod model_error;
mod pool_error;
mod query_error;

pub use config_error::ConfigError;
pub use evaluation_error::EvaluationError;
pub use model_error::ModelError;
pub use pool_error::PoolError;
pub use query_error::QueryError;

/// Top-level error for every turnwise crate.
#[derive(Debug, thiserror::Error)]
pub enum TurnwiseError {
    #[error("not implemented: {name}")]
    NotImplemented { name: String },

    #[error("pool error: {0}")]
    PoolError(#[from] PoolError),

    #[error("query error: {0}")]
    QueryError(#[from] QueryError),

    #[error("model error: {0}")]
    ModelError(#[from] ModelError),

    #[error("evaluation error: {0}")]
    EvaluationError(#[from] EvaluationError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the workspace.
pub type TurnwiseResult<T> = Result<T, TurnwiseError>;
