/// Labeled-pool and dataset errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("dialogue has {turns} turns but {labels} labels")]
    LengthMismatch { turns: usize, labels: usize },

    #[error("requested {requested} initial labels but the pool holds {available}")]
    InsufficientPool { requested: usize, available: usize },

    #[error("pool already has {labeled} labeled items")]
    AlreadyInitialized { labeled: usize },

    #[error("index {index} out of range for pool of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("index {index} is already labeled")]
    AlreadyLabeled { index: usize },

    #[error("index {index} appears more than once")]
    DuplicateIndex { index: usize },

    #[error("local index {local} out of range for view of {len}")]
    LocalIndexOutOfRange { local: usize, len: usize },
}
