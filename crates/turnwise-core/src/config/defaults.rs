// Single source of truth for all default values.

// --- Experiment ---
pub const DEFAULT_SEED: u64 = 1;
pub const DEFAULT_N_EPOCH: usize = 1;
pub const DEFAULT_FRACTION: f64 = 1.0;
pub const DEFAULT_DATASET_NAME: &str = "SWDA";
pub const DEFAULT_DATASET_DIR: &str = "data";

// --- Active learning ---
pub const DEFAULT_STRATEGY: &str = "RandomSampling";
pub const DEFAULT_N_INIT_LABELED: usize = 100;
pub const DEFAULT_N_QUERY: usize = 10;
pub const DEFAULT_N_ROUND: usize = 10;

// --- Datasets ---
pub const DEFAULT_BATCH_SIZE: usize = 1;
pub const DEFAULT_NUM_WORKERS: usize = 0;
pub const DEFAULT_LEARNING_RATE: f64 = 1e-5;

pub const SWDA_N_LABELS: usize = 46;
pub const SWDA_TURN_LENGTH: usize = 80;
pub const DYDA_N_LABELS: usize = 4;
pub const DYDA_TURN_LENGTH: usize = 120;
pub const KPN_N_LABELS: usize = 19;
pub const KPN_TURN_LENGTH: usize = 224;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
