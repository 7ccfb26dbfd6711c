/// turnwise version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Allowed absolute deviation of a turn distribution's sum from 1.0.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-4;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "TURNWISE_LOG";

/// Model used by every built-in dataset profile.
pub const DEFAULT_MODEL_NAME: &str = "allenai/longformer-base-4096";
