//! # turnwise-metrics
//!
//! Classification report over concatenated turn labels: accuracy plus
//! macro-averaged precision, recall and F1. Undefined ratios (no predicted or
//! no true instances of a class) count as 0.

pub mod report;

pub use report::{classification_report, ClassMetrics, MetricsReport};
