//! # turnwise-query
//!
//! Query strategies that pick which unlabeled dialogues to label next.
//!
//! ## Pipeline
//!
//! unlabeled view → model probabilities → per-turn measure → clipping →
//! aggregation → top-k → pool indices.
//!
//! | Measure | Per-turn value |
//! |---------|----------------|
//! | Uncertainty | `1 - max_c p_c` |
//! | Entropy | `-Σ p_c ln p_c` |
//!
//! Each measure combines with the Max, Min, Average, Median and Total
//! aggregations. `RandomSampling` ignores the model and serves as the control.

pub mod aggregation;
pub mod registry;
pub mod scoring;
pub mod selection;
pub mod strategies;
pub mod strategy;

pub use aggregation::Aggregation;
pub use registry::{build_strategy, strategy_from_name, StrategyKind};
pub use scoring::TurnMeasure;
pub use strategies::{RandomSampling, TurnScoringStrategy};
pub use strategy::IQueryStrategy;
