//! # turnwise-loop
//!
//! Orchestration: train on the labeled subset, query, promote, repeat.
//! Every training epoch is evaluated on the test split and recorded as an
//! [`ExperimentRecord`]. A passive baseline trains once on the whole
//! training split for comparison.

pub mod active;
pub mod evaluation;
pub mod experiment;
pub mod passive;
pub mod records;
pub mod tracing_setup;

pub use active::{ActiveLearningLoop, ActiveLearningOutcome, LoopSettings, RoundSummary};
pub use experiment::{load_corpus, run_active, run_passive};
pub use passive::PassiveLearning;
pub use records::{write_jsonl, ExperimentRecord, RunContext};
