//! Per-epoch experiment records, serialized as JSON lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use turnwise_core::errors::TurnwiseResult;
use turnwise_core::EpochSummary;
use turnwise_metrics::MetricsReport;

/// Identity and settings shared by every record of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunContext {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub dataset: String,
    pub strategy: String,
    pub seed: u64,
}

impl RunContext {
    pub fn new(dataset: impl Into<String>, strategy: impl Into<String>, seed: u64) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            dataset: dataset.into(),
            strategy: strategy.into(),
            seed,
        }
    }

    /// Record for one evaluated epoch.
    pub fn record(
        &self,
        round: usize,
        labeled_count: usize,
        summary: EpochSummary,
        metrics: &MetricsReport,
    ) -> ExperimentRecord {
        ExperimentRecord {
            run_id: self.run_id,
            started_at: self.started_at,
            dataset: self.dataset.clone(),
            strategy: self.strategy.clone(),
            seed: self.seed,
            round,
            labeled_count,
            epoch: summary.epoch,
            epoch_loss: summary.loss,
            accuracy: metrics.accuracy,
            f1: metrics.f1,
            precision: metrics.precision,
            recall: metrics.recall,
        }
    }
}

/// One row of experiment output: run settings, training progress, and the
/// test metrics measured after the epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub dataset: String,
    pub strategy: String,
    pub seed: u64,
    pub round: usize,
    pub labeled_count: usize,
    pub epoch: usize,
    pub epoch_loss: f64,
    pub accuracy: f64,
    pub f1: f64,
    pub precision: f64,
    pub recall: f64,
}

/// Write one JSON object per line.
pub fn write_jsonl<W: Write>(records: &[ExperimentRecord], mut writer: W) -> TurnwiseResult<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Create or truncate `path` and write `records` as JSON lines.
pub fn write_jsonl_file(
    records: &[ExperimentRecord],
    path: impl AsRef<Path>,
) -> TurnwiseResult<()> {
    let file = File::create(path)?;
    write_jsonl(records, BufWriter::new(file))
}
