//! Reductions from per-turn scores to one dialogue score.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a dialogue's per-turn scores collapse into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aggregation {
    Max,
    Min,
    Average,
    Median,
    Total,
}

impl Aggregation {
    pub const ALL: [Aggregation; 5] = [
        Self::Max,
        Self::Min,
        Self::Average,
        Self::Median,
        Self::Total,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Max => "Max",
            Self::Min => "Min",
            Self::Average => "Average",
            Self::Median => "Median",
            Self::Total => "Total",
        }
    }

    /// Aggregate `values`. `None` for an empty sequence.
    pub fn apply(self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let value = match self {
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Average => values.iter().sum::<f64>() / values.len() as f64,
            Self::Median => median(values),
            Self::Total => values.iter().sum(),
        };
        Some(value)
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Middle value; mean of the two middle values for even lengths.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
