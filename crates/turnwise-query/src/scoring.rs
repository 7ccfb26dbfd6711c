//! Per-turn informativeness measures and distribution checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use turnwise_core::constants::PROBABILITY_SUM_TOLERANCE;
use turnwise_core::errors::QueryError;

/// Per-turn informativeness measure. Higher means less certain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnMeasure {
    /// Least confidence: `1 - max_c p_c`.
    Uncertainty,
    /// Shannon entropy in nats.
    Entropy,
}

impl TurnMeasure {
    pub const ALL: [TurnMeasure; 2] = [Self::Uncertainty, Self::Entropy];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uncertainty => "Uncertainty",
            Self::Entropy => "Entropy",
        }
    }

    pub fn score(self, distribution: &[f64]) -> f64 {
        match self {
            Self::Uncertainty => least_confidence(distribution),
            Self::Entropy => entropy(distribution),
        }
    }
}

impl fmt::Display for TurnMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `1 - max_c p_c`.
pub fn least_confidence(distribution: &[f64]) -> f64 {
    let top = distribution
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    1.0 - top
}

/// `-Σ p_c ln p_c` over classes with `p_c > 0`.
pub fn entropy(distribution: &[f64]) -> f64 {
    -distribution
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f64>()
}

/// Check that `distribution` is a probability distribution.
///
/// `dialogue` and `turn` only locate the offending row in the error.
pub fn validate_distribution(
    distribution: &[f64],
    dialogue: usize,
    turn: usize,
) -> Result<(), QueryError> {
    let invalid = |reason: String| QueryError::InvalidDistribution {
        dialogue,
        turn,
        reason,
    };

    if distribution.is_empty() {
        return Err(invalid("no classes".to_string()));
    }
    if let Some(p) = distribution.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(invalid(format!("entry {p} is not a probability")));
    }
    let sum: f64 = distribution.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(invalid(format!("sums to {sum}")));
    }
    Ok(())
}
