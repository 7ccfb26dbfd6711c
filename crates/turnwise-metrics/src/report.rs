use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use turnwise_core::errors::EvaluationError;

/// Precision, recall, F1 and support of one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub label: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true instances.
    pub support: usize,
}

/// Headline metrics plus the per-class breakdown they are averaged from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub accuracy: f64,
    /// Macro-averaged F1.
    pub f1: f64,
    /// Macro-averaged precision.
    pub precision: f64,
    /// Macro-averaged recall.
    pub recall: f64,
    pub per_class: Vec<ClassMetrics>,
}

#[derive(Default)]
struct Counts {
    tp: usize,
    fp: usize,
    fn_: usize,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Compare true and predicted labels position by position.
///
/// Classes are the union of labels appearing in either sequence, in ascending
/// order; macro averages weight each of them equally.
pub fn classification_report(
    y_true: &[usize],
    y_pred: &[usize],
) -> Result<MetricsReport, EvaluationError> {
    if y_true.len() != y_pred.len() {
        return Err(EvaluationError::LengthMismatch {
            y_true: y_true.len(),
            y_pred: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(EvaluationError::Empty);
    }

    let mut counts: BTreeMap<usize, Counts> = BTreeMap::new();
    let mut correct = 0;
    for (&truth, &pred) in y_true.iter().zip(y_pred) {
        if truth == pred {
            correct += 1;
            counts.entry(truth).or_default().tp += 1;
        } else {
            counts.entry(truth).or_default().fn_ += 1;
            counts.entry(pred).or_default().fp += 1;
        }
    }

    let per_class: Vec<ClassMetrics> = counts
        .into_iter()
        .map(|(label, c)| {
            let precision = ratio(c.tp, c.tp + c.fp);
            let recall = ratio(c.tp, c.tp + c.fn_);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };
            ClassMetrics {
                label,
                precision,
                recall,
                f1,
                support: c.tp + c.fn_,
            }
        })
        .collect();

    let classes = per_class.len() as f64;
    let macro_avg = |metric: fn(&ClassMetrics) -> f64| -> f64 {
        per_class.iter().map(metric).sum::<f64>() / classes
    };

    Ok(MetricsReport {
        accuracy: correct as f64 / y_true.len() as f64,
        f1: macro_avg(|c| c.f1),
        precision: macro_avg(|c| c.precision),
        recall: macro_avg(|c| c.recall),
        per_class,
    })
}

impl MetricsReport {
    /// Total number of evaluated labels.
    pub fn support(&self) -> usize {
        self.per_class.iter().map(|c| c.support).sum()
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for c in &self.per_class {
            writeln!(
                f,
                "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                c.label, c.precision, c.recall, c.f1, c.support
            )?;
        }
        writeln!(f)?;
        let support = self.support();
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, support
        )?;
        write!(
            f,
            "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
            "macro avg", self.precision, self.recall, self.f1, support
        )
    }
}
