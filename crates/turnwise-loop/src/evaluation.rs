use tracing::{debug, info};

use turnwise_core::errors::TurnwiseResult;
use turnwise_core::{DialogueDataset, IClassifier};
use turnwise_metrics::{classification_report, MetricsReport};

/// Predict every turn of `test` and compare against its labels.
pub fn evaluate(
    classifier: &dyn IClassifier,
    test: &DialogueDataset,
) -> TurnwiseResult<MetricsReport> {
    let y_pred = classifier.predict(test)?;
    let y_true = test.flat_labels();
    let report = classification_report(&y_true, &y_pred)?;

    info!(
        accuracy = report.accuracy,
        f1 = report.f1,
        precision = report.precision,
        recall = report.recall,
        "test metrics"
    );
    debug!("classification report\n{report}");
    Ok(report)
}
