//! Passive-learning baseline: train once on the whole training split.

use tracing::info;

use turnwise_core::constants::VERSION;
use turnwise_core::errors::TurnwiseResult;
use turnwise_core::{EpochSummary, IClassifier, IModelAdapter, TurnwiseConfig};
use turnwise_pool::Corpus;

use crate::evaluation::evaluate;
use crate::records::{ExperimentRecord, RunContext};

/// Strategy name recorded for passive runs.
pub const PASSIVE_STRATEGY: &str = "Passive";

/// Trains on every training dialogue and evaluates after each epoch.
#[derive(Debug, Clone)]
pub struct PassiveLearning {
    context: RunContext,
    fraction: f64,
}

impl PassiveLearning {
    pub fn new(context: RunContext, fraction: f64) -> Self {
        Self { context, fraction }
    }

    pub fn from_config(config: &TurnwiseConfig) -> TurnwiseResult<Self> {
        let dataset = config.dataset()?;
        let context = RunContext::new(dataset.as_str(), PASSIVE_STRATEGY, config.experiment.seed);
        Ok(Self::new(context, config.experiment.fraction))
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Subsample the training split, fit `model` on it, and return one
    /// record per epoch. Round is always 0.
    pub fn run<M: IModelAdapter>(
        &self,
        corpus: &Corpus,
        model: &mut M,
    ) -> TurnwiseResult<Vec<ExperimentRecord>> {
        let corpus = corpus.subsample(self.fraction)?;
        let labeled_count = corpus.train.len();
        info!(
            run_id = %self.context.run_id,
            version = VERSION,
            dataset = %self.context.dataset,
            train = labeled_count,
            test = corpus.test.len(),
            "passive run started"
        );

        let mut records = Vec::new();
        let span = crate::train_span!(model.name(), labeled_count);
        let mut on_epoch =
            |classifier: &dyn IClassifier, summary: EpochSummary| -> TurnwiseResult<()> {
                let metrics = evaluate(classifier, &corpus.test)?;
                info!(epoch = summary.epoch, loss = summary.loss, "epoch finished");
                records.push(self.context.record(0, labeled_count, summary, &metrics));
                Ok(())
            };
        span.in_scope(|| model.train(&corpus.train, &mut on_epoch))?;

        info!(epochs = records.len(), "passive run finished");
        Ok(records)
    }
}
