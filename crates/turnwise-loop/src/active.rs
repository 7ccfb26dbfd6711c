//! The active-learning driver.
//!
//! Round 0 fits the model on the initial random labels. Each later round
//! asks the strategy for `n_query` unlabeled dialogues, labels them, and
//! refits on the grown labeled set. Every epoch is evaluated on the test
//! split.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use turnwise_core::constants::VERSION;
use turnwise_core::errors::TurnwiseResult;
use turnwise_core::{DialogueDataset, EpochSummary, IClassifier, IModelAdapter, TurnwiseConfig};
use turnwise_metrics::MetricsReport;
use turnwise_pool::LabeledPool;
use turnwise_query::IQueryStrategy;

use crate::evaluation::evaluate;
use crate::records::{ExperimentRecord, RunContext};

/// Budget and seed of an active-learning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopSettings {
    pub n_init_labeled: usize,
    pub n_query: usize,
    pub n_round: usize,
    pub seed: u64,
}

impl LoopSettings {
    pub fn from_config(config: &TurnwiseConfig) -> Self {
        Self {
            n_init_labeled: config.active_learning.n_init_labeled,
            n_query: config.active_learning.n_query,
            n_round: config.active_learning.n_round,
            seed: config.experiment.seed,
        }
    }
}

/// What happened in one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: usize,
    /// Labeled dialogues the round trained on.
    pub labeled_count: usize,
    /// Pool indices promoted at the start of the round. Empty for round 0.
    pub selected: Vec<usize>,
    /// Test metrics after the last epoch, if the model ran any.
    pub final_metrics: Option<MetricsReport>,
}

#[derive(Debug, Clone, Default)]
pub struct ActiveLearningOutcome {
    pub records: Vec<ExperimentRecord>,
    pub rounds: Vec<RoundSummary>,
}

impl ActiveLearningOutcome {
    pub fn final_metrics(&self) -> Option<&MetricsReport> {
        self.rounds.last().and_then(|r| r.final_metrics.as_ref())
    }
}

pub struct ActiveLearningLoop {
    settings: LoopSettings,
    context: RunContext,
}

impl ActiveLearningLoop {
    pub fn new(settings: LoopSettings, context: RunContext) -> Self {
        Self { settings, context }
    }

    pub fn settings(&self) -> &LoopSettings {
        &self.settings
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Run every round against `pool`.
    ///
    /// A pool that already carries labels is used as is; otherwise
    /// `n_init_labeled` dialogues are labeled at random first. Rounds stop
    /// early once no unlabeled dialogue remains.
    pub fn run<M: IModelAdapter>(
        &self,
        pool: &mut LabeledPool,
        test: &DialogueDataset,
        model: &mut M,
        strategy: &mut dyn IQueryStrategy,
    ) -> TurnwiseResult<ActiveLearningOutcome> {
        info!(
            run_id = %self.context.run_id,
            version = VERSION,
            strategy = strategy.name(),
            pool = pool.len(),
            n_init_labeled = self.settings.n_init_labeled,
            n_query = self.settings.n_query,
            n_round = self.settings.n_round,
            "active learning started"
        );

        if pool.labeled_count() == 0 {
            pool.initialize_labels(self.settings.n_init_labeled, self.settings.seed)?;
        }

        let mut outcome = ActiveLearningOutcome::default();
        self.train_round(0, Vec::new(), pool, test, model, &mut outcome)?;

        for round in 1..=self.settings.n_round {
            if pool.unlabeled_count() == 0 {
                warn!(round, "unlabeled pool exhausted, stopping early");
                break;
            }

            let selected = {
                let _span = crate::round_span!(round, pool.labeled_count()).entered();
                strategy.select(pool, &*model, self.settings.n_query)?
            };
            if selected.is_empty() {
                warn!(round, "no selectable candidates left, stopping early");
                break;
            }
            pool.promote(&selected)?;
            info!(
                round,
                selected = selected.len(),
                labeled = pool.labeled_count(),
                "dialogues promoted"
            );

            self.train_round(round, selected, pool, test, model, &mut outcome)?;
        }

        info!(
            rounds = outcome.rounds.len(),
            labeled = pool.labeled_count(),
            "active learning finished"
        );
        Ok(outcome)
    }

    fn train_round<M: IModelAdapter>(
        &self,
        round: usize,
        selected: Vec<usize>,
        pool: &LabeledPool,
        test: &DialogueDataset,
        model: &mut M,
        outcome: &mut ActiveLearningOutcome,
    ) -> TurnwiseResult<()> {
        let labeled = pool.labeled_view();
        let labeled_count = labeled.len();
        let _round = crate::round_span!(round, labeled_count).entered();

        let mut final_metrics = None;
        let records = &mut outcome.records;
        let mut on_epoch =
            |classifier: &dyn IClassifier, summary: EpochSummary| -> TurnwiseResult<()> {
                let metrics = evaluate(classifier, test)?;
                info!(epoch = summary.epoch, loss = summary.loss, "epoch finished");
                records.push(self.context.record(round, labeled_count, summary, &metrics));
                final_metrics = Some(metrics);
                Ok(())
            };

        let span = crate::train_span!(model.name(), labeled_count);
        span.in_scope(|| model.train(labeled.dataset(), &mut on_epoch))?;

        outcome.rounds.push(RoundSummary {
            round,
            labeled_count,
            selected,
            final_metrics,
        });
        Ok(())
    }
}
