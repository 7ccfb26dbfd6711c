//! Config-driven entry points.

use tracing::info;

use turnwise_core::errors::TurnwiseResult;
use turnwise_core::{IModelAdapter, TurnwiseConfig};
use turnwise_pool::{Corpus, LabeledPool};
use turnwise_query::strategy_from_name;

use crate::active::{ActiveLearningLoop, ActiveLearningOutcome, LoopSettings};
use crate::passive::PassiveLearning;
use crate::records::{write_jsonl_file, ExperimentRecord, RunContext};

/// Load the configured dataset from `experiment.dataset_dir`.
pub fn load_corpus(config: &TurnwiseConfig) -> TurnwiseResult<Corpus> {
    Corpus::load(&config.experiment.dataset_dir, config.dataset()?)
}

/// Run active learning with the configured strategy. The pool is the first
/// `fraction` of the training split.
///
/// The strategy name is resolved before any training happens, so an unknown
/// name fails fast with `NotImplemented`.
pub fn run_active<M: IModelAdapter>(
    config: &TurnwiseConfig,
    corpus: &Corpus,
    model: &mut M,
) -> TurnwiseResult<ActiveLearningOutcome> {
    let al = &config.active_learning;
    let seed = config.experiment.seed;
    let mut strategy = strategy_from_name(&al.strategy, al.clipping, seed)?;
    let dataset = config.dataset()?;

    let context = RunContext::new(dataset.as_str(), strategy.name(), seed);
    let driver = ActiveLearningLoop::new(LoopSettings::from_config(config), context);

    let corpus = corpus.subsample(config.experiment.fraction)?;
    let mut pool = LabeledPool::new(corpus.train);
    let outcome = driver.run(&mut pool, &corpus.test, model, strategy.as_mut())?;
    write_output(config, &outcome.records)?;
    Ok(outcome)
}

/// Run the passive baseline on `corpus`.
pub fn run_passive<M: IModelAdapter>(
    config: &TurnwiseConfig,
    corpus: &Corpus,
    model: &mut M,
) -> TurnwiseResult<Vec<ExperimentRecord>> {
    let records = PassiveLearning::from_config(config)?.run(corpus, model)?;
    write_output(config, &records)?;
    Ok(records)
}

fn write_output(config: &TurnwiseConfig, records: &[ExperimentRecord]) -> TurnwiseResult<()> {
    if let Some(path) = &config.experiment.output_path {
        write_jsonl_file(records, path)?;
        info!(path = %path, records = records.len(), "records written");
    }
    Ok(())
}
