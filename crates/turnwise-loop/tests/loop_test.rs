use std::collections::HashSet;

use test_fixtures::{keyed_dialogue, synthetic_dataset, StubModel};
use turnwise_core::errors::{ModelError, TurnwiseError};
use turnwise_core::{DialogueDataset, TurnwiseConfig};
use turnwise_loop::{
    load_corpus, run_active, run_passive, ActiveLearningLoop, ExperimentRecord, LoopSettings,
    PassiveLearning, RunContext,
};
use turnwise_pool::{Corpus, LabeledPool};
use turnwise_query::{Aggregation, RandomSampling, TurnScoringStrategy};

fn settings(n_init_labeled: usize, n_query: usize, n_round: usize) -> LoopSettings {
    LoopSettings {
        n_init_labeled,
        n_query,
        n_round,
        seed: 7,
    }
}

fn driver(settings: LoopSettings) -> ActiveLearningLoop {
    ActiveLearningLoop::new(settings, RunContext::new("DYDA", "RandomSampling", settings.seed))
}

/// Single-class model: every prediction is label 0, so metrics are perfect.
fn certain_model(n_epoch: usize) -> StubModel {
    StubModel::new(n_epoch).with_uniform_fallback(1)
}

fn test_split() -> DialogueDataset {
    (0..4).map(|i| keyed_dialogue(&format!("t{i}"), 2)).collect()
}

// ── Active loop ──────────────────────────────────────────────────────────

#[test]
fn labeled_set_grows_by_query_size_each_round() {
    let mut pool = LabeledPool::new(synthetic_dataset(20));
    let mut model = certain_model(2);
    let mut strategy = RandomSampling::new(3);

    let outcome = driver(settings(4, 3, 3))
        .run(&mut pool, &test_split(), &mut model, &mut strategy)
        .unwrap();

    let counts: Vec<usize> = outcome.rounds.iter().map(|r| r.labeled_count).collect();
    assert_eq!(counts, vec![4, 7, 10, 13]);
    assert_eq!(model.train_sizes, vec![4, 7, 10, 13]);
    assert_eq!(pool.labeled_count(), 13);

    assert!(outcome.rounds[0].selected.is_empty());
    for round in &outcome.rounds[1..] {
        assert_eq!(round.selected.len(), 3);
    }
}

#[test]
fn selections_never_repeat_across_rounds() {
    let mut pool = LabeledPool::new(synthetic_dataset(15));
    let mut model = certain_model(1);
    let mut strategy = RandomSampling::new(11);

    let outcome = driver(settings(2, 4, 3))
        .run(&mut pool, &test_split(), &mut model, &mut strategy)
        .unwrap();

    let mut seen = HashSet::new();
    for index in outcome.rounds.iter().flat_map(|r| r.selected.iter()) {
        assert!(seen.insert(*index), "index {index} selected twice");
    }
}

#[test]
fn one_record_per_epoch_with_round_metadata() {
    let mut pool = LabeledPool::new(synthetic_dataset(10));
    let mut model = certain_model(3);
    let mut strategy = RandomSampling::new(0);

    let outcome = driver(settings(2, 2, 2))
        .run(&mut pool, &test_split(), &mut model, &mut strategy)
        .unwrap();

    assert_eq!(outcome.records.len(), 9);
    let rounds: Vec<usize> = outcome.records.iter().map(|r| r.round).collect();
    assert_eq!(rounds, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
    let epochs: Vec<usize> = outcome.records.iter().map(|r| r.epoch).collect();
    assert_eq!(epochs, vec![0, 1, 2, 0, 1, 2, 0, 1, 2]);

    let labeled: Vec<usize> = outcome.records.iter().map(|r| r.labeled_count).collect();
    assert!(labeled.windows(2).all(|w| w[0] <= w[1]));

    for record in &outcome.records {
        assert_eq!(record.accuracy, 1.0);
        assert_eq!(record.dataset, "DYDA");
    }
    assert_eq!(outcome.final_metrics().map(|m| m.accuracy), Some(1.0));
}

#[test]
fn stops_early_when_pool_is_exhausted() {
    let mut pool = LabeledPool::new(synthetic_dataset(6));
    let mut model = certain_model(1);
    let mut strategy = RandomSampling::new(5);

    let outcome = driver(settings(2, 3, 5))
        .run(&mut pool, &test_split(), &mut model, &mut strategy)
        .unwrap();

    let counts: Vec<usize> = outcome.rounds.iter().map(|r| r.labeled_count).collect();
    assert_eq!(counts, vec![2, 5, 6]);
    assert_eq!(outcome.rounds[2].selected.len(), 1);
    assert_eq!(pool.unlabeled_count(), 0);
}

#[test]
fn pre_labeled_pool_is_not_reinitialized() {
    let mut pool = LabeledPool::new(synthetic_dataset(10));
    pool.promote(&[8, 9]).unwrap();
    let mut model = certain_model(1);
    let mut strategy = RandomSampling::new(1);

    let outcome = driver(settings(5, 1, 0))
        .run(&mut pool, &test_split(), &mut model, &mut strategy)
        .unwrap();

    assert_eq!(outcome.rounds.len(), 1);
    assert_eq!(pool.labeled_indices(), vec![8, 9]);
}

#[test]
fn tied_uncertainty_promotes_lowest_indices() {
    let mut pool = LabeledPool::new(synthetic_dataset(8));
    pool.promote(&[0, 2]).unwrap();
    let mut model = certain_model(1);
    let mut strategy = TurnScoringStrategy::uncertainty(Aggregation::Max, None).unwrap();

    let outcome = driver(settings(0, 3, 1))
        .run(&mut pool, &test_split(), &mut model, &mut strategy)
        .unwrap();

    assert_eq!(outcome.rounds[1].selected, vec![1, 3, 4]);
}

#[test]
fn stops_when_only_turnless_dialogues_remain() {
    let dataset: DialogueDataset = [
        keyed_dialogue("a", 1),
        keyed_dialogue("", 0),
        keyed_dialogue("", 0),
    ]
    .into_iter()
    .collect();
    let mut pool = LabeledPool::new(dataset);
    pool.promote(&[0]).unwrap();
    let mut model = certain_model(1);
    let mut strategy = TurnScoringStrategy::uncertainty(Aggregation::Max, None).unwrap();

    let outcome = driver(settings(0, 1, 5))
        .run(&mut pool, &test_split(), &mut model, &mut strategy)
        .unwrap();

    assert_eq!(outcome.rounds.len(), 1);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(model.train_sizes, vec![1]);
    assert_eq!(pool.unlabeled_count(), 2);
}

#[test]
fn evaluation_failure_aborts_the_run() {
    let mut pool = LabeledPool::new(synthetic_dataset(5));
    // No fallback: the test split has no probabilities.
    let mut model = StubModel::new(1);
    let mut strategy = RandomSampling::new(0);

    let err = driver(settings(2, 1, 1))
        .run(&mut pool, &test_split(), &mut model, &mut strategy)
        .unwrap_err();

    assert!(matches!(
        err,
        TurnwiseError::ModelError(ModelError::PredictionFailed { .. })
    ));
    assert_eq!(model.train_sizes, vec![2]);
}

// ── Passive baseline ─────────────────────────────────────────────────────

#[test]
fn passive_trains_once_on_the_subsampled_split() {
    let corpus = Corpus::new(synthetic_dataset(10), test_split());
    let mut model = certain_model(2);
    let passive = PassiveLearning::new(RunContext::new("SWDA", "Passive", 0), 0.55);

    let records = passive.run(&corpus, &mut model).unwrap();

    assert_eq!(model.train_sizes, vec![5]);
    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.round, 0);
        assert_eq!(record.labeled_count, 5);
        assert_eq!(record.run_id, passive.context().run_id);
    }
}

// ── Config-driven entry points ───────────────────────────────────────────

fn config_for(dir: &std::path::Path, strategy: &str) -> TurnwiseConfig {
    let mut config = TurnwiseConfig::default();
    config.experiment.dataset_name = "DYDA".to_string();
    config.experiment.dataset_dir = dir.display().to_string();
    config.experiment.n_epoch = 1;
    config.experiment.fraction = 1.0;
    config.active_learning.strategy = strategy.to_string();
    config.active_learning.n_init_labeled = 2;
    config.active_learning.n_query = 2;
    config.active_learning.n_round = 2;
    config
}

#[test]
fn unknown_strategy_fails_before_training() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "CoreSet");
    let corpus = Corpus::new(synthetic_dataset(6), test_split());
    let mut model = certain_model(1);

    let err = run_active(&config, &corpus, &mut model).unwrap_err();

    assert!(matches!(err, TurnwiseError::NotImplemented { .. }));
    assert!(model.train_sizes.is_empty());
}

#[test]
fn run_active_writes_records_as_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("records.jsonl");
    let mut config = config_for(dir.path(), "TurnEntropy");
    config.experiment.output_path = Some(output.display().to_string());
    let corpus = Corpus::new(synthetic_dataset(8), test_split());
    let mut model = certain_model(1);

    let outcome = run_active(&config, &corpus, &mut model).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let written: Vec<ExperimentRecord> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let key = |r: &ExperimentRecord| (r.run_id, r.round, r.epoch, r.labeled_count);
    assert_eq!(
        written.iter().map(key).collect::<Vec<_>>(),
        outcome.records.iter().map(key).collect::<Vec<_>>()
    );
    assert!(written.iter().all(|r| r.strategy == "MaxTurnEntropy"));
}

#[test]
fn run_passive_uses_configured_dataset_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), "RandomSampling");
    let corpus = Corpus::new(synthetic_dataset(4), test_split());
    let mut model = certain_model(1);

    let records = run_passive(&config, &corpus, &mut model).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].dataset, "DYDA");
    assert_eq!(records[0].strategy, "Passive");
}

#[test]
fn configured_epochs_reach_the_adapter() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path(), "RandomSampling");
    config.experiment.n_epoch = 3;
    let corpus = Corpus::new(synthetic_dataset(4), test_split());
    let settings = config.adapter_settings().unwrap();
    let mut model = StubModel::from_settings(&settings).with_uniform_fallback(1);

    let records = run_passive(&config, &corpus, &mut model).unwrap();

    let epochs: Vec<usize> = records.iter().map(|r| r.epoch).collect();
    assert_eq!(epochs, vec![0, 1, 2]);
}

#[test]
fn load_corpus_reads_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let json = r#"{
        "train": [{"turns": ["hi", "hello"], "labels": [0, 1]}],
        "test": [{"turns": ["bye"], "labels": [2]}]
    }"#;
    std::fs::write(dir.path().join("dyda_da.json"), json).unwrap();
    let config = config_for(dir.path(), "RandomSampling");

    let corpus = load_corpus(&config).unwrap();

    assert_eq!(corpus.train.len(), 1);
    assert_eq!(corpus.test.flat_labels(), vec![2]);
}
