use proptest::prelude::*;
use test_fixtures::{keyed_dialogue, StubModel};
use turnwise_core::DialogueDataset;
use turnwise_pool::LabeledPool;
use turnwise_query::{
    build_strategy, Aggregation, IQueryStrategy, StrategyKind, TurnMeasure, TurnScoringStrategy,
};

fn arb_kind() -> impl Strategy<Value = StrategyKind> {
    prop::sample::select(StrategyKind::all())
}

fn arb_distribution() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..1.0, 2..6).prop_map(|weights| {
        let total: f64 = weights.iter().sum();
        weights.into_iter().map(|w| w / total).collect()
    })
}

/// Pool of dialogues with 1..5 turns each plus a model with random distributions.
fn arb_pool_and_model() -> impl Strategy<Value = (DialogueDataset, StubModel)> {
    prop::collection::vec(prop::collection::vec(arb_distribution(), 1..5), 1..25).prop_map(
        |dialogues| {
            let mut model = StubModel::new(1);
            let dataset = dialogues
                .into_iter()
                .enumerate()
                .map(|(i, probs)| {
                    let key = format!("d{i}");
                    let dialogue = keyed_dialogue(&key, probs.len());
                    model.insert(key, probs);
                    dialogue
                })
                .collect();
            (dataset, model)
        },
    )
}

proptest! {
    #[test]
    fn select_returns_budget_of_distinct_unlabeled(
        (dataset, model) in arb_pool_and_model(),
        kind in arb_kind(),
        init_frac in 0.0f64..1.0,
        n in 0usize..30,
        seed in any::<u64>(),
    ) {
        let mut pool = LabeledPool::new(dataset);
        let init = (pool.len() as f64 * init_frac) as usize;
        pool.initialize_labels(init, seed).unwrap();

        let mut strategy = build_strategy(kind, None, seed).unwrap();
        let selected = strategy.select(&pool, &model, n).unwrap();

        prop_assert_eq!(selected.len(), n.min(pool.unlabeled_count()));
        let mut unique = selected.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), selected.len());
        prop_assert!(selected.iter().all(|&i| !pool.is_labeled(i)));

        pool.promote(&selected).unwrap();
    }

    #[test]
    fn selected_scores_dominate_unselected(
        (dataset, model) in arb_pool_and_model(),
        n in 1usize..10,
        clipping in prop::option::of(1usize..4),
    ) {
        let pool = LabeledPool::new(dataset);
        for measure in TurnMeasure::ALL {
            for aggregation in Aggregation::ALL {
                let mut strategy =
                    TurnScoringStrategy::new(measure, aggregation, clipping).unwrap();
                let selected = strategy.select(&pool, &model, n).unwrap();
                let probs = model_probs(&model, &pool);
                let score = |i: usize| strategy.score_dialogue(&probs[i]).unwrap();

                let worst_selected = selected
                    .iter()
                    .map(|&i| score(i))
                    .fold(f64::INFINITY, f64::min);
                for i in (0..pool.len()).filter(|i| !selected.contains(i)) {
                    prop_assert!(score(i) <= worst_selected);
                }
            }
        }
    }
}

fn model_probs(model: &StubModel, pool: &LabeledPool) -> Vec<Vec<Vec<f64>>> {
    use turnwise_core::IClassifier;
    model.predict_prob(pool.dataset()).unwrap()
}
