use proptest::prelude::*;
use turnwise_core::{Dialogue, DialogueDataset};
use turnwise_pool::LabeledPool;

fn make_pool(n: usize) -> LabeledPool {
    let dataset: DialogueDataset = (0..n)
        .map(|i| Dialogue::new(vec![format!("d{i}")], vec![0]).unwrap())
        .collect();
    LabeledPool::new(dataset)
}

fn assert_partition(pool: &LabeledPool) -> Result<(), TestCaseError> {
    let labeled = pool.labeled_indices();
    let unlabeled = pool.unlabeled_indices();
    prop_assert_eq!(labeled.len(), pool.labeled_count());
    prop_assert_eq!(unlabeled.len(), pool.unlabeled_count());
    prop_assert_eq!(pool.labeled_count() + pool.unlabeled_count(), pool.len());

    let mut all: Vec<usize> = labeled.into_iter().chain(unlabeled).collect();
    all.sort_unstable();
    prop_assert_eq!(all, (0..pool.len()).collect::<Vec<_>>());
    Ok(())
}

proptest! {
    #[test]
    fn initialize_partitions_pool(n in 0usize..60, frac in 0.0f64..=1.0, seed in any::<u64>()) {
        let num = (n as f64 * frac) as usize;
        let mut pool = make_pool(n);
        pool.initialize_labels(num, seed).unwrap();
        prop_assert_eq!(pool.labeled_count(), num);
        prop_assert_eq!(pool.unlabeled_count(), n - num);
        assert_partition(&pool)?;
    }

    #[test]
    fn initialize_beyond_pool_fails(n in 0usize..30, extra in 1usize..10) {
        let mut pool = make_pool(n);
        prop_assert!(pool.initialize_labels(n + extra, 0).is_err());
        prop_assert_eq!(pool.labeled_count(), 0);
    }

    #[test]
    fn promotions_grow_monotonically(
        n in 1usize..50,
        picks in prop::collection::vec(
            prop::collection::vec(any::<prop::sample::Index>(), 0..5),
            0..10,
        ),
    ) {
        let mut pool = make_pool(n);
        let mut previous = pool.labeled_count();
        for round in picks {
            let unlabeled = pool.unlabeled_indices();
            if unlabeled.is_empty() {
                break;
            }
            let mut chosen: Vec<usize> = round
                .iter()
                .map(|ix| unlabeled[ix.index(unlabeled.len())])
                .collect();
            chosen.sort_unstable();
            chosen.dedup();

            pool.promote(&chosen).unwrap();
            prop_assert_eq!(pool.labeled_count(), previous + chosen.len());
            prop_assert!(pool.labeled_count() >= previous);
            previous = pool.labeled_count();
            assert_partition(&pool)?;
        }
    }

    #[test]
    fn unlabeled_view_maps_locals_to_unlabeled_items(n in 1usize..40, seed in any::<u64>()) {
        let mut pool = make_pool(n);
        pool.initialize_labels(n / 2, seed).unwrap();
        let view = pool.unlabeled_view();
        for (local, (original, dialogue)) in view.iter().enumerate() {
            prop_assert_eq!(view.original_index(local), Some(original));
            prop_assert!(!pool.is_labeled(original));
            prop_assert_eq!(dialogue, &pool.dataset()[original]);
        }
    }
}
