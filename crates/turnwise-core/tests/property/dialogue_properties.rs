use proptest::prelude::*;
use turnwise_core::{Dialogue, DialogueDataset};

fn arb_dataset() -> impl Strategy<Value = DialogueDataset> {
    prop::collection::vec(0usize..6, 0..20).prop_map(|lengths| {
        lengths
            .into_iter()
            .enumerate()
            .map(|(i, len)| {
                Dialogue::new(
                    (0..len).map(|t| format!("d{i} t{t}")).collect(),
                    (0..len).collect(),
                )
                .unwrap()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn subset_of_all_indices_is_identity(dataset in arb_dataset()) {
        let all: Vec<usize> = (0..dataset.len()).collect();
        prop_assert_eq!(dataset.subset(&all).unwrap(), dataset);
    }

    #[test]
    fn flat_labels_cover_every_turn(dataset in arb_dataset()) {
        prop_assert_eq!(dataset.flat_labels().len(), dataset.total_turns());
    }

    #[test]
    fn mismatched_lengths_never_construct(turns in 0usize..10, labels in 0usize..10) {
        let result = Dialogue::new(vec![String::new(); turns], vec![0; labels]);
        prop_assert_eq!(result.is_ok(), turns == labels);
    }
}
