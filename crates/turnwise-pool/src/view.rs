//! Read-only projection of the pool through the labeled mask.

use turnwise_core::errors::PoolError;
use turnwise_core::{Dialogue, DialogueDataset};

/// Original pool indices paired with the dialogues they identify.
///
/// Local position `i` in [`dataset`](Self::dataset) is pool item
/// `original_indices[i]`. Original indices are strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexView {
    original_indices: Vec<usize>,
    dataset: DialogueDataset,
}

impl IndexView {
    pub(crate) fn new(original_indices: Vec<usize>, dataset: DialogueDataset) -> Self {
        debug_assert_eq!(original_indices.len(), dataset.len());
        Self {
            original_indices,
            dataset,
        }
    }

    pub fn original_indices(&self) -> &[usize] {
        &self.original_indices
    }

    pub fn dataset(&self) -> &DialogueDataset {
        &self.dataset
    }

    pub fn len(&self) -> usize {
        self.original_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original_indices.is_empty()
    }

    /// Pool index of the dialogue at `local`.
    pub fn original_index(&self, local: usize) -> Option<usize> {
        self.original_indices.get(local).copied()
    }

    /// Translate local positions into pool indices, preserving order.
    pub fn to_original(&self, locals: &[usize]) -> Result<Vec<usize>, PoolError> {
        locals
            .iter()
            .map(|&local| {
                self.original_index(local)
                    .ok_or(PoolError::LocalIndexOutOfRange {
                        local,
                        len: self.len(),
                    })
            })
            .collect()
    }

    /// `(original_index, dialogue)` pairs in pool order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Dialogue)> {
        self.original_indices
            .iter()
            .copied()
            .zip(self.dataset.iter())
    }
}
