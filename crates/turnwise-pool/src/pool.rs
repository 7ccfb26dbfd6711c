//! LabeledPool: fixed sample pool plus a monotonically growing labeled mask.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use turnwise_core::errors::PoolError;
use turnwise_core::DialogueDataset;

use crate::view::IndexView;

/// Sample pool with labeled/unlabeled bookkeeping.
///
/// Pool order is fixed at construction, so an index identifies the same
/// dialogue for the lifetime of the pool. Labels are never removed.
#[derive(Debug, Clone)]
pub struct LabeledPool {
    dataset: DialogueDataset,
    labeled: Vec<bool>,
    labeled_count: usize,
}

impl LabeledPool {
    /// Create a pool with every item unlabeled.
    pub fn new(dataset: DialogueDataset) -> Self {
        let labeled = vec![false; dataset.len()];
        Self {
            dataset,
            labeled,
            labeled_count: 0,
        }
    }

    /// Total pool size.
    pub fn len(&self) -> usize {
        self.labeled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labeled.is_empty()
    }

    pub fn labeled_count(&self) -> usize {
        self.labeled_count
    }

    pub fn unlabeled_count(&self) -> usize {
        self.len() - self.labeled_count
    }

    /// Whether `index` is labeled. Out-of-range indices are never labeled.
    pub fn is_labeled(&self, index: usize) -> bool {
        self.labeled.get(index).copied().unwrap_or(false)
    }

    /// The full pool dataset.
    pub fn dataset(&self) -> &DialogueDataset {
        &self.dataset
    }

    /// Copy of the labeled mask.
    pub fn training_mask(&self) -> Vec<bool> {
        self.labeled.clone()
    }

    /// Label `num` items drawn uniformly without replacement.
    ///
    /// The draw is a seeded shuffle of `0..len`, so the same seed always
    /// labels the same items. Fails without mutating when `num` exceeds the
    /// pool or when labels already exist.
    pub fn initialize_labels(&mut self, num: usize, seed: u64) -> Result<(), PoolError> {
        if num > self.len() {
            return Err(PoolError::InsufficientPool {
                requested: num,
                available: self.len(),
            });
        }
        if self.labeled_count > 0 {
            return Err(PoolError::AlreadyInitialized {
                labeled: self.labeled_count,
            });
        }

        let mut order: Vec<usize> = (0..self.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        for &index in &order[..num] {
            self.labeled[index] = true;
        }
        self.labeled_count = num;

        info!(
            labeled = num,
            pool_size = self.len(),
            seed,
            "initialized labeled pool"
        );
        Ok(())
    }

    /// Mark `indices` as labeled.
    ///
    /// Every index is checked before any is applied: out-of-range, already
    /// labeled, or repeated indices reject the whole call.
    pub fn promote(&mut self, indices: &[usize]) -> Result<(), PoolError> {
        let mut seen = HashSet::with_capacity(indices.len());
        for &index in indices {
            if index >= self.len() {
                return Err(PoolError::IndexOutOfRange {
                    index,
                    len: self.len(),
                });
            }
            if self.labeled[index] {
                return Err(PoolError::AlreadyLabeled { index });
            }
            if !seen.insert(index) {
                return Err(PoolError::DuplicateIndex { index });
            }
        }

        for &index in indices {
            self.labeled[index] = true;
        }
        self.labeled_count += indices.len();

        debug!(
            promoted = indices.len(),
            labeled = self.labeled_count,
            unlabeled = self.unlabeled_count(),
            "promoted items to labeled"
        );
        Ok(())
    }

    /// Labeled pool indices, ascending.
    pub fn labeled_indices(&self) -> Vec<usize> {
        self.indices_where(true)
    }

    /// Unlabeled pool indices, ascending.
    pub fn unlabeled_indices(&self) -> Vec<usize> {
        self.indices_where(false)
    }

    /// View over the labeled items.
    pub fn labeled_view(&self) -> IndexView {
        self.view_where(true)
    }

    /// View over the unlabeled items.
    pub fn unlabeled_view(&self) -> IndexView {
        self.view_where(false)
    }

    fn indices_where(&self, labeled: bool) -> Vec<usize> {
        self.labeled
            .iter()
            .enumerate()
            .filter(|&(_, &is_labeled)| is_labeled == labeled)
            .map(|(index, _)| index)
            .collect()
    }

    fn view_where(&self, labeled: bool) -> IndexView {
        let indices = self.indices_where(labeled);
        let dataset = indices.iter().map(|&i| self.dataset[i].clone()).collect();
        IndexView::new(indices, dataset)
    }
}
