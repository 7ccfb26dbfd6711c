use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use tracing::debug;

use turnwise_core::errors::TurnwiseResult;
use turnwise_core::IClassifier;
use turnwise_pool::LabeledPool;

use crate::selection::clamp_budget;
use crate::strategy::IQueryStrategy;

/// Uniform sampling without replacement. Never consults the model.
#[derive(Debug, Clone)]
pub struct RandomSampling {
    rng: StdRng,
}

impl RandomSampling {
    pub const NAME: &'static str = "RandomSampling";

    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IQueryStrategy for RandomSampling {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn select(
        &mut self,
        pool: &LabeledPool,
        _model: &dyn IClassifier,
        n: usize,
    ) -> TurnwiseResult<Vec<usize>> {
        let unlabeled = pool.unlabeled_indices();
        let budget = clamp_budget(n, unlabeled.len(), self.name());

        let selected: Vec<usize> = index::sample(&mut self.rng, unlabeled.len(), budget)
            .into_iter()
            .map(|local| unlabeled[local])
            .collect();

        debug!(
            strategy = self.name(),
            selected = selected.len(),
            "random selection"
        );
        Ok(selected)
    }
}
