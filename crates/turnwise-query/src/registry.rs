//! Name-based strategy construction.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use turnwise_core::errors::{TurnwiseError, TurnwiseResult};

use crate::aggregation::Aggregation;
use crate::scoring::TurnMeasure;
use crate::strategies::{RandomSampling, TurnScoringStrategy};
use crate::strategy::IQueryStrategy;

/// Every strategy that can be built by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    RandomSampling,
    TurnScoring {
        measure: TurnMeasure,
        aggregation: Aggregation,
    },
}

impl StrategyKind {
    /// All canonical kinds: random sampling plus every measure × aggregation.
    pub fn all() -> Vec<StrategyKind> {
        let mut kinds = vec![Self::RandomSampling];
        for measure in TurnMeasure::ALL {
            for aggregation in Aggregation::ALL {
                kinds.push(Self::TurnScoring {
                    measure,
                    aggregation,
                });
            }
        }
        kinds
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RandomSampling => f.write_str(RandomSampling::NAME),
            Self::TurnScoring {
                measure,
                aggregation,
            } => write!(f, "{aggregation}Turn{measure}"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = TurnwiseError;

    /// Accepts canonical names plus `TurnUncertainty` and `TurnEntropy`,
    /// which select the Max aggregation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TurnUncertainty" => {
                return Ok(Self::TurnScoring {
                    measure: TurnMeasure::Uncertainty,
                    aggregation: Aggregation::Max,
                })
            }
            "TurnEntropy" => {
                return Ok(Self::TurnScoring {
                    measure: TurnMeasure::Entropy,
                    aggregation: Aggregation::Max,
                })
            }
            _ => {}
        }

        Self::all()
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| TurnwiseError::NotImplemented {
                name: format!("strategy {s}"),
            })
    }
}

/// Build a strategy. `seed` drives random sampling; `clipping` applies to
/// turn-scoring strategies only.
pub fn build_strategy(
    kind: StrategyKind,
    clipping: Option<usize>,
    seed: u64,
) -> TurnwiseResult<Box<dyn IQueryStrategy>> {
    let strategy: Box<dyn IQueryStrategy> = match kind {
        StrategyKind::RandomSampling => {
            if clipping.is_some() {
                debug!("clipping has no effect on random sampling");
            }
            Box::new(RandomSampling::new(seed))
        }
        StrategyKind::TurnScoring {
            measure,
            aggregation,
        } => Box::new(TurnScoringStrategy::new(measure, aggregation, clipping)?),
    };
    Ok(strategy)
}

/// Parse `name` and build the strategy. Unknown names fail with
/// [`TurnwiseError::NotImplemented`].
pub fn strategy_from_name(
    name: &str,
    clipping: Option<usize>,
    seed: u64,
) -> TurnwiseResult<Box<dyn IQueryStrategy>> {
    build_strategy(name.parse()?, clipping, seed)
}
