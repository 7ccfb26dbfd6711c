//! Concrete query strategies.

pub mod random;
pub mod turn_scoring;

pub use random::RandomSampling;
pub use turn_scoring::TurnScoringStrategy;
