mod model;

pub use model::{EpochCallback, EpochSummary, IClassifier, IModelAdapter};
