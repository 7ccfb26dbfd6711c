//! # turnwise-pool
//!
//! Tracks which dialogues of a fixed sample pool are labeled.
//!
//! The labeled mask only ever grows: items are labeled by a seeded random
//! initialization and then by strategy-driven promotion. Callers never touch
//! the mask directly; they read [`IndexView`]s, which pair original pool
//! indices with the filtered dataset so a selection made against a view can be
//! translated back to pool indices.

pub mod corpus;
pub mod pool;
pub mod view;

pub use corpus::Corpus;
pub use pool::LabeledPool;
pub use view::IndexView;
