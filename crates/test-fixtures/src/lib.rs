//! Test fixtures for turnwise: stub model adapters, synthetic pools, and
//! JSON scenario loading.

pub mod model;
pub mod scenario;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use turnwise_core::{Dialogue, DialogueDataset};

pub use model::StubModel;
pub use scenario::Scenario;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Dialogue whose first turn is `key`, followed by `turns - 1` filler turns.
/// `turns == 0` yields an empty dialogue.
pub fn keyed_dialogue(key: &str, turns: usize) -> Dialogue {
    let texts: Vec<String> = (0..turns)
        .map(|t| {
            if t == 0 {
                key.to_string()
            } else {
                format!("{key} [ACTOR{}] turn {t}", t % 2 + 1)
            }
        })
        .collect();
    Dialogue::new(texts, vec![0; turns]).expect("equal lengths")
}

/// `n` single-turn dialogues keyed `d0..d{n-1}`.
pub fn synthetic_dataset(n: usize) -> DialogueDataset {
    (0..n).map(|i| keyed_dialogue(&format!("d{i}"), 1)).collect()
}

/// Three-class distribution whose top class has probability `top`.
///
/// `top` must be at least 1/3 for it to remain the top class.
pub fn distribution_with_top(top: f64) -> Vec<f64> {
    let rest = (1.0 - top) / 2.0;
    vec![top, rest, rest]
}
