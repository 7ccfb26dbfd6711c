//! Dialogues and ordered dialogue datasets.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::errors::PoolError;

/// Per-turn class distributions of one dialogue: `probs[turn][class]`.
pub type TurnProbabilities = Vec<Vec<f64>>;

/// One conversation: speaker-tagged turns and one dialogue-act label per turn.
///
/// `turns.len() == labels.len()` holds for every value, including deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDialogue")]
pub struct Dialogue {
    turns: Vec<String>,
    labels: Vec<usize>,
}

#[derive(Deserialize)]
struct RawDialogue {
    turns: Vec<String>,
    labels: Vec<usize>,
}

impl TryFrom<RawDialogue> for Dialogue {
    type Error = PoolError;

    fn try_from(raw: RawDialogue) -> Result<Self, Self::Error> {
        Self::new(raw.turns, raw.labels)
    }
}

impl Dialogue {
    pub fn new(turns: Vec<String>, labels: Vec<usize>) -> Result<Self, PoolError> {
        if turns.len() != labels.len() {
            return Err(PoolError::LengthMismatch {
                turns: turns.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { turns, labels })
    }

    pub fn turns(&self) -> &[String] {
        &self.turns
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn num_turns(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Ordered collection of dialogues. Position is the dialogue's identity
/// within the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogueDataset {
    dialogues: Vec<Dialogue>,
}

impl DialogueDataset {
    pub fn new(dialogues: Vec<Dialogue>) -> Self {
        Self { dialogues }
    }

    pub fn len(&self) -> usize {
        self.dialogues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogues.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Dialogue> {
        self.dialogues.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dialogue> {
        self.dialogues.iter()
    }

    pub fn dialogues(&self) -> &[Dialogue] {
        &self.dialogues
    }

    /// New dataset holding the dialogues at `indices`, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Result<Self, PoolError> {
        let dialogues = indices
            .iter()
            .map(|&index| {
                self.dialogues
                    .get(index)
                    .cloned()
                    .ok_or(PoolError::IndexOutOfRange {
                        index,
                        len: self.dialogues.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dialogues })
    }

    /// The first `n` dialogues.
    pub fn head(&self, n: usize) -> Self {
        Self {
            dialogues: self.dialogues.iter().take(n).cloned().collect(),
        }
    }

    /// Number of turns across all dialogues.
    pub fn total_turns(&self) -> usize {
        self.dialogues.iter().map(Dialogue::num_turns).sum()
    }

    /// All turn labels concatenated in dataset order.
    pub fn flat_labels(&self) -> Vec<usize> {
        self.dialogues
            .iter()
            .flat_map(|d| d.labels().iter().copied())
            .collect()
    }
}

impl Index<usize> for DialogueDataset {
    type Output = Dialogue;

    fn index(&self, index: usize) -> &Dialogue {
        &self.dialogues[index]
    }
}

impl FromIterator<Dialogue> for DialogueDataset {
    fn from_iter<I: IntoIterator<Item = Dialogue>>(iter: I) -> Self {
        Self {
            dialogues: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DialogueDataset {
    type Item = &'a Dialogue;
    type IntoIter = std::slice::Iter<'a, Dialogue>;

    fn into_iter(self) -> Self::IntoIter {
        self.dialogues.iter()
    }
}
