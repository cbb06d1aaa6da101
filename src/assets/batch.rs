//! Asset batches: the content a round reveals.
//!
//! The core never loads 3D models itself. The embedding application loads
//! them (usually asynchronously) and hands the result over as an
//! `AssetBatch`: one opaque model handle and one word label per content
//! index, in content order. Display order is decided by the deal, not by
//! the batch.

use serde::{Deserialize, Serialize};

use super::loader::AssetError;

/// The word labels shipped with the original game, in content order.
///
/// Embedders are free to supply their own labels; these are provided so a
/// default round can be assembled without any external word list.
pub const DEFAULT_LABELS: [&str; 8] = [
    "karaka",
    "pēre",
    "kaputī",
    "waka rererangi",
    "kitā",
    "uka",
    "hautai",
    "pouaka whakaata",
];

/// Opaque handle to a loaded 3D model.
///
/// The core stores and compares handles but never interprets them; the
/// scene layer maps them back to whatever its renderer loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelHandle(pub u32);

impl ModelHandle {
    /// Create a model handle from a raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Model({})", self.0)
    }
}

/// One round's worth of loaded content: `pair_count` models and labels,
/// both indexed by `ContentId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBatch {
    /// Model handles in content order.
    pub models: Vec<ModelHandle>,

    /// Word labels in content order.
    pub labels: Vec<String>,
}

impl AssetBatch {
    /// Create a batch from models and labels.
    #[must_use]
    pub fn new(models: Vec<ModelHandle>, labels: Vec<String>) -> Self {
        Self { models, labels }
    }

    /// Build the default 8-pair batch with sequential handles and the
    /// original word labels.
    #[must_use]
    pub fn with_default_labels() -> Self {
        Self {
            models: (0..DEFAULT_LABELS.len() as u32).map(ModelHandle).collect(),
            labels: DEFAULT_LABELS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Check that the batch carries exactly `pair_count` models and labels.
    pub fn validate(&self, pair_count: u8) -> Result<(), AssetError> {
        let expected = pair_count as usize;
        if self.models.len() != expected || self.labels.len() != expected {
            return Err(AssetError::WrongArity {
                models: self.models.len(),
                labels: self.labels.len(),
                expected,
            });
        }
        Ok(())
    }

    /// Number of content pairs in this batch.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.models.len()
    }
}
