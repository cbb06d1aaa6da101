//! Content identification.
//!
//! A `ContentId` names one of the paired items a card can reveal: an opaque
//! 3D model plus its word label. Each round assigns every content ID to
//! exactly two slots. Content IDs index into the round's `AssetBatch` in
//! load order, which is independent of display order.

use serde::{Deserialize, Serialize};

/// Identifier for one of the paired content items.
///
/// Valid contents are `0..pair_count`. Two cards revealing the same
/// `ContentId` are a match; this is the only match criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(pub u8);

impl ContentId {
    /// Create a content ID from a raw index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over all content IDs for a board with the given pair count.
    pub fn all(pair_count: usize) -> impl Iterator<Item = ContentId> {
        (0..pair_count as u8).map(ContentId)
    }
}

impl From<u8> for ContentId {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Content({})", self.0)
    }
}
