//! Slot identification.
//!
//! Every card position on the board has a `SlotId`. Slots are purely
//! positional: the same slot exists across rounds, but the content it hides
//! changes every deal. Matching is decided by revealed content, never by
//! slot identity.
//!
//! ## Layout
//!
//! Slots are numbered row-major over a grid with a configured column count:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::SlotId;
//!
//! let slot = SlotId::new(6);
//! assert_eq!(slot.row(4), 1);
//! assert_eq!(slot.column(4), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Positional identifier for a card slot on the board.
///
/// Valid slots are `0..slot_count` for the configured board. The core does
/// not interpret slot positions beyond grid arithmetic; screen-space layout
/// belongs to the scene layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u8);

impl SlotId {
    /// Create a slot ID from a raw index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Grid row for a board with the given column count.
    #[must_use]
    pub const fn row(self, columns: u8) -> u8 {
        self.0 / columns
    }

    /// Grid column for a board with the given column count.
    #[must_use]
    pub const fn column(self, columns: u8) -> u8 {
        self.0 % columns
    }

    /// Iterate over all slot IDs for a board of the given size.
    pub fn all(slot_count: usize) -> impl Iterator<Item = SlotId> {
        (0..slot_count as u8).map(SlotId)
    }
}

impl From<u8> for SlotId {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}
