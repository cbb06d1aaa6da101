//! Game configuration.
//!
//! The board structure is configured at startup rather than hardcoded: the
//! classic game is 8 pairs on a 4-wide grid, but nothing in the core depends
//! on those numbers.

use serde::{Deserialize, Serialize};

/// Board configuration for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of content pairs in a round. The board holds `2 * pair_count`
    /// cards.
    pub pair_count: u8,

    /// Grid column count, used only for slot row/column arithmetic.
    pub columns: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: 8,
            columns: 4,
        }
    }
}

impl GameConfig {
    /// Create a configuration, validating the board dimensions.
    #[must_use]
    pub fn new(pair_count: u8, columns: u8) -> Self {
        assert!(pair_count >= 1, "Must have at least 1 pair");
        assert!(pair_count <= 127, "At most 127 pairs supported");
        assert!(columns >= 1, "Must have at least 1 column");

        Self {
            pair_count,
            columns,
        }
    }

    /// Total number of card slots on the board.
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.pair_count as usize * 2
    }
}
