//! Card state.
//!
//! A card is one face-down slot on the board. Until the round's assets
//! arrive the card is unpopulated (`content == None`); an unpopulated card
//! absorbs taps without effect.

use serde::{Deserialize, Serialize};

use crate::core::ContentId;

/// Runtime state of a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The content this card reveals when flipped. `None` until the deal
    /// populates the board.
    pub content: Option<ContentId>,

    /// Is the card currently face-up?
    pub face_up: bool,

    /// Has the card been removed after a confirmed match?
    pub removed: bool,
}

impl Card {
    /// Create an unpopulated face-down card.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            content: None,
            face_up: false,
            removed: false,
        }
    }

    /// Create a face-down card holding the given content.
    #[must_use]
    pub const fn holding(content: ContentId) -> Self {
        Self {
            content: Some(content),
            face_up: false,
            removed: false,
        }
    }

    /// Can this card be selected right now?
    ///
    /// A card is selectable when it is populated, still on the board, and
    /// face-down. Face-up covers the already-selected card, so a repeat tap
    /// on the sole selected slot is rejected here.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.content.is_some() && !self.removed && !self.face_up
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::empty()
    }
}
