//! Round state: the board, the score, and the deal.
//!
//! A `Round` owns the cards for one play-through. It starts unpopulated;
//! `deal` assigns every content index to exactly two slots via a uniform
//! shuffle once the round's assets have arrived.
//!
//! Round completion is an explicit `finished` flag derived from
//! `score == pair_count`, never inferred from what the scene happens to be
//! rendering.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{ContentId, GameConfig, GameRng, SlotId};

/// One play-through from deal to last pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Cards indexed by slot.
    cards: Vec<Card>,

    /// Confirmed matches so far, `0..=pair_count`.
    score: u8,

    /// True once every pair has been found.
    finished: bool,

    /// Monotonic round counter, used to match load tickets to rounds.
    generation: u64,
}

impl Round {
    /// Create an unpopulated round for the given board and generation.
    #[must_use]
    pub fn new(config: &GameConfig, generation: u64) -> Self {
        Self {
            cards: vec![Card::empty(); config.slot_count()],
            score: 0,
            finished: false,
            generation,
        }
    }

    /// Populate the board: duplicate every content index once and assign
    /// the resulting `2 * pair_count` contents to slots with a uniform
    /// shuffle. All cards end face-down and on the board.
    pub fn deal(&mut self, config: &GameConfig, rng: &mut GameRng) {
        let mut contents: Vec<ContentId> = ContentId::all(config.pair_count as usize)
            .flat_map(|c| [c, c])
            .collect();
        rng.shuffle(&mut contents);

        self.cards.clear();
        self.cards.extend(contents.into_iter().map(Card::holding));
        self.score = 0;
        self.finished = false;
    }

    /// Slot count of this round's board.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.cards.len()
    }

    /// Round generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Has the board been populated by a deal?
    #[must_use]
    pub fn is_dealt(&self) -> bool {
        self.cards.iter().all(|c| c.content.is_some())
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Get the card in a slot, if the slot is on this board.
    #[must_use]
    pub fn card(&self, slot: SlotId) -> Option<&Card> {
        self.cards.get(slot.raw() as usize)
    }

    /// Get a mutable card in a slot.
    pub fn card_mut(&mut self, slot: SlotId) -> Option<&mut Card> {
        self.cards.get_mut(slot.raw() as usize)
    }

    /// The content a slot holds, if populated.
    #[must_use]
    pub fn content_at(&self, slot: SlotId) -> Option<ContentId> {
        self.card(slot).and_then(|c| c.content)
    }

    /// Number of cards still on the board.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.iter().filter(|c| !c.removed).count()
    }

    /// Confirm a match: remove both cards and increment the score.
    ///
    /// Marks the round finished when the score reaches `pair_count`.
    pub fn confirm_match(&mut self, config: &GameConfig, a: SlotId, b: SlotId) -> u8 {
        for slot in [a, b] {
            if let Some(card) = self.card_mut(slot) {
                card.removed = true;
                card.face_up = false;
            }
        }
        self.score += 1;
        self.finished = self.score == config.pair_count;
        self.score
    }

    /// Iterate over `(slot, card)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (SlotId::new(i as u8), card))
    }
}
