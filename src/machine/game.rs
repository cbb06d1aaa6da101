//! The match state machine.
//!
//! `MatchMachine` is the tap-handler core: it tracks the current selection
//! (zero, one, or two cards), resolves a second selection immediately by
//! comparing revealed content, and emits scene commands for the render
//! layer to honor. Inputs arrive serially and are processed to completion;
//! anything that cannot be acted on is absorbed as `TapEvent::Ignored`,
//! never an error.
//!
//! ## Phases
//!
//! ```text
//! start_round        -> Loading
//! assets_ready       -> Idle
//! select_card        -> OneSelected
//! select_card again  -> Idle (match), RoundComplete (last match),
//!                       or Resolving (mismatch)
//! flip_down_complete -> Idle
//! ```
//!
//! A match resolves synchronously; `Resolving` only exists while a
//! mismatch's flip-down animation is pending acknowledgement. During
//! `Loading` the board is unpopulated and taps are ignored (the readiness
//! gate for the external asset load).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, warn};

use super::command::{CommandBuffer, SceneCommand, StepOutput, TapEvent};
use super::history::TapRecord;
use crate::assets::{AssetBatch, AssetError, LoadTicket};
use crate::core::{GameConfig, GameRng, SlotId};
use crate::round::Round;

/// Machine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the round's assets; taps are ignored.
    Loading,
    /// No cards selected.
    Idle,
    /// One card face-up, awaiting its partner.
    OneSelected,
    /// Mismatch flip-down pending acknowledgement; taps are ignored.
    Resolving,
    /// All pairs found; the end banner is showing.
    RoundComplete,
}

/// The match state machine for one game.
///
/// Owns the round, the deal RNG, and the tap history. All rendering is
/// delegated to the scene layer via the emitted [`SceneCommand`]s.
#[derive(Clone, Debug)]
pub struct MatchMachine {
    pub(crate) config: GameConfig,
    pub(crate) round: Round,
    pub(crate) phase: Phase,
    pub(crate) selection: SmallVec<[SlotId; 2]>,
    pub(crate) rng: GameRng,
    pub(crate) history: Vector<TapRecord>,
    pub(crate) sequence: u32,
}

impl MatchMachine {
    /// Create a machine with an unpopulated board.
    ///
    /// Call [`start_round`](Self::start_round) to begin play; the machine
    /// stays in `Loading` and ignores taps until then.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            round: Round::new(&config, 0),
            phase: Phase::Loading,
            selection: SmallVec::new(),
            rng: GameRng::new(seed),
            history: Vector::new(),
            sequence: 0,
        }
    }

    // === Round lifecycle ===

    /// Start a new round.
    ///
    /// Resets the score, replaces the board with unpopulated face-down
    /// cards, and enters `Loading`. The returned [`LoadTicket`] must
    /// accompany the asset delivery; starting another round before the
    /// load finishes supersedes the ticket and its result is discarded.
    pub fn start_round(&mut self) -> (LoadTicket, StepOutput) {
        let generation = self.round.generation() + 1;

        let mut commands = CommandBuffer::new();
        if self.phase == Phase::RoundComplete {
            commands.push(SceneCommand::HideEndBanner);
        }
        commands.push(SceneCommand::ShowScore(0));

        self.round = Round::new(&self.config, generation);
        self.selection.clear();
        self.sequence = 0;
        self.set_phase(Phase::Loading);

        (
            LoadTicket::new(generation),
            StepOutput::new(TapEvent::Ignored, commands),
        )
    }

    /// Deliver the round's assets.
    ///
    /// Deals the board and opens play. Returns `Ok(false)` when the
    /// delivery is stale, either because a newer round has started or
    /// because this round's batch already arrived; the batch is then
    /// discarded without touching the current round.
    pub fn assets_ready(&mut self, ticket: LoadTicket, batch: &AssetBatch) -> Result<bool, AssetError> {
        if self.phase != Phase::Loading {
            debug!(
                ticket = ticket.generation,
                phase = ?self.phase,
                "discarding asset batch for a round already dealt"
            );
            return Ok(false);
        }
        if ticket.generation != self.round.generation() {
            debug!(
                ticket = ticket.generation,
                current = self.round.generation(),
                "discarding superseded asset batch"
            );
            return Ok(false);
        }

        batch.validate(self.config.pair_count)?;

        self.round.deal(&self.config, &mut self.rng);
        self.set_phase(Phase::Idle);
        Ok(true)
    }

    /// Report that the round's asset load failed.
    ///
    /// The round stays unpopulated in `Loading` and no retry is attempted;
    /// the caller decides whether to start another round. Stale deliveries,
    /// including a failure reported after the round was already dealt, are
    /// ignored.
    pub fn load_failed(&mut self, ticket: LoadTicket, error: &AssetError) {
        if self.phase != Phase::Loading || ticket.generation != self.round.generation() {
            debug!(ticket = ticket.generation, "ignoring failure of superseded load");
            return;
        }
        warn!(%error, "asset load failed; round left unpopulated");
    }

    /// Start a new round after a win.
    ///
    /// Only honored in `RoundComplete`; the original game restarts on the
    /// first tap after the end banner appears.
    pub fn play_again(&mut self) -> Option<(LoadTicket, StepOutput)> {
        if self.phase != Phase::RoundComplete {
            return None;
        }
        Some(self.start_round())
    }

    // === Input ===

    /// Handle a tap on a card slot.
    ///
    /// Absorbed without effect when the machine is loading, a mismatch is
    /// resolving, the round is complete, the slot is off the board, or the
    /// card is removed, unpopulated, or already face-up (which covers a
    /// repeat tap on the sole selected card).
    pub fn select_card(&mut self, slot: SlotId) -> StepOutput {
        match self.phase {
            Phase::Loading | Phase::Resolving | Phase::RoundComplete => {
                return StepOutput::ignored()
            }
            Phase::Idle | Phase::OneSelected => {}
        }

        let Some(card) = self.round.card(slot) else {
            return StepOutput::ignored();
        };
        if !card.is_selectable() {
            return StepOutput::ignored();
        }
        let Some(tapped_content) = card.content else {
            return StepOutput::ignored();
        };

        if self.phase == Phase::Idle {
            if let Some(card) = self.round.card_mut(slot) {
                card.face_up = true;
            }
            self.selection.push(slot);
            self.set_phase(Phase::OneSelected);

            let event = TapEvent::FlippedUp(slot);
            self.record(slot, event.clone());
            return StepOutput::new(event, smallvec![SceneCommand::FlipUp(slot)]);
        }

        // Second selection: resolve immediately on revealed content.
        let first = self.selection[0];
        let Some(first_content) = self.round.content_at(first) else {
            return StepOutput::ignored();
        };

        if let Some(card) = self.round.card_mut(slot) {
            card.face_up = true;
        }
        self.selection.push(slot);

        if tapped_content == first_content {
            let score = self.round.confirm_match(&self.config, first, slot);
            self.selection.clear();

            let mut commands: CommandBuffer = smallvec![
                SceneCommand::FlipUp(slot),
                SceneCommand::Remove(first),
                SceneCommand::Remove(slot),
                SceneCommand::ShowScore(score),
            ];

            let event = TapEvent::Matched {
                slots: [first, slot],
                content: tapped_content,
                score,
            };
            self.record(slot, event.clone());

            if self.round.is_finished() {
                commands.push(SceneCommand::ShowEndBanner);
                self.set_phase(Phase::RoundComplete);
            } else {
                self.set_phase(Phase::Idle);
            }

            StepOutput::new(event, commands)
        } else {
            // The scene flips both back down after the fixed visual delay
            // and acknowledges via flip_down_complete.
            let commands: CommandBuffer = smallvec![
                SceneCommand::FlipUp(slot),
                SceneCommand::FlipDown(first),
                SceneCommand::FlipDown(slot),
            ];

            self.set_phase(Phase::Resolving);

            let event = TapEvent::Mismatched {
                slots: [first, slot],
            };
            self.record(slot, event.clone());

            StepOutput::new(event, commands)
        }
    }

    /// Acknowledge that the mismatch flip-down finished.
    ///
    /// Turns both selected cards face-down and returns to `Idle`. No-op
    /// outside `Resolving`.
    pub fn flip_down_complete(&mut self) {
        if self.phase != Phase::Resolving {
            return;
        }

        let slots = std::mem::take(&mut self.selection);
        for slot in slots {
            if let Some(card) = self.round.card_mut(slot) {
                card.face_up = false;
            }
        }
        self.set_phase(Phase::Idle);
    }

    // === Accessors ===

    /// Board configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.round.score()
    }

    /// Currently selected slots, oldest first.
    #[must_use]
    pub fn selection(&self) -> &[SlotId] {
        &self.selection
    }

    /// Tap history across all rounds of this machine.
    #[must_use]
    pub fn history(&self) -> &Vector<TapRecord> {
        &self.history
    }

    // === Internals ===

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "phase transition");
            self.phase = phase;
        }
    }

    fn record(&mut self, slot: SlotId, event: TapEvent) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.history.push_back(TapRecord::new(
            slot,
            event,
            self.round.generation(),
            sequence,
        ));
    }
}
