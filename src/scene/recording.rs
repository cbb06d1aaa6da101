//! A scene that mirrors commands into queryable state.
//!
//! `RecordingScene` keeps both a raw command log and the visual state the
//! commands imply. It backs the crate's tests and gives embedders a
//! reference for what honoring the command contract means.

use rustc_hash::FxHashMap;

use super::Scene;
use crate::core::SlotId;
use crate::machine::SceneCommand;

/// What a slot looks like to the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotView {
    /// Is the card showing its content?
    pub face_up: bool,
    /// Has the card been removed from the board?
    pub removed: bool,
}

/// Scene implementation that records commands and mirrors their effect.
#[derive(Clone, Debug, Default)]
pub struct RecordingScene {
    log: Vec<SceneCommand>,
    slots: FxHashMap<SlotId, SlotView>,
    score: u8,
    banner_visible: bool,
}

impl RecordingScene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command applied so far, in order.
    #[must_use]
    pub fn log(&self) -> &[SceneCommand] {
        &self.log
    }

    /// The mirrored view of a slot.
    #[must_use]
    pub fn slot(&self, slot: SlotId) -> SlotView {
        self.slots.get(&slot).copied().unwrap_or_default()
    }

    /// The last score shown.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Is the end banner showing?
    #[must_use]
    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    /// Clear the command log, keeping the mirrored state.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl Scene for RecordingScene {
    fn apply(&mut self, command: &SceneCommand) {
        self.log.push(*command);

        match *command {
            SceneCommand::FlipUp(slot) => {
                self.slots.entry(slot).or_default().face_up = true;
            }
            SceneCommand::FlipDown(slot) => {
                self.slots.entry(slot).or_default().face_up = false;
            }
            SceneCommand::Remove(slot) => {
                let view = self.slots.entry(slot).or_default();
                view.removed = true;
                view.face_up = false;
            }
            SceneCommand::ShowScore(score) => {
                self.score = score;
            }
            SceneCommand::ShowEndBanner => {
                self.banner_visible = true;
            }
            SceneCommand::HideEndBanner => {
                self.banner_visible = false;
            }
        }
    }
}
