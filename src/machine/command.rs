//! Scene commands and tap events.
//!
//! The machine communicates with the outside world through two vocabularies:
//! `SceneCommand`, the imperative contract the render layer must honor, and
//! `TapEvent`, the classification of what an input did to the game state.
//! Every call into the machine yields a `StepOutput` carrying both.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ContentId, SlotId};

/// Suggested flip animation duration, in milliseconds.
///
/// The scene layer owns animation timing; this matches the original game's
/// quarter-second ease-in-out flip and the mismatch flip-down delay.
pub const FLIP_DURATION_MS: u64 = 250;

/// Command for the external scene/render service.
///
/// The machine emits these; the scene layer must honor each one. Commands
/// are already ordered for presentation (a mismatch flips the second card
/// up before both flip back down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneCommand {
    /// Animate a card to face-up.
    FlipUp(SlotId),
    /// Animate a card to face-down, after the fixed visual delay.
    FlipDown(SlotId),
    /// Remove a matched card from the board.
    Remove(SlotId),
    /// Update the score display.
    ShowScore(u8),
    /// Show the end-of-round banner.
    ShowEndBanner,
    /// Hide the end-of-round banner.
    HideEndBanner,
}

/// Inline buffer for the commands one input can produce.
///
/// The longest burst is a round-winning match: flip-up, two removes, score,
/// and the banner.
pub type CommandBuffer = SmallVec<[SceneCommand; 6]>;

/// What a tap did to the game state.
///
/// Every accepted input produces exactly one of `FlippedUp`, `Matched`, or
/// `Mismatched`. Inputs the machine absorbs (background taps, repeat taps,
/// taps during loading or resolution) are `Ignored`, never an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapEvent {
    /// The input had no effect.
    Ignored,
    /// First card of a pair flipped face-up.
    FlippedUp(SlotId),
    /// Second card matched the first; both removed, score incremented.
    Matched {
        slots: [SlotId; 2],
        content: ContentId,
        score: u8,
    },
    /// Second card did not match; both flip back down.
    Mismatched { slots: [SlotId; 2] },
}

impl TapEvent {
    /// Did this input change the game state?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, TapEvent::Ignored)
    }
}

/// The result of one machine operation: the event classification plus the
/// scene commands it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutput {
    /// What happened.
    pub event: TapEvent,

    /// Commands for the scene layer, in presentation order.
    pub commands: CommandBuffer,
}

impl StepOutput {
    /// An absorbed input: no event, no commands.
    #[must_use]
    pub fn ignored() -> Self {
        Self {
            event: TapEvent::Ignored,
            commands: CommandBuffer::new(),
        }
    }

    /// Build an output from an event and commands.
    #[must_use]
    pub fn new(event: TapEvent, commands: CommandBuffer) -> Self {
        Self { event, commands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_ignored_output_is_empty() {
        let out = StepOutput::ignored();
        assert!(out.event.is_ignored());
        assert!(out.commands.is_empty());
    }

    #[test]
    fn test_command_buffer_stays_inline() {
        let commands: CommandBuffer = smallvec![
            SceneCommand::FlipUp(SlotId::new(1)),
            SceneCommand::Remove(SlotId::new(1)),
            SceneCommand::Remove(SlotId::new(2)),
            SceneCommand::ShowScore(8),
            SceneCommand::ShowEndBanner,
        ];
        assert!(!commands.spilled());
    }

    #[test]
    fn test_event_serialization() {
        let event = TapEvent::Matched {
            slots: [SlotId::new(3), SlotId::new(11)],
            content: ContentId::new(5),
            score: 4,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TapEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
