//! Tap history for replay and debugging.
//!
//! Every accepted input is recorded. The history lives in an `im::Vector`
//! so cloning a machine mid-game is O(1).

use serde::{Deserialize, Serialize};

use super::command::TapEvent;
use crate::core::SlotId;

/// A recorded input with enough context to replay a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapRecord {
    /// The slot that was tapped.
    pub slot: SlotId,

    /// What the tap did.
    pub event: TapEvent,

    /// Round generation the tap belongs to.
    pub generation: u64,

    /// Sequence number within the round (for ordering).
    pub sequence: u32,
}

impl TapRecord {
    /// Create a new tap record.
    #[must_use]
    pub fn new(slot: SlotId, event: TapEvent, generation: u64, sequence: u32) -> Self {
        Self {
            slot,
            event,
            generation,
            sequence,
        }
    }
}
