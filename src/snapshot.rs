//! Machine snapshots: full state capture and restore.
//!
//! A snapshot carries everything needed to resume a game mid-round,
//! including the RNG word position, so a restored machine deals future
//! rounds identically to the original. Byte encoding goes through
//! `bincode`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameConfig, GameRng, RngState, SlotId};
use crate::machine::{MatchMachine, Phase, TapRecord};
use crate::round::Round;

/// Serializable machine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    /// Board configuration.
    pub config: GameConfig,
    /// The round in progress.
    pub round: Round,
    /// Machine phase.
    pub phase: Phase,
    /// Selected slots, oldest first.
    pub selection: SmallVec<[SlotId; 2]>,
    /// RNG state.
    pub rng: RngState,
    /// Tap history.
    pub history: Vector<TapRecord>,
    /// Next tap sequence number.
    pub sequence: u32,
}

impl MachineSnapshot {
    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl MatchMachine {
    /// Capture the complete machine state.
    #[must_use]
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            config: self.config,
            round: self.round.clone(),
            phase: self.phase,
            selection: self.selection.clone(),
            rng: self.rng.state(),
            history: self.history.clone(),
            sequence: self.sequence,
        }
    }

    /// Rebuild a machine from a snapshot.
    #[must_use]
    pub fn restore(snapshot: MachineSnapshot) -> Self {
        Self {
            config: snapshot.config,
            round: snapshot.round,
            phase: snapshot.phase,
            selection: snapshot.selection,
            rng: GameRng::from_state(&snapshot.rng),
            history: snapshot.history,
            sequence: snapshot.sequence,
        }
    }
}
