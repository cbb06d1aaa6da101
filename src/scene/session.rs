//! Session: a machine wired to a scene.
//!
//! `Session` owns a [`MatchMachine`] and a [`Scene`], forwards every emitted
//! command, and reproduces the original game's input loop: a tap after the
//! end banner starts the next round.

use super::Scene;
use crate::assets::{AssetBatch, AssetError, LoadTicket};
use crate::core::{GameConfig, SlotId};
use crate::machine::{MatchMachine, Phase, StepOutput, TapEvent};

/// A running game bound to a scene implementation.
pub struct Session<S: Scene> {
    machine: MatchMachine,
    scene: S,
}

impl<S: Scene> Session<S> {
    /// Create a session. Call [`start_round`](Self::start_round) to begin.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64, scene: S) -> Self {
        Self {
            machine: MatchMachine::new(config, seed),
            scene,
        }
    }

    /// Start a new round, driving the scene and returning the load ticket.
    pub fn start_round(&mut self) -> LoadTicket {
        let (ticket, output) = self.machine.start_round();
        self.scene.apply_all(&output.commands);
        ticket
    }

    /// Deliver a finished asset load for `ticket`.
    pub fn deliver_assets(
        &mut self,
        ticket: LoadTicket,
        result: Result<AssetBatch, AssetError>,
    ) -> Result<(), AssetError> {
        match result {
            Ok(batch) => {
                self.machine.assets_ready(ticket, &batch)?;
                Ok(())
            }
            Err(error) => {
                self.machine.load_failed(ticket, &error);
                Err(error)
            }
        }
    }

    /// Handle a resolved tap.
    ///
    /// `hit` is the slot under the tap, or `None` for background. When the
    /// round is complete any tap restarts, and the new round's load ticket
    /// is returned alongside the output.
    pub fn tap(&mut self, hit: Option<SlotId>) -> (TapEvent, Option<LoadTicket>) {
        if self.machine.phase() == Phase::RoundComplete {
            if let Some((ticket, output)) = self.machine.play_again() {
                self.scene.apply_all(&output.commands);
                return (TapEvent::Ignored, Some(ticket));
            }
        }

        let output: StepOutput = match hit {
            Some(slot) => self.machine.select_card(slot),
            None => StepOutput::ignored(),
        };
        self.scene.apply_all(&output.commands);
        (output.event, None)
    }

    /// Forward the mismatch flip-down acknowledgement.
    pub fn flip_down_complete(&mut self) {
        self.machine.flip_down_complete();
    }

    /// The underlying machine.
    #[must_use]
    pub fn machine(&self) -> &MatchMachine {
        &self.machine
    }

    /// The bound scene.
    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }
}
