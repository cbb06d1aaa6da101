//! The boundary with the external scene/render service.
//!
//! The core never renders. Everything visual goes through [`Scene`], every
//! gesture comes in through [`HitTester`], and assets arrive through
//! [`AssetSource`]. [`Session`] wires a [`MatchMachine`] to a `Scene` so an
//! embedder only has to forward taps and animation acknowledgements.

mod hit;
mod recording;
mod session;

pub use hit::{GridHitTester, HitTester};
pub use recording::{RecordingScene, SlotView};
pub use session::Session;

use crate::assets::{AssetBatch, AssetError};
use crate::machine::SceneCommand;

/// The render service the machine drives.
///
/// Implementations must honor every command; ordering within one
/// [`StepOutput`](crate::machine::StepOutput) is presentation order.
pub trait Scene {
    /// Apply one command.
    fn apply(&mut self, command: &SceneCommand);

    /// Apply a batch of commands in order.
    fn apply_all(&mut self, commands: &[SceneCommand]) {
        for command in commands {
            self.apply(command);
        }
    }
}

/// The asset provider for round setup.
///
/// The trait is synchronous; async embedders resolve their future first and
/// deliver the result through the ticket protocol on
/// [`MatchMachine::assets_ready`](crate::machine::MatchMachine::assets_ready).
pub trait AssetSource {
    /// Load one round's batch of paired models and labels.
    fn load(&mut self) -> Result<AssetBatch, AssetError>;
}
