//! The match state machine and its output vocabulary.

pub mod command;
pub mod game;
pub mod history;

pub use command::{CommandBuffer, SceneCommand, StepOutput, TapEvent, FLIP_DURATION_MS};
pub use game::{MatchMachine, Phase};
pub use history::TapRecord;
