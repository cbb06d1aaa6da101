//! # memory-match
//!
//! Platform-independent core for a memory (concentration) pair-matching
//! game: `2 * pair_count` face-down cards on a grid, taps flip cards,
//! matching pairs are removed and score increments, the round ends when
//! every pair has been found.
//!
//! ## Design Principles
//!
//! 1. **Rendering Stays Outside**: The core emits [`SceneCommand`]s and
//!    consumes resolved taps. Scene graphs, animation, and 3D hit testing
//!    belong to the embedding application behind the `scene` traits.
//!
//! 2. **Match On Content, Not Slot**: Slots are reused across rounds;
//!    revealed content identity is the only match criterion.
//!
//! 3. **Explicit State Over Inference**: Round completion is a flag derived
//!    from the score, never inferred from what happens to be rendered.
//!
//! 4. **Deterministic Deals**: All randomness flows through a seeded
//!    ChaCha8 RNG, so a seed plus a tap sequence reproduces a game exactly.
//!
//! ## Asset Loading
//!
//! Rounds are populated from an externally loaded [`AssetBatch`]. Starting
//! a round hands out a [`LoadTicket`]; results delivered against a
//! superseded ticket are discarded, which keeps at most one load live per
//! round. Until delivery the machine sits in `Loading` and ignores taps.
//!
//! ## Modules
//!
//! - `core`: Slot and content IDs, RNG, board configuration
//! - `assets`: Asset batches, load tickets, the asset error
//! - `round`: Cards, the board, the deal
//! - `machine`: The match state machine and its command vocabulary
//! - `scene`: Boundary traits and a session glue layer
//! - `snapshot`: Full state capture and restore

pub mod assets;
pub mod core;
pub mod machine;
pub mod round;
pub mod scene;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{ContentId, GameConfig, GameRng, RngState, SlotId};

pub use crate::assets::{AssetBatch, AssetError, LoadTicket, ModelHandle, DEFAULT_LABELS};

pub use crate::round::{Card, Round};

pub use crate::machine::{
    CommandBuffer, MatchMachine, Phase, SceneCommand, StepOutput, TapEvent, TapRecord,
    FLIP_DURATION_MS,
};

pub use crate::scene::{
    AssetSource, GridHitTester, HitTester, RecordingScene, Scene, Session, SlotView,
};

pub use crate::snapshot::MachineSnapshot;
