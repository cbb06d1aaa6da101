//! Load tickets and asset failures.
//!
//! Asset loading happens outside the core, usually asynchronously. The
//! machine hands out a `LoadTicket` when a round starts; the caller performs
//! the load and delivers the result back together with the ticket. A ticket
//! whose generation is no longer current belongs to a superseded round and
//! its result is silently discarded, which guarantees at most one live load
//! per round.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ticket identifying one round's asset load.
///
/// Issued by `MatchMachine::start_round`. Deliver it back with the load
/// result; a stale ticket (older generation) is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    /// Round generation this load belongs to.
    pub generation: u64,
}

impl LoadTicket {
    /// Create a ticket for the given round generation.
    #[must_use]
    pub const fn new(generation: u64) -> Self {
        Self { generation }
    }
}

impl std::fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoadTicket(gen {})", self.generation)
    }
}

/// Asset loading failures, the game's only externally visible error.
///
/// Policy on failure: surface to the caller and leave the round
/// unpopulated. No automatic retry, no panic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AssetError {
    /// The batch does not carry exactly `pair_count` models and labels.
    #[error("asset batch has {models} models and {labels} labels, expected {expected} of each")]
    WrongArity {
        models: usize,
        labels: usize,
        expected: usize,
    },

    /// The external load itself failed.
    #[error("asset load failed: {0}")]
    LoadFailed(String),
}
