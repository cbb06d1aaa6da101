//! Core types: slots, contents, RNG, configuration.
//!
//! This module contains the fundamental building blocks the rest of the
//! crate is built on. Board dimensions are configured via `GameConfig`
//! rather than hardcoded.

pub mod config;
pub mod content;
pub mod rng;
pub mod slot;

pub use config::GameConfig;
pub use content::ContentId;
pub use rng::{GameRng, RngState};
pub use slot::SlotId;
