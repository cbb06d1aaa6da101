//! Asset batches and the load-ticket protocol.
//!
//! The engine never touches model files. Rounds are populated from an
//! `AssetBatch` delivered by the embedder against a `LoadTicket`.

pub mod batch;
pub mod loader;

pub use batch::{AssetBatch, ModelHandle, DEFAULT_LABELS};
pub use loader::{AssetError, LoadTicket};
