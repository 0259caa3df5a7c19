//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `pynico-core` (pure Rust).
//! Implementations live in `pynico-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use pynico_types::{Result, message::Message};

// ─── Chat Port ───────────────────────────────────────────────

/// The remote language model, treated as a black box.
/// Resolves or rejects exactly once per call.
#[async_trait(?Send)]
pub trait ChatPort {
    /// `history` holds the previously confirmed turns only; `text` is the new user turn.
    async fn send_message(&self, history: &[Message], text: &str) -> Result<String>;
}

// ─── Storage Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
