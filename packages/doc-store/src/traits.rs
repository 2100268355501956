//! The document store seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;

/// A store holding exactly one JSON document, read and written whole.
///
/// There is no versioning or compare-and-swap: a `replace` unconditionally
/// overwrites whatever is stored, so two interleaved read-modify-write cycles
/// lose the first writer's change.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the whole document.
    async fn fetch(&self) -> Result<Value, Error>;

    /// Overwrite the whole document.
    async fn replace(&self, document: &Value) -> Result<(), Error>;
}
