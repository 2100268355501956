//! In-process document store.

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::error::Error;
use crate::traits::DocumentStore;

/// A document store that keeps its single document in memory.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use treefs_doc_store::{DocumentStore, InMemoryDocumentStore};
///
/// let store = InMemoryDocumentStore::new(json!({"count": 1}));
/// store.replace(&json!({"count": 2})).await?;
/// assert_eq!(store.fetch().await?, json!({"count": 2}));
/// ```
pub struct InMemoryDocumentStore {
    document: RwLock<Value>,
}

impl InMemoryDocumentStore {
    pub fn new(document: Value) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }
}

/// A tree with nothing but an empty root folder.
pub fn empty_tree_document() -> Value {
    json!({"root": {"name": "root", "type": "folder", "children": []}})
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new(empty_tree_document())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch(&self) -> Result<Value, Error> {
        Ok(self.document.read().await.clone())
    }

    async fn replace(&self, document: &Value) -> Result<(), Error> {
        *self.document.write().await = document.clone();
        Ok(())
    }
}
