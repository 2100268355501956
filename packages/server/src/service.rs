//! Read-modify-write of the tree against the document store.
//!
//! Each call fetches the whole document, decodes it, and (for mutations)
//! applies one edit and writes the whole document back. Nothing is held
//! between calls. Concurrent mutations are not serialized: if two requests
//! both fetch before either replaces, the later replace silently drops the
//! earlier change.

use std::sync::Arc;

use serde_json::Value;
use treefs_doc_store::DocumentStore;
use treefs_tree::{Edit, FolderPath, Node, Tree};

use crate::error::ApiError;

#[derive(Clone)]
pub struct FileService {
    store: Arc<dyn DocumentStore>,
}

impl FileService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Tree, ApiError> {
        let raw = self
            .store
            .fetch()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "document store fetch failed"))?;
        treefs_tree::decode(raw).map_err(|e| {
            tracing::warn!(error = %e, "document store returned a malformed tree");
            ApiError::Document(e)
        })
    }

    /// The whole tree, encoded.
    pub async fn list(&self) -> Result<Value, ApiError> {
        Ok(treefs_tree::encode(&self.load().await?))
    }

    /// Apply `edit` at `path` and store the result.
    ///
    /// Nothing is written unless the edit succeeds.
    pub async fn edit(&self, path: &FolderPath, edit: Edit) -> Result<(), ApiError> {
        let mut tree = self.load().await?;
        tree.apply(path, edit)?;

        self.store
            .replace(&treefs_tree::encode(&tree))
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "document store replace failed"))?;
        Ok(())
    }

    pub async fn create(&self, path: &FolderPath, item: Node) -> Result<(), ApiError> {
        tracing::info!(%path, item = item.name(), "creating item");
        self.edit(path, Edit::insert(item)).await
    }

    pub async fn update(&self, path: &FolderPath, name: &str, item: Node) -> Result<(), ApiError> {
        tracing::info!(%path, item = name, replacement = item.name(), "updating item");
        self.edit(path, Edit::replace(name, item)).await
    }

    pub async fn remove(&self, path: &FolderPath, name: &str) -> Result<(), ApiError> {
        tracing::info!(%path, item = name, "deleting item");
        self.edit(path, Edit::delete(name)).await
    }
}
