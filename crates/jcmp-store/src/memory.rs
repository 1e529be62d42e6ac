use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::side::Side;
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Documents are held behind a `RwLock`; values are cloned on read.
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<(String, Side), String>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored documents, counting each side separately.
    pub fn len(&self) -> StoreResult<usize> {
        let map = self.documents.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.len())
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn put(&self, id: &str, side: Side, encoded: String) -> StoreResult<()> {
        if id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        let mut map = self.documents.write().map_err(|_| StoreError::LockPoisoned)?;
        debug!(id, %side, bytes = encoded.len(), "storing document");
        map.insert((id.to_string(), side), encoded);
        Ok(())
    }

    fn get(&self, id: &str, side: Side) -> StoreResult<Option<String>> {
        let map = self.documents.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(&(id.to_string(), side)).cloned())
    }

    fn remove(&self, id: &str) -> StoreResult<bool> {
        let mut map = self.documents.write().map_err(|_| StoreError::LockPoisoned)?;
        let removed = Side::ALL
            .iter()
            .filter(|side| map.remove(&(id.to_string(), **side)).is_some())
            .count();
        Ok(removed > 0)
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &count)
            .finish()
    }
}
