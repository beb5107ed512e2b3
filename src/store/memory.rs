//! In-Memory Store Backend
//!
//! HashMap-backed implementation of [`MappingStore`]. Used as the default
//! backend when no Redis URL is configured, and as the store fake in tests.
//! Mappings live only as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{Mapping, MappingStore, StoreResult};

// == Memory Store ==
/// In-process mapping store guarded by an async RwLock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Mapping>>,
}

impl MemoryStore {
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored mappings.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true when no mappings are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn put(&self, mapping: Mapping) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(mapping.short_url.clone(), mapping);
        Ok(())
    }

    async fn get(&self, short_url: &str) -> StoreResult<Option<Mapping>> {
        let entries = self.entries.read().await;
        Ok(entries.get(short_url).cloned())
    }
}
