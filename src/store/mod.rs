//! Mapping Store Module
//!
//! The persistence seam of the service. Handlers talk to an injected
//! `MappingStore` trait object; the concrete backend is chosen at startup.

mod memory;
mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// == Mapping ==
/// The (token, original URL) pair persisted by the store.
///
/// Serialized field names follow the store schema of the wire API, so the
/// value written to the backend is the same shape the API speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    /// The short token, exactly six characters, primary key
    #[serde(rename = "ShortURL")]
    pub short_url: String,
    /// The destination URL, non-empty, otherwise opaque
    #[serde(rename = "OriginalURL")]
    pub original_url: String,
}

impl Mapping {
    /// Creates a new Mapping.
    pub fn new(short_url: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
            original_url: original_url.into(),
        }
    }
}

// == Store Error ==
/// Errors surfaced by a store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend rejected or failed the operation
    #[error("store backend error: {0}")]
    Backend(#[from] ::redis::RedisError),

    /// A stored value could not be encoded or decoded
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Mapping Store Trait ==
/// Key-value persistence contract for URL mappings.
///
/// `put` is an unconditional overwrite: token uniqueness is probabilistic
/// and a colliding write replaces the older mapping.
#[async_trait]
pub trait MappingStore: Send + Sync + 'static {
    /// Stores a mapping under its short token.
    async fn put(&self, mapping: Mapping) -> StoreResult<()>;

    /// Retrieves the mapping for a short token, or `None` if absent.
    async fn get(&self, short_url: &str) -> StoreResult<Option<Mapping>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_serializes_with_wire_names() {
        let mapping = Mapping::new("a1b2c3", "https://example.com");
        let json = serde_json::to_string(&mapping).unwrap();
        assert!(json.contains("\"ShortURL\":\"a1b2c3\""));
        assert!(json.contains("\"OriginalURL\":\"https://example.com\""));
    }

    #[test]
    fn test_mapping_deserializes_from_wire_names() {
        let json = r#"{"ShortURL":"a1b2c3","OriginalURL":"https://example.com"}"#;
        let mapping: Mapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.short_url, "a1b2c3");
        assert_eq!(mapping.original_url, "https://example.com");
    }
}
