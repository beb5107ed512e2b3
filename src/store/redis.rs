//! Redis Store Backend
//!
//! Redis-backed implementation of [`MappingStore`]. Each mapping is stored
//! as a JSON string under a prefixed key, so the value keeps the same shape
//! the wire API speaks.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, trace};

use crate::store::{Mapping, MappingStore, StoreResult};

/// Builds the Redis key for a short token.
fn storage_key(prefix: &str, short_url: &str) -> String {
    format!("{}{}", prefix, short_url)
}

// == Redis Store ==
/// Mapping store over a multiplexed Redis connection.
///
/// The connection is cheap to clone; each operation clones it rather than
/// locking a shared handle.
#[derive(Debug, Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

impl RedisStore {
    /// Creates a RedisStore from an already established connection.
    pub fn new(conn: redis::aio::MultiplexedConnection, key_prefix: impl Into<String>) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Connects to Redis at `url` and returns a store using `key_prefix`.
    pub async fn connect(url: &str, key_prefix: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        debug!(url, "Connected to Redis mapping store");
        Ok(Self::new(conn, key_prefix))
    }
}

#[async_trait]
impl MappingStore for RedisStore {
    async fn put(&self, mapping: Mapping) -> StoreResult<()> {
        let key = storage_key(&self.key_prefix, &mapping.short_url);
        let json = serde_json::to_string(&mapping)?;

        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(&key, json).await?;
        trace!(%key, "Stored mapping");
        Ok(())
    }

    async fn get(&self, short_url: &str) -> StoreResult<Option<Mapping>> {
        let key = storage_key(&self.key_prefix, short_url);

        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(&key).await?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => {
                trace!(%key, "No mapping for key");
                Ok(None)
            }
        }
    }
}
