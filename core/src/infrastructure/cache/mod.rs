pub mod memory;
pub mod postgres;

use std::time::Duration;

use crate::domain::{chat::ports::KeyValueStore, common::entities::app_errors::CoreError};

pub use memory::InMemoryKeyValueStore;
pub use postgres::PostgresKeyValueStore;

/// Store selected by the `cache.driver` setting.
#[derive(Debug, Clone)]
pub enum KeyValueStoreBackend {
    Memory(InMemoryKeyValueStore),
    Postgres(PostgresKeyValueStore),
}

impl KeyValueStore for KeyValueStoreBackend {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::Postgres(store) => store.get(key).await,
        }
    }

    async fn put(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Option<Duration>,
    ) -> Result<(), CoreError> {
        match self {
            Self::Memory(store) => store.put(key, value, ttl).await,
            Self::Postgres(store) => store.put(key, value, ttl).await,
        }
    }

    async fn forget(&self, key: &str) -> Result<(), CoreError> {
        match self {
            Self::Memory(store) => store.forget(key).await,
            Self::Postgres(store) => store.forget(key).await,
        }
    }

    async fn increment(&self, key: &str, by: i64) -> Result<i64, CoreError> {
        match self {
            Self::Memory(store) => store.increment(key, by).await,
            Self::Postgres(store) => store.increment(key, by).await,
        }
    }

    async fn counter(&self, key: &str) -> Result<i64, CoreError> {
        match self {
            Self::Memory(store) => store.counter(key).await,
            Self::Postgres(store) => store.counter(key).await,
        }
    }
}
