use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

use tracing::debug;

use crate::domain::{chat::ports::KeyValueStore, common::entities::app_errors::CoreError};

const DEFAULT_MAX_ENTRIES: usize = 10_000;

#[derive(Debug)]
struct Entry {
    value: serde_json::Value,
    expires_at: Option<Instant>,
    accessed_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<String, Entry>,
    counters: HashMap<String, i64>,
}

impl Entries {
    fn evict_expired(&mut self, now: Instant) {
        self.values.retain(|_, entry| !entry.is_expired(now));
    }

    fn evict_lru(&mut self) {
        if let Some(key) = self
            .values
            .iter()
            .min_by_key(|(_, entry)| entry.accessed_at)
            .map(|(key, _)| key.clone())
        {
            debug!(key = %key, "evicting least recently used entry");
            self.values.remove(&key);
        }
    }
}

/// Process-local store. Expired values are swept on every write and the
/// least recently used value is evicted once `max_entries` is reached.
/// Counters are never evicted.
#[derive(Debug, Clone)]
pub struct InMemoryKeyValueStore {
    entries: Arc<Mutex<Entries>>,
    max_entries: usize,
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `max_entries` is clamped to at least 1.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Arc::default(),
            max_entries: max_entries.max(1),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>, CoreError> {
        self.entries
            .lock()
            .map_err(|_| CoreError::CacheError("key-value store lock poisoned".to_string()))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries
            .lock()
            .map(|entries| entries.values.len())
            .unwrap_or(0)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        let mut entries = self.lock()?;
        let now = Instant::now();

        let expired = match entries.values.get(key) {
            Some(entry) => entry.is_expired(now),
            None => return Ok(None),
        };

        if expired {
            entries.values.remove(key);
            return Ok(None);
        }

        Ok(entries.values.get_mut(key).map(|entry| {
            entry.accessed_at = now;
            entry.value.clone()
        }))
    }

    async fn put(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Option<Duration>,
    ) -> Result<(), CoreError> {
        let mut entries = self.lock()?;
        let now = Instant::now();

        entries.evict_expired(now);
        if !entries.values.contains_key(key) {
            while entries.values.len() >= self.max_entries {
                entries.evict_lru();
            }
        }

        entries.values.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: ttl.map(|ttl| now + ttl),
                accessed_at: now,
            },
        );

        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self.lock()?;
        entries.values.remove(key);
        entries.counters.remove(key);

        Ok(())
    }

    async fn increment(&self, key: &str, by: i64) -> Result<i64, CoreError> {
        let mut entries = self.lock()?;
        let counter = entries.counters.entry(key.to_string()).or_insert(0);
        *counter += by;

        Ok(*counter)
    }

    async fn counter(&self, key: &str) -> Result<i64, CoreError> {
        Ok(self.lock()?.counters.get(key).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_get_forget() {
        let store = InMemoryKeyValueStore::new();
        store.put("a", json!({"response": "hola"}), None).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some(json!({"response": "hola"})));

        store.forget("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entries_are_dropped() {
        let store = InMemoryKeyValueStore::new();
        store
            .put("a", json!(1), Some(Duration::from_millis(0)))
            .await
            .unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_writes_sweep_expired_entries() {
        let store = InMemoryKeyValueStore::new();
        for i in 0..1000 {
            store
                .put(&format!("old-{i}"), json!(i), Some(Duration::ZERO))
                .await
                .unwrap();
        }
        store.put("live", json!("hola"), None).await.unwrap();

        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_least_recently_used_entry_is_evicted() {
        let store = InMemoryKeyValueStore::with_capacity(2);
        store.put("a", json!(1), None).await.unwrap();
        std::thread::sleep(Duration::from_millis(2));
        store.put("b", json!(2), None).await.unwrap();
        std::thread::sleep(Duration::from_millis(2));
        assert!(store.get("a").await.unwrap().is_some());

        store.put("c", json!(3), None).await.unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("b").await.unwrap(), None);
        assert_eq!(store.get("a").await.unwrap(), Some(json!(1)));
        assert_eq!(store.get("c").await.unwrap(), Some(json!(3)));
    }

    #[tokio::test]
    async fn test_overwriting_a_key_at_capacity_keeps_the_rest() {
        let store = InMemoryKeyValueStore::with_capacity(2);
        store.put("a", json!(1), None).await.unwrap();
        store.put("b", json!(2), None).await.unwrap();
        store.put("a", json!(10), None).await.unwrap();

        assert_eq!(store.get("b").await.unwrap(), Some(json!(2)));
        assert_eq!(store.get("a").await.unwrap(), Some(json!(10)));
    }

    #[tokio::test]
    async fn test_counters() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.counter("hits").await.unwrap(), 0);
        assert_eq!(store.increment("hits", 1).await.unwrap(), 1);
        assert_eq!(store.increment("hits", 41).await.unwrap(), 42);

        let clone = store.clone();
        assert_eq!(clone.counter("hits").await.unwrap(), 42);

        store.forget("hits").await.unwrap();
        assert_eq!(store.counter("hits").await.unwrap(), 0);
    }
}
