//! Cache-in-front-of-LLM wrapper with usage counters.

use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::domain::{
    chat::{
        entities::{CachedReply, ChatReply, UsageStats, UserContext},
        ports::{KeyValueStore, LLMClient},
        prompt::build_system_prompt,
    },
    common::entities::app_errors::CoreError,
};

pub const CACHE_KEY_PREFIX: &str = "smartfood:chat:";
pub const TOTAL_REQUESTS_KEY: &str = "smartfood:stats:total_requests";
pub const TOTAL_TOKENS_KEY: &str = "smartfood:stats:total_tokens";
pub const CACHE_HITS_KEY: &str = "smartfood:stats:cache_hits";

#[derive(Clone)]
pub struct ChatGateway<K, L>
where
    K: KeyValueStore,
    L: LLMClient,
{
    store: K,
    llm: L,
    ttl: Duration,
}

impl<K, L> ChatGateway<K, L>
where
    K: KeyValueStore,
    L: LLMClient,
{
    pub fn new(store: K, llm: L, ttl: Duration) -> Self {
        Self { store, llm, ttl }
    }

    /// Deterministic key over the message and the serialized context.
    /// Both parts are length-prefixed so no two inputs share a key.
    pub fn cache_key(message: &str, context: &UserContext) -> String {
        let context = serde_json::to_vec(context).unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update((message.len() as u64).to_le_bytes());
        hasher.update(message.as_bytes());
        hasher.update((context.len() as u64).to_le_bytes());
        hasher.update(&context);

        format!("{CACHE_KEY_PREFIX}{:x}", hasher.finalize())
    }

    pub async fn send(&self, message: &str, context: &UserContext) -> Result<ChatReply, CoreError> {
        let key = Self::cache_key(message, context);

        if let Some(reply) = self.cached_reply(&key).await {
            debug!(key = %key, "chat reply served from cache");
            self.bump(CACHE_HITS_KEY, 1).await;

            return Ok(ChatReply {
                response: reply.response,
                tokens_used: 0,
                cached: true,
            });
        }

        let completion = self
            .llm
            .complete(build_system_prompt(context), message.to_string())
            .await?;

        info!(tokens_used = completion.tokens_used, "chat reply from LLM");
        self.bump(TOTAL_REQUESTS_KEY, 1).await;
        self.bump(TOTAL_TOKENS_KEY, i64::from(completion.tokens_used))
            .await;

        let cached = CachedReply {
            response: completion.content.clone(),
        };
        match serde_json::to_value(&cached) {
            Ok(value) => {
                if let Err(e) = self.store.put(&key, value, Some(self.ttl)).await {
                    warn!(error = %e, "failed to cache chat reply");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize chat reply"),
        }

        Ok(ChatReply {
            response: completion.content,
            tokens_used: completion.tokens_used,
            cached: false,
        })
    }

    pub async fn stats(&self) -> Result<UsageStats, CoreError> {
        Ok(UsageStats {
            total_requests: self.store.counter(TOTAL_REQUESTS_KEY).await?,
            total_tokens: self.store.counter(TOTAL_TOKENS_KEY).await?,
            cache_hits: self.store.counter(CACHE_HITS_KEY).await?,
        })
    }

    pub async fn reset_stats(&self) -> Result<(), CoreError> {
        for key in [TOTAL_REQUESTS_KEY, TOTAL_TOKENS_KEY, CACHE_HITS_KEY] {
            self.store.forget(key).await?;
        }

        Ok(())
    }

    /// Store failures and undecodable entries count as misses.
    async fn cached_reply(&self, key: &str) -> Option<CachedReply> {
        match self.store.get(key).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(reply) => Some(reply),
                Err(e) => {
                    warn!(error = %e, "ignoring malformed cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "cache lookup failed");
                None
            }
        }
    }

    async fn bump(&self, key: &str, by: i64) {
        if let Err(e) = self.store.increment(key, by).await {
            warn!(error = %e, counter = key, "failed to update usage counter");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::common::fakes::FakeLlm, infrastructure::cache::memory::InMemoryKeyValueStore,
    };

    fn context(name: &str) -> UserContext {
        UserContext {
            name: name.to_string(),
            allergens: vec!["gluten".to_string()],
            preferences: vec![],
        }
    }

    type Gateway = ChatGateway<InMemoryKeyValueStore, FakeLlm>;

    fn gateway(llm: FakeLlm) -> Gateway {
        ChatGateway::new(InMemoryKeyValueStore::default(), llm, Duration::from_secs(3600))
    }

    #[test]
    fn test_cache_key_is_deterministic_and_prefixed() {
        let a = Gateway::cache_key("hola", &context("Ana"));
        let b = Gateway::cache_key("hola", &context("Ana"));
        assert_eq!(a, b);
        assert!(a.starts_with(CACHE_KEY_PREFIX));
        assert_eq!(a.len(), CACHE_KEY_PREFIX.len() + 64);
    }

    #[test]
    fn test_cache_key_depends_on_context() {
        let a = Gateway::cache_key("hola", &context("Ana"));
        let b = Gateway::cache_key("hola", &context("Luis"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_second_identical_message_is_cached() {
        let llm = FakeLlm::replying("- Leche\n- Pan", 42);
        let gateway = gateway(llm.clone());
        let ctx = context("Ana");

        let first = gateway.send("lista para hoy", &ctx).await.unwrap();
        assert!(!first.cached);
        assert_eq!(first.tokens_used, 42);

        let second = gateway.send("lista para hoy", &ctx).await.unwrap();
        assert!(second.cached);
        assert_eq!(second.tokens_used, 0);
        assert_eq!(second.response, first.response);
        assert_eq!(llm.calls(), 1);

        let stats = gateway.stats().await.unwrap();
        assert_eq!(stats.total_requests, 1);
        assert_eq!(stats.total_tokens, 42);
        assert_eq!(stats.cache_hits, 1);
    }

    #[tokio::test]
    async fn test_expired_reply_goes_back_to_the_llm() {
        let llm = FakeLlm::replying("- Leche", 7);
        let gateway = ChatGateway::new(
            InMemoryKeyValueStore::default(),
            llm.clone(),
            Duration::ZERO,
        );
        let ctx = context("Ana");

        gateway.send("lista para hoy", &ctx).await.unwrap();
        let second = gateway.send("lista para hoy", &ctx).await.unwrap();

        assert!(!second.cached);
        assert_eq!(second.tokens_used, 7);
        assert_eq!(llm.calls(), 2);

        let stats = gateway.stats().await.unwrap();
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.cache_hits, 0);
    }

    #[tokio::test]
    async fn test_llm_failure_is_not_cached_or_counted() {
        let gateway = gateway(FakeLlm::failing());

        let result = gateway.send("hola", &context("Ana")).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));

        let stats = gateway.stats().await.unwrap();
        assert_eq!(stats, UsageStats::default());
    }

    #[tokio::test]
    async fn test_reset_stats() {
        let gateway = gateway(FakeLlm::replying("hola", 7));
        gateway.send("hola", &context("Ana")).await.unwrap();

        gateway.reset_stats().await.unwrap();
        assert_eq!(gateway.stats().await.unwrap(), UsageStats::default());
    }
}
