use std::{future::Future, time::Duration};

use crate::domain::{
    chat::{
        entities::{ChatResult, LlmCompletion, UsageStats},
        value_objects::SendMessageInput,
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

/// Chat completion backend.
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        system_prompt: String,
        message: String,
    ) -> impl Future<Output = Result<LlmCompletion, CoreError>> + Send;
}

/// Key-value store holding cached replies and usage counters.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` for missing or expired keys.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, CoreError>> + Send;

    fn put(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Option<Duration>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn forget(&self, key: &str) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Atomically adds `by` to the counter and returns the new value.
    fn increment(&self, key: &str, by: i64)
    -> impl Future<Output = Result<i64, CoreError>> + Send;

    /// Current counter value, 0 when the counter was never incremented.
    fn counter(&self, key: &str) -> impl Future<Output = Result<i64, CoreError>> + Send;
}

pub trait ChatService: Send + Sync {
    fn send_message(
        &self,
        user: User,
        input: SendMessageInput,
    ) -> impl Future<Output = Result<ChatResult, CoreError>> + Send;

    fn get_usage_stats(&self) -> impl Future<Output = Result<UsageStats, CoreError>> + Send;

    fn reset_usage_stats(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
