use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod fakes;

#[derive(Clone, Debug)]
pub struct SmartfoodConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub cache: CacheConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LLMProvider {
    OpenAi,
    Gemini,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub api_key: String,
    pub model: String,
    /// Only used by OpenAI-compatible providers.
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheDriver {
    Memory,
    Postgres,
}

#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub driver: CacheDriver,
    pub ttl_seconds: u64,
    /// Upper bound on cached replies held by the in-memory driver.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            driver: CacheDriver::Memory,
            ttl_seconds: 3600,
            max_entries: 10_000,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

/// Case-insensitive, whitespace-trimmed key used to match catalog names.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
