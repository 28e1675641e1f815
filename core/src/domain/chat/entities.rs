use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::shopping_list::extraction::ExtractedShoppingList;

/// Profile data that shapes the system prompt. Part of the cache key, so two
/// users with the same profile share cached replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserContext {
    pub name: String,
    pub allergens: Vec<String>,
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmCompletion {
    pub content: String,
    pub tokens_used: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub response: String,
    pub tokens_used: u32,
    pub cached: bool,
}

/// Shape of a reply in the key-value store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedReply {
    pub response: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsageStats {
    /// Calls that reached the LLM. Cache hits are not counted here.
    pub total_requests: i64,
    pub total_tokens: i64,
    pub cache_hits: i64,
}

impl UsageStats {
    /// Share of messages answered from the cache, between 0 and 1.
    pub fn cache_hit_rate(&self) -> f64 {
        let served = self.total_requests + self.cache_hits;
        if served == 0 {
            return 0.0;
        }

        self.cache_hits as f64 / served as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResult {
    pub conversation_id: Uuid,
    pub response: String,
    pub tokens_used: u32,
    pub cached: bool,
    pub extracted_list: Option<ExtractedShoppingList>,
    /// Whether the extracted list costs more than the budget the user gave.
    pub over_budget: bool,
}
