use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{chat::entities::UserContext, common::generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub allergens: Vec<String>,
    pub preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: String,
        email: String,
        allergens: Vec<String>,
        preferences: Vec<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            allergens: normalize_tags(allergens),
            preferences: normalize_tags(preferences),
            created_at: now,
            updated_at: now,
        }
    }

    /// Profile data sent along with every chat message.
    pub fn context(&self) -> UserContext {
        UserContext {
            name: self.name.clone(),
            allergens: self.allergens.clone(),
            preferences: self.preferences.clone(),
        }
    }
}

/// Trims entries, drops empty ones and removes case-insensitive duplicates
/// while keeping the first spelling.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();

    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() {
            continue;
        }
        let key = tag.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            result.push(tag);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags() {
        let tags = vec![
            " gluten ".to_string(),
            "".to_string(),
            "Gluten".to_string(),
            "lactosa".to_string(),
        ];
        assert_eq!(normalize_tags(tags), vec!["gluten", "lactosa"]);
    }

    #[test]
    fn test_new_user_normalizes_email() {
        let user = User::new(
            "Ana".to_string(),
            " Ana@Example.com ".to_string(),
            vec![],
            vec!["vegetariana".to_string()],
        );
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.context().preferences, vec!["vegetariana"]);
    }
}
