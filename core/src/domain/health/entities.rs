use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub message: String,
}

impl DatabaseHealthStatus {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            message: "Database is reachable".to_string(),
        }
    }

    pub fn down(reason: impl Into<String>) -> Self {
        Self {
            status: "DOWN".to_string(),
            message: reason.into(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == "UP"
    }
}
