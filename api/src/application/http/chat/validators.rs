use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendMessageValidator {
    /// Omit to start a new conversation.
    #[serde(default)]
    pub conversation_id: Option<Uuid>,

    #[validate(length(min = 1, max = 4000, message = "message must be between 1 and 4000 characters"))]
    pub message: String,
}
