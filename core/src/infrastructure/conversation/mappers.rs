use chrono::{TimeZone, Utc};

use crate::domain::conversation::entities::{ChatMessage, Conversation, MessageRole};
use crate::entity::{chat_messages::Model as ChatMessageModel, conversations::Model as ConversationModel};

impl From<&ConversationModel> for Conversation {
    fn from(model: &ConversationModel) -> Self {
        Conversation {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            shopping_list_id: model.shopping_list_id,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<ConversationModel> for Conversation {
    fn from(model: ConversationModel) -> Self {
        Conversation::from(&model)
    }
}

impl From<&ChatMessageModel> for ChatMessage {
    fn from(model: &ChatMessageModel) -> Self {
        ChatMessage {
            id: model.id,
            conversation_id: model.conversation_id,
            role: MessageRole::from(model.role.as_str()),
            content: model.content.clone(),
            tokens_used: model.tokens_used,
            cached: model.cached,
            created_at: Utc.from_utc_datetime(&model.created_at),
        }
    }
}

impl From<ChatMessageModel> for ChatMessage {
    fn from(model: ChatMessageModel) -> Self {
        ChatMessage::from(&model)
    }
}
