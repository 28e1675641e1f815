use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::{
        entities::{ChatMessage, Conversation},
        ports::ConversationRepository,
    },
};
use crate::entity::{
    chat_messages::{
        ActiveModel as ChatMessageActiveModel, Column as ChatMessageColumn,
        Entity as ChatMessageEntity,
    },
    conversations::{
        ActiveModel as ConversationActiveModel, Column as ConversationColumn,
        Entity as ConversationEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresConversationRepository {
    pub db: DatabaseConnection,
}

impl PostgresConversationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn active_model(conversation: Conversation) -> ConversationActiveModel {
    ConversationActiveModel {
        id: Set(conversation.id),
        user_id: Set(conversation.user_id),
        name: Set(conversation.name),
        shopping_list_id: Set(conversation.shopping_list_id),
        created_at: Set(conversation.created_at.naive_utc()),
        updated_at: Set(conversation.updated_at.naive_utc()),
    }
}

impl ConversationRepository for PostgresConversationRepository {
    async fn create_conversation(
        &self,
        conversation: Conversation,
    ) -> Result<Conversation, CoreError> {
        ConversationEntity::insert(active_model(conversation))
            .exec_with_returning(&self.db)
            .await
            .map(Conversation::from)
            .map_err(|e| {
                error!("Failed to create conversation: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_by_id(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Conversation>, CoreError> {
        let conversation = ConversationEntity::find()
            .filter(ConversationColumn::Id.eq(conversation_id))
            .filter(ConversationColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get conversation by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Conversation::from);

        Ok(conversation)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Conversation>, CoreError> {
        let conversations = ConversationEntity::find()
            .filter(ConversationColumn::UserId.eq(user_id))
            .order_by_desc(ConversationColumn::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch conversations: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Conversation::from)
            .collect();

        Ok(conversations)
    }

    async fn update_conversation(
        &self,
        conversation: Conversation,
    ) -> Result<Conversation, CoreError> {
        ConversationEntity::update(active_model(conversation))
            .exec(&self.db)
            .await
            .map(Conversation::from)
            .map_err(|e| {
                error!("Failed to update conversation: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn delete_conversation(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), CoreError> {
        ConversationEntity::delete_many()
            .filter(ConversationColumn::Id.eq(conversation_id))
            .filter(ConversationColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete conversation: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn add_message(&self, message: ChatMessage) -> Result<ChatMessage, CoreError> {
        ChatMessageEntity::insert(ChatMessageActiveModel {
            id: Set(message.id),
            conversation_id: Set(message.conversation_id),
            role: Set(message.role.as_str().to_string()),
            content: Set(message.content),
            tokens_used: Set(message.tokens_used),
            cached: Set(message.cached),
            created_at: Set(message.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(ChatMessage::from)
        .map_err(|e| {
            error!("Failed to store chat message: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn get_messages(&self, conversation_id: Uuid) -> Result<Vec<ChatMessage>, CoreError> {
        let messages = ChatMessageEntity::find()
            .filter(ChatMessageColumn::ConversationId.eq(conversation_id))
            .order_by_asc(ChatMessageColumn::CreatedAt)
            .order_by_asc(ChatMessageColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch chat messages: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ChatMessage::from)
            .collect();

        Ok(messages)
    }
}
