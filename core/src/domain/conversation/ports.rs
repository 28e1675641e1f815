use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::{
        entities::{ChatMessage, Conversation, ConversationWithMessages},
        value_objects::{DeleteConversationInput, GetConversationInput},
    },
    user::entities::User,
};

pub trait ConversationRepository: Send + Sync {
    fn create_conversation(
        &self,
        conversation: Conversation,
    ) -> impl Future<Output = Result<Conversation, CoreError>> + Send;

    fn get_by_id(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Conversation>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Conversation>, CoreError>> + Send;

    fn update_conversation(
        &self,
        conversation: Conversation,
    ) -> impl Future<Output = Result<Conversation, CoreError>> + Send;

    fn delete_conversation(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_message(
        &self,
        message: ChatMessage,
    ) -> impl Future<Output = Result<ChatMessage, CoreError>> + Send;

    /// Messages in chronological order.
    fn get_messages(
        &self,
        conversation_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;
}

pub trait ConversationService: Send + Sync {
    fn get_conversations(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Vec<Conversation>, CoreError>> + Send;

    fn get_conversation(
        &self,
        user: User,
        input: GetConversationInput,
    ) -> impl Future<Output = Result<ConversationWithMessages, CoreError>> + Send;

    fn delete_conversation(
        &self,
        user: User,
        input: DeleteConversationInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
