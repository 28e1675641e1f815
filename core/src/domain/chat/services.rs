use tracing::debug;

use crate::domain::{
    chat::{
        entities::{ChatResult, UsageStats},
        ports::{ChatService, KeyValueStore, LLMClient},
        value_objects::SendMessageInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    conversation::{
        entities::{ChatMessage, Conversation, DEFAULT_CONVERSATION_NAME, MessageRole},
        ports::ConversationRepository,
    },
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    shopping_list::{
        extraction::{ExtractedShoppingList, HistoryMessage, extract_shopping_list},
        ports::{ShoppingListRepository, SupermarketRepository},
    },
    user::{entities::User, ports::UserRepository},
};

impl<U, CV, SL, SM, P, HC, KV, LLM> ChatService for Service<U, CV, SL, SM, P, HC, KV, LLM>
where
    U: UserRepository,
    CV: ConversationRepository,
    SL: ShoppingListRepository,
    SM: SupermarketRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
    KV: KeyValueStore,
    LLM: LLMClient,
{
    async fn send_message(
        &self,
        user: User,
        input: SendMessageInput,
    ) -> Result<ChatResult, CoreError> {
        let message = input.message.trim().to_string();
        if message.is_empty() {
            return Err(CoreError::Invalid);
        }

        let existing = match input.conversation_id {
            Some(conversation_id) => Some(
                self.conversation_repository
                    .get_by_id(conversation_id, user.id)
                    .await?
                    .ok_or(CoreError::NotFound)?,
            ),
            None => None,
        };

        // A failed completion must not leave an empty conversation behind.
        let reply = self.chat_gateway.send(&message, &user.context()).await?;

        let mut conversation = match existing {
            Some(conversation) => conversation,
            None => {
                self.conversation_repository
                    .create_conversation(Conversation::new(
                        user.id,
                        DEFAULT_CONVERSATION_NAME.to_string(),
                    ))
                    .await?
            }
        };

        self.conversation_repository
            .add_message(ChatMessage::new(
                conversation.id,
                MessageRole::User,
                message,
                0,
                false,
            ))
            .await?;

        let history: Vec<HistoryMessage> = self
            .conversation_repository
            .get_messages(conversation.id)
            .await?
            .iter()
            .map(HistoryMessage::from)
            .collect();

        self.conversation_repository
            .add_message(ChatMessage::new(
                conversation.id,
                MessageRole::Assistant,
                reply.response.clone(),
                i32::try_from(reply.tokens_used).unwrap_or(i32::MAX),
                reply.cached,
            ))
            .await?;

        conversation.updated_at = chrono::Utc::now();
        let conversation = self
            .conversation_repository
            .update_conversation(conversation)
            .await?;

        let extracted_list = extract_shopping_list(&reply.response, &history);
        if let Some(list) = &extracted_list {
            debug!(
                conversation_id = %conversation.id,
                products = list.products.len(),
                "shopping list detected in reply"
            );
        }

        Ok(ChatResult {
            conversation_id: conversation.id,
            response: reply.response,
            tokens_used: reply.tokens_used,
            cached: reply.cached,
            over_budget: extracted_list
                .as_ref()
                .is_some_and(ExtractedShoppingList::exceeds_budget),
            extracted_list,
        })
    }

    async fn get_usage_stats(&self) -> Result<UsageStats, CoreError> {
        self.chat_gateway.stats().await
    }

    async fn reset_usage_stats(&self) -> Result<(), CoreError> {
        self.chat_gateway.reset_stats().await
    }
}
