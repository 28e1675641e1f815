use crate::domain::{
    chat::ports::{KeyValueStore, LLMClient},
    common::{entities::app_errors::CoreError, services::Service},
    conversation::{
        entities::{Conversation, ConversationWithMessages},
        ports::{ConversationRepository, ConversationService},
        value_objects::{DeleteConversationInput, GetConversationInput},
    },
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    shopping_list::ports::{ShoppingListRepository, SupermarketRepository},
    user::{entities::User, ports::UserRepository},
};

impl<U, CV, SL, SM, P, HC, KV, LLM> ConversationService for Service<U, CV, SL, SM, P, HC, KV, LLM>
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
    async fn get_conversations(&self, user: User) -> Result<Vec<Conversation>, CoreError> {
        self.conversation_repository.get_by_user(user.id).await
    }

    async fn get_conversation(
        &self,
        user: User,
        input: GetConversationInput,
    ) -> Result<ConversationWithMessages, CoreError> {
        let conversation = self
            .conversation_repository
            .get_by_id(input.conversation_id, user.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let messages = self
            .conversation_repository
            .get_messages(conversation.id)
            .await?;

        Ok(ConversationWithMessages {
            conversation,
            messages,
        })
    }

    async fn delete_conversation(
        &self,
        user: User,
        input: DeleteConversationInput,
    ) -> Result<(), CoreError> {
        self.conversation_repository
            .get_by_id(input.conversation_id, user.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.conversation_repository
            .delete_conversation(input.conversation_id, user.id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::fakes::{FakeLlm, test_service, test_user},
        conversation::entities::{ChatMessage, MessageRole},
    };

    #[tokio::test]
    async fn test_get_conversation_with_messages() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;

        let conversation = fakes
            .conversations
            .create_conversation(Conversation::new(user.id, "Compra semanal".to_string()))
            .await
            .unwrap();
        fakes
            .conversations
            .add_message(ChatMessage::new(
                conversation.id,
                MessageRole::User,
                "hola".to_string(),
                0,
                false,
            ))
            .await
            .unwrap();

        let found = service
            .get_conversation(
                user.clone(),
                GetConversationInput {
                    conversation_id: conversation.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(found.conversation.name, "Compra semanal");
        assert_eq!(found.messages.len(), 1);

        assert_eq!(service.get_conversations(user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_other_users_conversation_is_hidden() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;
        let conversation = fakes
            .conversations
            .create_conversation(Conversation::new(uuid::Uuid::new_v4(), "ajena".to_string()))
            .await
            .unwrap();

        let result = service
            .delete_conversation(
                user,
                DeleteConversationInput {
                    conversation_id: conversation.id,
                },
            )
            .await;
        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }
}
