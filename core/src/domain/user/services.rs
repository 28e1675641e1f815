use tracing::info;
use uuid::Uuid;

use crate::domain::{
    chat::ports::{KeyValueStore, LLMClient},
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::ConversationRepository,
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    shopping_list::ports::{ShoppingListRepository, SupermarketRepository},
    user::{
        entities::{User, normalize_tags},
        ports::{UserRepository, UserService},
        value_objects::{RegisterUserInput, UpdateProfileInput},
    },
};

impl<U, CV, SL, SM, P, HC, KV, LLM> UserService for Service<U, CV, SL, SM, P, HC, KV, LLM>
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
    async fn register_user(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        let user = User::new(input.name, input.email, input.allergens, input.preferences);

        if user.name.is_empty() || user.email.is_empty() {
            return Err(CoreError::Invalid);
        }

        if self
            .user_repository
            .get_by_email(&user.email)
            .await?
            .is_some()
        {
            return Err(CoreError::Invalid);
        }

        let user = self.user_repository.create_user(user).await?;
        info!(user_id = %user.id, "registered user");

        Ok(user)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_profile(
        &self,
        user: User,
        input: UpdateProfileInput,
    ) -> Result<User, CoreError> {
        let mut user = user;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::Invalid);
            }
            user.name = name;
        }

        if let Some(allergens) = input.allergens {
            user.allergens = normalize_tags(allergens);
        }

        if let Some(preferences) = input.preferences {
            user.preferences = normalize_tags(preferences);
        }

        user.updated_at = chrono::Utc::now();

        self.user_repository.update_user(user).await
    }
}
