use crate::domain::{
    chat::ports::{KeyValueStore, LLMClient},
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::ConversationRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    product::ports::ProductRepository,
    shopping_list::ports::{ShoppingListRepository, SupermarketRepository},
    user::ports::UserRepository,
};

impl<U, CV, SL, SM, P, HC, KV, LLM> HealthCheckService for Service<U, CV, SL, SM, P, HC, KV, LLM>
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
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
