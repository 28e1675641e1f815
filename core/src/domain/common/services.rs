use crate::domain::{
    chat::{
        gateway::ChatGateway,
        ports::{KeyValueStore, LLMClient},
    },
    conversation::ports::ConversationRepository,
    health::ports::HealthCheckRepository,
    product::ports::ProductRepository,
    shopping_list::ports::{ShoppingListRepository, SupermarketRepository},
    user::ports::UserRepository,
};

/// Application service. Every domain service trait is implemented on this
/// struct so the HTTP layer only ever holds one value.
#[derive(Clone)]
pub struct Service<U, CV, SL, SM, P, HC, KV, LLM>
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
    pub(crate) user_repository: U,
    pub(crate) conversation_repository: CV,
    pub(crate) shopping_list_repository: SL,
    pub(crate) supermarket_repository: SM,
    pub(crate) product_repository: P,
    pub(crate) health_check_repository: HC,
    pub(crate) chat_gateway: ChatGateway<KV, LLM>,
}

impl<U, CV, SL, SM, P, HC, KV, LLM> Service<U, CV, SL, SM, P, HC, KV, LLM>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        conversation_repository: CV,
        shopping_list_repository: SL,
        supermarket_repository: SM,
        product_repository: P,
        health_check_repository: HC,
        chat_gateway: ChatGateway<KV, LLM>,
    ) -> Self {
        Self {
            user_repository,
            conversation_repository,
            shopping_list_repository,
            supermarket_repository,
            product_repository,
            health_check_repository,
            chat_gateway,
        }
    }
}
