use std::time::Duration;

use tracing::info;

use crate::{
    domain::{
        chat::gateway::ChatGateway,
        common::{CacheDriver, SmartfoodConfig, services::Service},
    },
    infrastructure::{
        cache::{InMemoryKeyValueStore, KeyValueStoreBackend, PostgresKeyValueStore},
        conversation::PostgresConversationRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        llm::LlmBackend,
        product::PostgresProductRepository,
        shopping_list::{PostgresShoppingListRepository, PostgresSupermarketRepository},
        user::PostgresUserRepository,
    },
};

pub type SmartfoodService = Service<
    PostgresUserRepository,
    PostgresConversationRepository,
    PostgresShoppingListRepository,
    PostgresSupermarketRepository,
    PostgresProductRepository,
    PostgresHealthCheckRepository,
    KeyValueStoreBackend,
    LlmBackend,
>;

pub async fn create_service(config: SmartfoodConfig) -> Result<SmartfoodService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    let store = match config.cache.driver {
        CacheDriver::Memory => KeyValueStoreBackend::Memory(InMemoryKeyValueStore::with_capacity(
            config.cache.max_entries,
        )),
        CacheDriver::Postgres => KeyValueStoreBackend::Postgres(PostgresKeyValueStore::new(db.clone())),
    };
    info!(driver = ?config.cache.driver, ttl_seconds = config.cache.ttl_seconds, "chat cache ready");

    let chat_gateway = ChatGateway::new(
        store,
        LlmBackend::from(&config.llm),
        Duration::from_secs(config.cache.ttl_seconds),
    );

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresConversationRepository::new(db.clone()),
        PostgresShoppingListRepository::new(db.clone()),
        PostgresSupermarketRepository::new(db.clone()),
        PostgresProductRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        chat_gateway,
    ))
}
