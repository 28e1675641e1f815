use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, normalize_name},
    shopping_list::{entities::Supermarket, ports::SupermarketRepository},
};
use crate::entity::supermarkets::{
    ActiveModel as SupermarketActiveModel, Column as SupermarketColumn,
    Entity as SupermarketEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresSupermarketRepository {
    pub db: DatabaseConnection,
}

impl PostgresSupermarketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn active_model(supermarket: Supermarket) -> SupermarketActiveModel {
    SupermarketActiveModel {
        id: Set(supermarket.id),
        name_key: Set(normalize_name(&supermarket.name)),
        name: Set(supermarket.name),
        created_at: Set(supermarket.created_at.naive_utc()),
        updated_at: Set(supermarket.updated_at.naive_utc()),
    }
}

impl SupermarketRepository for PostgresSupermarketRepository {
    async fn create_supermarket(&self, supermarket: Supermarket) -> Result<Supermarket, CoreError> {
        SupermarketEntity::insert(active_model(supermarket))
            .exec_with_returning(&self.db)
            .await
            .map(Supermarket::from)
            .map_err(|e| {
                error!("Failed to create supermarket: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_by_id(&self, supermarket_id: Uuid) -> Result<Option<Supermarket>, CoreError> {
        let supermarket = SupermarketEntity::find_by_id(supermarket_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get supermarket by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Supermarket::from);

        Ok(supermarket)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Supermarket>, CoreError> {
        let supermarket = SupermarketEntity::find()
            .filter(SupermarketColumn::NameKey.eq(normalize_name(name)))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get supermarket by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Supermarket::from);

        Ok(supermarket)
    }

    async fn get_all(&self) -> Result<Vec<Supermarket>, CoreError> {
        let supermarkets = SupermarketEntity::find()
            .order_by_asc(SupermarketColumn::NameKey)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch supermarkets: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Supermarket::from)
            .collect();

        Ok(supermarkets)
    }
}
