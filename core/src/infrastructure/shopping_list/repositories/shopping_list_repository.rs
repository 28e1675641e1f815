use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Insert, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    shopping_list::{
        entities::{ExtractedListChanges, ShoppingList, ShoppingListEntry},
        ports::ShoppingListRepository,
    },
};
use crate::entity::{
    conversations::Entity as ConversationEntity,
    products::Entity as ProductEntity,
    shopping_list_products::{
        ActiveModel as EntryActiveModel, Column as EntryColumn, Entity as EntryEntity,
    },
    shopping_lists::{
        ActiveModel as ShoppingListActiveModel, Column as ShoppingListColumn,
        Entity as ShoppingListEntity,
    },
    supermarkets::Entity as SupermarketEntity,
};
use crate::infrastructure::{
    conversation::repositories::conversation_repository::active_model as conversation_model,
    product::repositories::product_repository::active_model as product_model,
    shopping_list::repositories::supermarket_repository::active_model as supermarket_model,
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingListRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn active_model(list: ShoppingList) -> ShoppingListActiveModel {
    ShoppingListActiveModel {
        id: Set(list.id),
        user_id: Set(list.user_id),
        name: Set(list.name),
        supermarket_id: Set(list.supermarket_id),
        budget: Set(list.budget),
        created_at: Set(list.created_at.naive_utc()),
        updated_at: Set(list.updated_at.naive_utc()),
    }
}

/// Insert that overwrites quantity and price when the pair already exists.
fn entry_upsert(entry: ShoppingListEntry) -> Insert<EntryActiveModel> {
    EntryEntity::insert(EntryActiveModel {
        shopping_list_id: Set(entry.shopping_list_id),
        product_id: Set(entry.product_id),
        quantity: Set(entry.quantity),
        price: Set(entry.price),
        checked: Set(entry.checked),
        created_at: Set(entry.created_at.naive_utc()),
        updated_at: Set(entry.updated_at.naive_utc()),
    })
    .on_conflict(
        OnConflict::columns([EntryColumn::ShoppingListId, EntryColumn::ProductId])
            .update_columns([
                EntryColumn::Quantity,
                EntryColumn::Price,
                EntryColumn::UpdatedAt,
            ])
            .to_owned(),
    )
}

fn db_error(action: &'static str) -> impl Fn(DbErr) -> CoreError {
    move |e| {
        error!("{}: {}", action, e);
        CoreError::InternalServerError
    }
}

impl ShoppingListRepository for PostgresShoppingListRepository {
    async fn create_list(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        ShoppingListEntity::insert(active_model(list))
            .exec_with_returning(&self.db)
            .await
            .map(ShoppingList::from)
            .map_err(|e| {
                error!("Failed to create shopping list: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_by_id(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ShoppingList>, CoreError> {
        let list = ShoppingListEntity::find()
            .filter(ShoppingListColumn::Id.eq(list_id))
            .filter(ShoppingListColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping list by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(ShoppingList::from);

        Ok(list)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<ShoppingList>, CoreError> {
        let lists = ShoppingListEntity::find()
            .filter(ShoppingListColumn::UserId.eq(user_id))
            .order_by_desc(ShoppingListColumn::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch shopping lists: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ShoppingList::from)
            .collect();

        Ok(lists)
    }

    async fn update_list(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        ShoppingListEntity::update(active_model(list))
            .exec(&self.db)
            .await
            .map(ShoppingList::from)
            .map_err(|e| {
                error!("Failed to update shopping list: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn delete_list(&self, list_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        ShoppingListEntity::delete_many()
            .filter(ShoppingListColumn::Id.eq(list_id))
            .filter(ShoppingListColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn upsert_entry(&self, entry: ShoppingListEntry) -> Result<ShoppingListEntry, CoreError> {
        let key = (entry.shopping_list_id, entry.product_id);

        entry_upsert(entry)
            .exec(&self.db)
            .await
            .map_err(db_error("Failed to upsert shopping list entry"))?;

        EntryEntity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to reload shopping list entry: {}", e);
                CoreError::InternalServerError
            })?
            .map(ShoppingListEntry::from)
            .ok_or(CoreError::InternalServerError)
    }

    async fn set_entry_checked(
        &self,
        list_id: Uuid,
        product_id: Uuid,
        checked: bool,
    ) -> Result<bool, CoreError> {
        let result = EntryEntity::update_many()
            .col_expr(EntryColumn::Checked, Expr::value(checked))
            .col_expr(
                EntryColumn::UpdatedAt,
                Expr::value(chrono::Utc::now().naive_utc()),
            )
            .filter(EntryColumn::ShoppingListId.eq(list_id))
            .filter(EntryColumn::ProductId.eq(product_id))
            .exec(&self.db)
            .await
            .map_err(db_error("Failed to update shopping list entry"))?;

        Ok(result.rows_affected > 0)
    }

    async fn remove_entry(&self, list_id: Uuid, product_id: Uuid) -> Result<bool, CoreError> {
        let result = EntryEntity::delete_many()
            .filter(EntryColumn::ShoppingListId.eq(list_id))
            .filter(EntryColumn::ProductId.eq(product_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to remove shopping list entry: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn get_entries(&self, list_id: Uuid) -> Result<Vec<ShoppingListEntry>, CoreError> {
        let entries = EntryEntity::find()
            .filter(EntryColumn::ShoppingListId.eq(list_id))
            .order_by_asc(EntryColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch shopping list entries: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(ShoppingListEntry::from)
            .collect();

        Ok(entries)
    }

    async fn save_extracted(
        &self,
        changes: ExtractedListChanges,
    ) -> Result<ShoppingList, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(db_error("Failed to open transaction"))?;

        if let Some(supermarket) = changes.new_supermarket {
            SupermarketEntity::insert(supermarket_model(supermarket))
                .exec(&txn)
                .await
                .map_err(db_error("Failed to create supermarket"))?;
        }

        if !changes.new_products.is_empty() {
            ProductEntity::insert_many(changes.new_products.into_iter().map(product_model))
                .exec(&txn)
                .await
                .map_err(db_error("Failed to create products"))?;
        }

        let list = if changes.new_list {
            ShoppingListEntity::insert(active_model(changes.list))
                .exec_with_returning(&txn)
                .await
        } else {
            ShoppingListEntity::update(active_model(changes.list))
                .exec(&txn)
                .await
        }
        .map(ShoppingList::from)
        .map_err(db_error("Failed to save shopping list"))?;

        if changes.new_conversation {
            ConversationEntity::insert(conversation_model(changes.conversation))
                .exec(&txn)
                .await
                .map(|_| ())
        } else {
            ConversationEntity::update(conversation_model(changes.conversation))
                .exec(&txn)
                .await
                .map(|_| ())
        }
        .map_err(db_error("Failed to link conversation"))?;

        let entries = changes.entries.len();
        for entry in changes.entries {
            entry_upsert(entry)
                .exec(&txn)
                .await
                .map_err(db_error("Failed to upsert shopping list entry"))?;
        }

        txn.commit()
            .await
            .map_err(db_error("Failed to commit extracted list"))?;

        debug!(shopping_list_id = %list.id, entries, "extracted list committed");
        Ok(list)
    }
}
