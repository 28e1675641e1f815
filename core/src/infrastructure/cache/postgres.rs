use std::time::Duration;

use chrono::{NaiveDateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DeleteMany, EntityTrait,
    QueryFilter, Statement, Value,
};
use tracing::{debug, error};

use crate::domain::{chat::ports::KeyValueStore, common::entities::app_errors::CoreError};
use crate::entity::{
    cache_entries::{
        ActiveModel as CacheEntryActiveModel, Column as CacheEntryColumn,
        Entity as CacheEntryEntity,
    },
    counters::Entity as CounterEntity,
};

const INCREMENT_SQL: &str = "INSERT INTO counters (key, value, updated_at) VALUES ($1, $2, NOW()) \
     ON CONFLICT (key) DO UPDATE SET value = counters.value + EXCLUDED.value, updated_at = NOW() \
     RETURNING value";

/// Store shared by every API instance, backed by the `cache_entries` and
/// `counters` tables. Expired entries are purged on each write.
#[derive(Debug, Clone)]
pub struct PostgresKeyValueStore {
    pub db: DatabaseConnection,
}

impl PostgresKeyValueStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn cache_error(action: &str, e: impl std::fmt::Display) -> CoreError {
    error!("Failed to {} key-value entry: {}", action, e);
    CoreError::CacheError(format!("failed to {action} entry"))
}

fn expired_entries(now: NaiveDateTime) -> DeleteMany<CacheEntryEntity> {
    CacheEntryEntity::delete_many().filter(CacheEntryColumn::ExpiresAt.lte(now))
}

impl KeyValueStore for PostgresKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        let Some(entry) = CacheEntryEntity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| cache_error("read", e))?
        else {
            return Ok(None);
        };

        if entry
            .expires_at
            .is_some_and(|expires_at| expires_at <= Utc::now().naive_utc())
        {
            CacheEntryEntity::delete_by_id(key.to_string())
                .exec(&self.db)
                .await
                .map_err(|e| cache_error("expire", e))?;
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    async fn put(
        &self,
        key: &str,
        value: serde_json::Value,
        ttl: Option<Duration>,
    ) -> Result<(), CoreError> {
        let now = Utc::now().naive_utc();

        let swept = expired_entries(now)
            .exec(&self.db)
            .await
            .map_err(|e| cache_error("sweep", e))?;
        if swept.rows_affected > 0 {
            debug!(rows = swept.rows_affected, "swept expired cache entries");
        }

        let expires_at = match ttl {
            Some(ttl) => Some(
                now
                    + chrono::Duration::from_std(ttl)
                        .map_err(|_| CoreError::CacheError("ttl out of range".to_string()))?,
            ),
            None => None,
        };

        CacheEntryEntity::insert(CacheEntryActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            expires_at: Set(expires_at),
        })
        .on_conflict(
            OnConflict::column(CacheEntryColumn::Key)
                .update_columns([CacheEntryColumn::Value, CacheEntryColumn::ExpiresAt])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .map_err(|e| cache_error("write", e))?;

        Ok(())
    }

    async fn forget(&self, key: &str) -> Result<(), CoreError> {
        CacheEntryEntity::delete_by_id(key.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| cache_error("delete", e))?;

        CounterEntity::delete_by_id(key.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| cache_error("delete", e))?;

        Ok(())
    }

    async fn increment(&self, key: &str, by: i64) -> Result<i64, CoreError> {
        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DbBackend::Postgres,
                INCREMENT_SQL,
                [Value::from(key), Value::from(by)],
            ))
            .await
            .map_err(|e| cache_error("increment", e))?
            .ok_or_else(|| CoreError::CacheError("increment returned no row".to_string()))?;

        row.try_get::<i64>("", "value")
            .map_err(|e| cache_error("decode", e))
    }

    async fn counter(&self, key: &str) -> Result<i64, CoreError> {
        let counter = CounterEntity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| cache_error("read", e))?;

        Ok(counter.map(|counter| counter.value).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::QueryTrait;

    #[test]
    fn test_sweep_targets_only_expired_rows() {
        let now = Utc::now().naive_utc();
        let sql = expired_entries(now).build(DbBackend::Postgres).to_string();

        assert!(sql.starts_with(r#"DELETE FROM "cache_entries""#));
        assert!(sql.contains(r#""expires_at" <="#));
    }
}
