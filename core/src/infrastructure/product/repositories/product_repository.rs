use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, normalize_name},
    product::{entities::Product, ports::ProductRepository, value_objects::GetProductsFilter},
};
use crate::entity::products::{
    ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as ProductEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn active_model(product: Product) -> ProductActiveModel {
    ProductActiveModel {
        id: Set(product.id),
        name_key: Set(normalize_name(&product.name)),
        name: Set(product.name),
        category: Set(product.category),
        price: Set(product.price),
        created_at: Set(product.created_at.naive_utc()),
        updated_at: Set(product.updated_at.naive_utc()),
    }
}

/// Parses `-price,name` into columns; unknown fields are ignored.
fn sort_columns(sort: &str) -> Vec<(ProductColumn, Order)> {
    sort.split(',')
        .filter_map(|field| {
            let field = field.trim();
            let (field, order) = match field.strip_prefix('-') {
                Some(field) => (field, Order::Desc),
                None => (field, Order::Asc),
            };

            let column = match field {
                "name" => ProductColumn::NameKey,
                "category" => ProductColumn::Category,
                "price" => ProductColumn::Price,
                "created_at" => ProductColumn::CreatedAt,
                _ => return None,
            };

            Some((column, order))
        })
        .collect()
}

impl ProductRepository for PostgresProductRepository {
    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        ProductEntity::insert(active_model(product))
            .exec_with_returning(&self.db)
            .await
            .map(Product::from)
            .map_err(|e| {
                error!("Failed to create product: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_by_id(&self, product_id: Uuid) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn get_by_ids(&self, product_ids: Vec<Uuid>) -> Result<Vec<Product>, CoreError> {
        if product_ids.is_empty() {
            return Ok(vec![]);
        }

        let products = ProductEntity::find()
            .filter(ProductColumn::Id.is_in(product_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get products by ids: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Product::from)
            .collect();

        Ok(products)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find()
            .filter(ProductColumn::NameKey.eq(normalize_name(name)))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn get_products(&self, filter: GetProductsFilter) -> Result<Vec<Product>, CoreError> {
        let mut query = ProductEntity::find();

        if let Some(category) = filter.category {
            query = query.filter(ProductColumn::Category.eq(category));
        }

        if let Some(needle) = filter.name_contains {
            query = query.filter(ProductColumn::NameKey.contains(normalize_name(&needle)));
        }

        let sort = filter.sort.as_deref().map(sort_columns).unwrap_or_default();
        if sort.is_empty() {
            query = query.order_by_asc(ProductColumn::NameKey);
        } else {
            for (column, order) in sort {
                query = query.order_by(column, order);
            }
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let products = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch products: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Product::from)
            .collect();

        Ok(products)
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        ProductEntity::update(active_model(product))
            .exec(&self.db)
            .await
            .map(Product::from)
            .map_err(|e| {
                error!("Failed to update product: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), CoreError> {
        ProductEntity::delete_by_id(product_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_columns() {
        let columns = sort_columns("-price, name,unknown");
        assert_eq!(columns.len(), 2);
        assert!(matches!(columns[0], (ProductColumn::Price, Order::Desc)));
        assert!(matches!(columns[1], (ProductColumn::NameKey, Order::Asc)));
    }
}
