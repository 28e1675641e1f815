use chrono::{TimeZone, Utc};

use crate::domain::product::entities::Product;
use crate::entity::products::Model as ProductModel;

impl From<&ProductModel> for Product {
    fn from(model: &ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name.clone(),
            category: model.category.clone(),
            price: model.price,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product::from(&model)
    }
}
