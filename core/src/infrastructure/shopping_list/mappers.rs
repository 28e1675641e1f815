use chrono::{TimeZone, Utc};

use crate::domain::shopping_list::entities::{ShoppingList, ShoppingListEntry, Supermarket};
use crate::entity::{
    shopping_list_products::Model as ShoppingListProductModel,
    shopping_lists::Model as ShoppingListModel, supermarkets::Model as SupermarketModel,
};

impl From<&ShoppingListModel> for ShoppingList {
    fn from(model: &ShoppingListModel) -> Self {
        ShoppingList {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            supermarket_id: model.supermarket_id,
            budget: model.budget,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<ShoppingListModel> for ShoppingList {
    fn from(model: ShoppingListModel) -> Self {
        ShoppingList::from(&model)
    }
}

impl From<&ShoppingListProductModel> for ShoppingListEntry {
    fn from(model: &ShoppingListProductModel) -> Self {
        ShoppingListEntry {
            shopping_list_id: model.shopping_list_id,
            product_id: model.product_id,
            quantity: model.quantity.clone(),
            price: model.price,
            checked: model.checked,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<ShoppingListProductModel> for ShoppingListEntry {
    fn from(model: ShoppingListProductModel) -> Self {
        ShoppingListEntry::from(&model)
    }
}

impl From<&SupermarketModel> for Supermarket {
    fn from(model: &SupermarketModel) -> Self {
        Supermarket {
            id: model.id,
            name: model.name.clone(),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<SupermarketModel> for Supermarket {
    fn from(model: SupermarketModel) -> Self {
        Supermarket::from(&model)
    }
}
