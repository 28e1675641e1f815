use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, conversation::entities::Conversation, product::entities::Product,
    shopping_list::extraction::round_cents,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub supermarket_id: Option<Uuid>,
    pub budget: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(
        user_id: Uuid,
        name: String,
        supermarket_id: Option<Uuid>,
        budget: Option<f64>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            name,
            supermarket_id,
            budget,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Supermarket {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Supermarket {
    pub fn new(name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: name.trim().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Row of the list/product pivot. At most one per `(shopping_list_id, product_id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListEntry {
    pub shopping_list_id: Uuid,
    pub product_id: Uuid,
    pub quantity: String,
    pub price: Option<f64>,
    /// Ticked off while shopping. Untouched by upserts.
    pub checked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingListEntry {
    pub fn new(
        shopping_list_id: Uuid,
        product_id: Uuid,
        quantity: String,
        price: Option<f64>,
    ) -> Self {
        let now = Utc::now();

        Self {
            shopping_list_id,
            product_id,
            quantity,
            price,
            checked: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Every row written when an extracted list is saved. Rows flagged or
/// listed as new are inserted, the rest are updated. Applied as one unit.
#[derive(Debug, Clone)]
pub struct ExtractedListChanges {
    pub conversation: Conversation,
    pub new_conversation: bool,
    pub list: ShoppingList,
    pub new_list: bool,
    pub new_supermarket: Option<Supermarket>,
    pub new_products: Vec<Product>,
    pub entries: Vec<ShoppingListEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListItem {
    pub product: Product,
    pub quantity: String,
    pub price: Option<f64>,
    pub checked: bool,
}

impl ShoppingListItem {
    /// Price on the list, falling back to the catalog price.
    pub fn effective_price(&self) -> Option<f64> {
        self.price.or(self.product.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListDetail {
    #[serde(flatten)]
    pub list: ShoppingList,
    pub supermarket: Option<Supermarket>,
    pub items: Vec<ShoppingListItem>,
    pub total: f64,
    pub over_budget: bool,
}

impl ShoppingListDetail {
    pub fn new(
        list: ShoppingList,
        supermarket: Option<Supermarket>,
        items: Vec<ShoppingListItem>,
    ) -> Self {
        let total = round_cents(items.iter().filter_map(|item| item.effective_price()).sum());
        let over_budget = list.budget.is_some_and(|budget| total > budget);

        Self {
            list,
            supermarket,
            items,
            total,
            over_budget,
        }
    }
}
