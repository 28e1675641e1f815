use uuid::Uuid;

use crate::domain::shopping_list::extraction::ExtractedShoppingList;

#[derive(Debug, Clone)]
pub struct GetShoppingListInput {
    pub shopping_list_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct CreateShoppingListInput {
    pub name: String,
    /// Supermarket name, created on first use.
    pub supermarket: Option<String>,
    pub budget: Option<f64>,
}

/// Absent fields are left untouched. An empty supermarket name unlinks it.
#[derive(Debug, Clone, Default)]
pub struct UpdateShoppingListInput {
    pub shopping_list_id: Uuid,
    pub name: Option<String>,
    pub supermarket: Option<String>,
    pub budget: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct DeleteShoppingListInput {
    pub shopping_list_id: Uuid,
}

/// Either `product_id` or `name` identifies the product; a name that is
/// not in the catalog yet creates the product.
#[derive(Debug, Clone, Default)]
pub struct AddProductToListInput {
    pub shopping_list_id: Uuid,
    pub product_id: Option<Uuid>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct RemoveProductFromListInput {
    pub shopping_list_id: Uuid,
    pub product_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct SetProductCheckedInput {
    pub shopping_list_id: Uuid,
    pub product_id: Uuid,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct SaveExtractedListInput {
    pub conversation_id: Option<Uuid>,
    pub list: ExtractedShoppingList,
}
