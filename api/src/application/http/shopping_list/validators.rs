use serde::{Deserialize, Serialize};
use smartfood_core::domain::shopping_list::extraction::{
    ExtractedProduct, ExtractedShoppingList, categories::categorize,
    product_line::DEFAULT_QUANTITY, round_cents,
};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateShoppingListValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "supermarket is too long"))]
    pub supermarket: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "budget cannot be negative"))]
    pub budget: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateShoppingListValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name cannot be empty"))]
    pub name: Option<String>,

    /// An empty string unlinks the supermarket.
    #[serde(default)]
    #[validate(length(max = 255, message = "supermarket is too long"))]
    pub supermarket: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "budget cannot be negative"))]
    pub budget: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetProductCheckedValidator {
    pub checked: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddProductToListValidator {
    /// Catalog product. Takes precedence over `name`.
    #[serde(default)]
    pub product_id: Option<Uuid>,

    /// Product name; created in the catalog when unknown.
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "quantity is too long"))]
    pub quantity: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: Option<f64>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("product name is required".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExtractedProductValidator {
    #[validate(
        length(max = 255, message = "product name is too long"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "quantity is too long"))]
    pub quantity: Option<String>,

    #[serde(default)]
    #[validate(length(max = 100, message = "category is too long"))]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: Option<f64>,
}

/// Body of `POST /shopping-lists/from-chat`. Accepts the `extracted_list`
/// returned by the chat endpoint as is, plus the conversation it came from.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveExtractedListValidator {
    #[serde(default)]
    pub conversation_id: Option<Uuid>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub supermarket: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "budget cannot be negative"))]
    pub budget: Option<f64>,

    #[validate(length(min = 1, message = "at least one product is required"), nested)]
    pub products: Vec<ExtractedProductValidator>,
}

impl SaveExtractedListValidator {
    pub fn into_extracted(self) -> (Option<Uuid>, ExtractedShoppingList) {
        let products: Vec<ExtractedProduct> = self
            .products
            .into_iter()
            .map(|product| {
                let category = product
                    .category
                    .filter(|category| !category.trim().is_empty())
                    .unwrap_or_else(|| categorize(&product.name).to_string());

                ExtractedProduct {
                    quantity: product
                        .quantity
                        .filter(|quantity| !quantity.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_QUANTITY.to_string()),
                    category,
                    price: product.price,
                    name: product.name,
                }
            })
            .collect();

        let total: f64 = products.iter().filter_map(|product| product.price).sum();

        (
            self.conversation_id,
            ExtractedShoppingList {
                name: self.name,
                supermarket: self.supermarket,
                budget: self.budget,
                products,
                estimated_total: round_cents(total),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_payload_is_accepted() {
        let payload: SaveExtractedListValidator = serde_json::from_str(
            r#"{
                "name": "Lista de Mercadona",
                "supermarket": "Mercadona",
                "budget": 30.0,
                "estimated_total": 2.15,
                "products": [
                    {"name": "Leche desnatada", "quantity": "1L", "category": "Lácteos", "price": 1.2},
                    {"name": "Pan integral", "price": 0.95}
                ]
            }"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());

        let (conversation_id, list) = payload.into_extracted();
        assert_eq!(conversation_id, None);
        assert_eq!(list.products[1].quantity, DEFAULT_QUANTITY);
        assert_eq!(list.products[1].category, "Panadería");
        assert_eq!(list.estimated_total, 2.15);
    }

    #[test]
    fn test_empty_product_list_is_rejected() {
        let payload: SaveExtractedListValidator =
            serde_json::from_str(r#"{"name": "Compra", "products": []}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_nested_products_are_validated() {
        let payload: SaveExtractedListValidator =
            serde_json::from_str(r#"{"products": [{"name": ""}]}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_blank_and_oversized_products_are_rejected() {
        let blank: SaveExtractedListValidator =
            serde_json::from_str(r#"{"products": [{"name": "Leche"}, {"name": "   "}]}"#).unwrap();
        assert!(blank.validate().is_err());

        let oversized = SaveExtractedListValidator {
            conversation_id: None,
            name: String::new(),
            supermarket: None,
            budget: None,
            products: vec![ExtractedProductValidator {
                name: "Leche".to_string(),
                quantity: Some("1".repeat(101)),
                category: None,
                price: None,
            }],
        };
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn test_negative_budget_is_rejected() {
        let payload = CreateShoppingListValidator {
            name: "Semana".to_string(),
            supermarket: None,
            budget: Some(-1.0),
        };
        assert!(payload.validate().is_err());
    }
}
