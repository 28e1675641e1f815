use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{entities::Product, ports::ProductRepository},
    shopping_list::{
        entities::{ShoppingList, ShoppingListDetail, ShoppingListItem, Supermarket},
        extraction::{ExtractedProduct, ExtractedShoppingList},
        ports::{ShoppingListRepository, SupermarketRepository},
    },
};

pub async fn get_or_create_supermarket<SM>(
    supermarket_repository: &SM,
    name: &str,
) -> Result<Supermarket, CoreError>
where
    SM: SupermarketRepository,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid);
    }

    if let Some(supermarket) = supermarket_repository.get_by_name(name).await? {
        return Ok(supermarket);
    }

    debug!(name, "creating supermarket");
    supermarket_repository
        .create_supermarket(Supermarket::new(name.to_string()))
        .await
}

/// Resolves an optional supermarket name, `None` and blank names included.
pub async fn resolve_supermarket<SM>(
    supermarket_repository: &SM,
    name: Option<&str>,
) -> Result<Option<Supermarket>, CoreError>
where
    SM: SupermarketRepository,
{
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => Ok(Some(
            get_or_create_supermarket(supermarket_repository, name).await?,
        )),
        None => Ok(None),
    }
}

/// Loads the supermarket and the items of `list`. Entries whose product
/// vanished from the catalog are skipped.
pub async fn load_detail<SL, SM, P>(
    shopping_list_repository: &SL,
    supermarket_repository: &SM,
    product_repository: &P,
    list: ShoppingList,
) -> Result<ShoppingListDetail, CoreError>
where
    SL: ShoppingListRepository,
    SM: SupermarketRepository,
    P: ProductRepository,
{
    let supermarket = match list.supermarket_id {
        Some(supermarket_id) => supermarket_repository.get_by_id(supermarket_id).await?,
        None => None,
    };

    let entries = shopping_list_repository.get_entries(list.id).await?;
    let product_ids: Vec<Uuid> = entries.iter().map(|entry| entry.product_id).collect();

    let products: HashMap<Uuid, Product> = product_repository
        .get_by_ids(product_ids)
        .await?
        .into_iter()
        .map(|product| (product.id, product))
        .collect();

    let items = entries
        .into_iter()
        .filter_map(|entry| {
            let product = products.get(&entry.product_id)?.clone();
            Some(ShoppingListItem {
                product,
                quantity: entry.quantity,
                price: entry.price,
                checked: entry.checked,
            })
        })
        .collect();

    Ok(ShoppingListDetail::new(list, supermarket, items))
}

/// Longest name a list, product or supermarket may carry.
pub const MAX_NAME_CHARS: usize = 255;
/// Longest quantity or category label.
pub const MAX_LABEL_CHARS: usize = 100;

fn too_long(text: &str, max: usize) -> bool {
    text.trim().chars().count() > max
}

/// Checks one extracted product against what the catalog and the list
/// pivot can hold.
pub fn validate_extracted_product(product: &ExtractedProduct) -> Result<(), CoreError> {
    if product.name.trim().is_empty()
        || too_long(&product.name, MAX_NAME_CHARS)
        || too_long(&product.quantity, MAX_LABEL_CHARS)
        || too_long(&product.category, MAX_LABEL_CHARS)
    {
        return Err(CoreError::Invalid);
    }

    validate_amount(product.price)
}

/// Checks the whole extraction before anything is written.
pub fn validate_extracted_list(list: &ExtractedShoppingList) -> Result<(), CoreError> {
    if list.products.is_empty()
        || too_long(&list.name, MAX_NAME_CHARS)
        || list
            .supermarket
            .as_deref()
            .is_some_and(|supermarket| too_long(supermarket, MAX_NAME_CHARS))
    {
        return Err(CoreError::Invalid);
    }

    validate_amount(list.budget)?;
    list.products.iter().try_for_each(validate_extracted_product)
}

pub fn validate_amount(amount: Option<f64>) -> Result<(), CoreError> {
    match amount {
        Some(amount) if !amount.is_finite() || amount < 0.0 => Err(CoreError::Invalid),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, quantity: &str) -> ExtractedProduct {
        ExtractedProduct {
            name: name.to_string(),
            quantity: quantity.to_string(),
            category: "Otros".to_string(),
            price: Some(1.0),
        }
    }

    #[test]
    fn test_blank_product_name_is_invalid() {
        assert_eq!(
            validate_extracted_product(&product("   ", "1")),
            Err(CoreError::Invalid)
        );
    }

    #[test]
    fn test_labels_must_fit_their_columns() {
        assert!(validate_extracted_product(&product("Leche", &"x".repeat(100))).is_ok());
        assert_eq!(
            validate_extracted_product(&product("Leche", &"x".repeat(101))),
            Err(CoreError::Invalid)
        );
    }

    #[test]
    fn test_price_must_be_finite_and_positive() {
        let mut leche = product("Leche", "1");
        leche.price = Some(f64::NAN);
        assert_eq!(validate_extracted_product(&leche), Err(CoreError::Invalid));
        leche.price = Some(-0.5);
        assert_eq!(validate_extracted_product(&leche), Err(CoreError::Invalid));
    }
}
