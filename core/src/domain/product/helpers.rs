use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{entities::Product, ports::ProductRepository},
    shopping_list::extraction::categories::categorize,
};

/// The given category, or the one guessed from `name` when it is blank.
pub fn catalog_category(name: &str, category: Option<&str>) -> String {
    category
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| categorize(name).to_string())
}

/// Looks a product up by name and creates it when missing, so the catalog
/// never holds two rows for the same name.
pub async fn get_or_create_product<P>(
    product_repository: &P,
    name: &str,
    category: Option<&str>,
    price: Option<f64>,
) -> Result<Product, CoreError>
where
    P: ProductRepository,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid);
    }

    if let Some(product) = product_repository.get_by_name(name).await? {
        return Ok(product);
    }

    let category = catalog_category(name, category);

    debug!(name, category = %category, "creating catalog product");
    product_repository
        .create_product(Product::new(name.to_string(), category, price))
        .await
}
