use crate::domain::{
    chat::ports::{KeyValueStore, LLMClient},
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::ConversationRepository,
    health::ports::HealthCheckRepository,
    product::{
        entities::Product,
        ports::{ProductRepository, ProductService},
        value_objects::{
            CreateProductInput, DeleteProductInput, GetProductInput, GetProductsFilter,
            UpdateProductInput,
        },
    },
    shopping_list::{
        extraction::categories::categorize,
        helpers::validate_amount,
        ports::{ShoppingListRepository, SupermarketRepository},
    },
    user::ports::UserRepository,
};

pub const MAX_PAGE_SIZE: u64 = 100;

impl<U, CV, SL, SM, P, HC, KV, LLM> ProductService for Service<U, CV, SL, SM, P, HC, KV, LLM>
where
    U: UserRepository,
    CV: ConversationRepository,
    SL: ShoppingListRepository,
    SM: SupermarketRepository,
    P: ProductRepository,
    HC: HealthCheckRepository,
    KV: KeyValueStore,
    LLM: LLMClient,
{
    async fn get_products(&self, filter: GetProductsFilter) -> Result<Vec<Product>, CoreError> {
        if filter
            .limit
            .is_some_and(|limit| limit == 0 || limit > MAX_PAGE_SIZE)
        {
            return Err(CoreError::InvalidPagination);
        }

        self.product_repository.get_products(filter).await
    }

    async fn get_product(&self, input: GetProductInput) -> Result<Product, CoreError> {
        self.product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_product(&self, input: CreateProductInput) -> Result<Product, CoreError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid);
        }
        validate_amount(input.price)?;

        if self.product_repository.get_by_name(&name).await?.is_some() {
            return Err(CoreError::Invalid);
        }

        let category = input
            .category
            .map(|category| category.trim().to_string())
            .filter(|category| !category.is_empty())
            .unwrap_or_else(|| categorize(&name).to_string());

        self.product_repository
            .create_product(Product::new(name, category, input.price))
            .await
    }

    async fn update_product(&self, input: UpdateProductInput) -> Result<Product, CoreError> {
        let mut product = self
            .product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::Invalid);
            }

            // Renaming onto another product's name would break catalog uniqueness.
            if let Some(existing) = self.product_repository.get_by_name(&name).await?
                && existing.id != product.id
            {
                return Err(CoreError::Invalid);
            }

            product.name = name;
        }

        if let Some(category) = input.category {
            product.category = category.trim().to_string();
        }

        if input.price.is_some() {
            validate_amount(input.price)?;
            product.price = input.price;
        }

        product.updated_at = chrono::Utc::now();

        self.product_repository.update_product(product).await
    }

    async fn delete_product(&self, input: DeleteProductInput) -> Result<(), CoreError> {
        self.product_repository
            .get_by_id(input.product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.product_repository
            .delete_product(input.product_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::fakes::{FakeLlm, test_service};

    #[tokio::test]
    async fn test_create_product_defaults_category_and_rejects_duplicates() {
        let (service, _) = test_service(FakeLlm::replying("ok", 1));

        let product = service
            .create_product(CreateProductInput {
                name: " Manzanas golden ".to_string(),
                category: None,
                price: Some(2.3),
            })
            .await
            .unwrap();
        assert_eq!(product.name, "Manzanas golden");
        assert_eq!(product.category, "Frutas");

        let duplicate = service
            .create_product(CreateProductInput {
                name: "MANZANAS GOLDEN".to_string(),
                category: Some("Frutas".to_string()),
                price: None,
            })
            .await;
        assert_eq!(duplicate.unwrap_err(), CoreError::Invalid);
    }

    #[tokio::test]
    async fn test_update_and_delete_product() {
        let (service, _) = test_service(FakeLlm::replying("ok", 1));
        let product = service
            .create_product(CreateProductInput {
                name: "Arroz".to_string(),
                category: None,
                price: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_product(UpdateProductInput {
                product_id: product.id,
                price: Some(1.15),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.price, Some(1.15));
        assert_eq!(updated.category, "Despensa");

        let negative = service
            .update_product(UpdateProductInput {
                product_id: product.id,
                price: Some(-1.0),
                ..Default::default()
            })
            .await;
        assert_eq!(negative.unwrap_err(), CoreError::Invalid);

        service
            .delete_product(DeleteProductInput {
                product_id: product.id,
            })
            .await
            .unwrap();
        let missing = service
            .get_product(GetProductInput {
                product_id: product.id,
            })
            .await;
        assert_eq!(missing.unwrap_err(), CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_filters_and_page_size() {
        let (service, _) = test_service(FakeLlm::replying("ok", 1));
        for name in ["Leche entera", "Leche desnatada", "Pan de molde"] {
            service
                .create_product(CreateProductInput {
                    name: name.to_string(),
                    category: None,
                    price: None,
                })
                .await
                .unwrap();
        }

        let dairy = service
            .get_products(GetProductsFilter {
                category: Some("Lácteos".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(dairy.len(), 2);

        let named = service
            .get_products(GetProductsFilter {
                name_contains: Some("MOLDE".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(named.len(), 1);

        let too_big = service
            .get_products(GetProductsFilter {
                limit: Some(MAX_PAGE_SIZE + 1),
                ..Default::default()
            })
            .await;
        assert_eq!(too_big.unwrap_err(), CoreError::InvalidPagination);
    }
}
