use tracing::info;

use crate::domain::{
    chat::ports::{KeyValueStore, LLMClient},
    common::{entities::app_errors::CoreError, normalize_name, services::Service},
    conversation::{entities::Conversation, ports::ConversationRepository},
    health::ports::HealthCheckRepository,
    product::{
        entities::Product,
        helpers::{catalog_category, get_or_create_product},
        ports::ProductRepository,
    },
    shopping_list::{
        entities::{
            ExtractedListChanges, ShoppingList, ShoppingListDetail, ShoppingListEntry,
            Supermarket,
        },
        extraction::{DEFAULT_LIST_NAME, product_line::DEFAULT_QUANTITY},
        helpers::{load_detail, resolve_supermarket, validate_amount, validate_extracted_list},
        ports::{ShoppingListRepository, ShoppingListService, SupermarketRepository},
        value_objects::{
            AddProductToListInput, CreateShoppingListInput, DeleteShoppingListInput,
            GetShoppingListInput, RemoveProductFromListInput, SaveExtractedListInput,
            SetProductCheckedInput, UpdateShoppingListInput,
        },
    },
    user::{entities::User, ports::UserRepository},
};

fn quantity_or_default(quantity: Option<String>) -> String {
    quantity
        .map(|quantity| quantity.trim().to_string())
        .filter(|quantity| !quantity.is_empty())
        .unwrap_or_else(|| DEFAULT_QUANTITY.to_string())
}

impl<U, CV, SL, SM, P, HC, KV, LLM> ShoppingListService for Service<U, CV, SL, SM, P, HC, KV, LLM>
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
    async fn get_shopping_lists(&self, user: User) -> Result<Vec<ShoppingList>, CoreError> {
        self.shopping_list_repository.get_by_user(user.id).await
    }

    async fn get_shopping_list(
        &self,
        user: User,
        input: GetShoppingListInput,
    ) -> Result<ShoppingListDetail, CoreError> {
        let list = self
            .shopping_list_repository
            .get_by_id(input.shopping_list_id, user.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        load_detail(
            &self.shopping_list_repository,
            &self.supermarket_repository,
            &self.product_repository,
            list,
        )
        .await
    }

    async fn create_shopping_list(
        &self,
        user: User,
        input: CreateShoppingListInput,
    ) -> Result<ShoppingListDetail, CoreError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid);
        }
        validate_amount(input.budget)?;

        let supermarket =
            resolve_supermarket(&self.supermarket_repository, input.supermarket.as_deref())
                .await?;

        let list = self
            .shopping_list_repository
            .create_list(ShoppingList::new(
                user.id,
                name,
                supermarket.as_ref().map(|supermarket| supermarket.id),
                input.budget,
            ))
            .await?;

        Ok(ShoppingListDetail::new(list, supermarket, vec![]))
    }

    async fn update_shopping_list(
        &self,
        user: User,
        input: UpdateShoppingListInput,
    ) -> Result<ShoppingListDetail, CoreError> {
        let mut list = self
            .shopping_list_repository
            .get_by_id(input.shopping_list_id, user.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::Invalid);
            }
            list.name = name;
        }

        if let Some(supermarket) = input.supermarket {
            list.supermarket_id =
                resolve_supermarket(&self.supermarket_repository, Some(supermarket.as_str()))
                    .await?
                    .map(|supermarket| supermarket.id);
        }

        if input.budget.is_some() {
            validate_amount(input.budget)?;
            list.budget = input.budget;
        }

        list.updated_at = chrono::Utc::now();
        let list = self.shopping_list_repository.update_list(list).await?;

        load_detail(
            &self.shopping_list_repository,
            &self.supermarket_repository,
            &self.product_repository,
            list,
        )
        .await
    }

    async fn delete_shopping_list(
        &self,
        user: User,
        input: DeleteShoppingListInput,
    ) -> Result<(), CoreError> {
        self.shopping_list_repository
            .get_by_id(input.shopping_list_id, user.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.shopping_list_repository
            .delete_list(input.shopping_list_id, user.id)
            .await
    }

    async fn add_product_to_list(
        &self,
        user: User,
        input: AddProductToListInput,
    ) -> Result<ShoppingListDetail, CoreError> {
        validate_amount(input.price)?;

        let list = self
            .shopping_list_repository
            .get_by_id(input.shopping_list_id, user.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let product = match (input.product_id, input.name.as_deref()) {
            (Some(product_id), _) => self
                .product_repository
                .get_by_id(product_id)
                .await?
                .ok_or(CoreError::NotFound)?,
            (None, Some(name)) => {
                get_or_create_product(
                    &self.product_repository,
                    name,
                    input.category.as_deref(),
                    input.price,
                )
                .await?
            }
            (None, None) => return Err(CoreError::Invalid),
        };

        self.shopping_list_repository
            .upsert_entry(ShoppingListEntry::new(
                list.id,
                product.id,
                quantity_or_default(input.quantity),
                input.price,
            ))
            .await?;

        load_detail(
            &self.shopping_list_repository,
            &self.supermarket_repository,
            &self.product_repository,
            list,
        )
        .await
    }

    async fn remove_product_from_list(
        &self,
        user: User,
        input: RemoveProductFromListInput,
    ) -> Result<ShoppingListDetail, CoreError> {
        let list = self
            .shopping_list_repository
            .get_by_id(input.shopping_list_id, user.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let removed = self
            .shopping_list_repository
            .remove_entry(list.id, input.product_id)
            .await?;
        if !removed {
            return Err(CoreError::NotFound);
        }

        load_detail(
            &self.shopping_list_repository,
            &self.supermarket_repository,
            &self.product_repository,
            list,
        )
        .await
    }

    async fn set_product_checked(
        &self,
        user: User,
        input: SetProductCheckedInput,
    ) -> Result<ShoppingListDetail, CoreError> {
        let list = self
            .shopping_list_repository
            .get_by_id(input.shopping_list_id, user.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let found = self
            .shopping_list_repository
            .set_entry_checked(list.id, input.product_id, input.checked)
            .await?;
        if !found {
            return Err(CoreError::NotFound);
        }

        load_detail(
            &self.shopping_list_repository,
            &self.supermarket_repository,
            &self.product_repository,
            list,
        )
        .await
    }

    async fn save_extracted_list(
        &self,
        user: User,
        input: SaveExtractedListInput,
    ) -> Result<ShoppingListDetail, CoreError> {
        let extracted = input.list;
        validate_extracted_list(&extracted)?;

        let name = match extracted.name.trim() {
            "" => DEFAULT_LIST_NAME.to_string(),
            name => name.to_string(),
        };
        let now = chrono::Utc::now();

        let (mut conversation, new_conversation) = match input.conversation_id {
            Some(conversation_id) => (
                self.conversation_repository
                    .get_by_id(conversation_id, user.id)
                    .await?
                    .ok_or(CoreError::NotFound)?,
                false,
            ),
            None => (Conversation::new(user.id, name.clone()), true),
        };

        let (supermarket_id, new_supermarket) = match extracted
            .supermarket
            .as_deref()
            .map(str::trim)
            .filter(|supermarket| !supermarket.is_empty())
        {
            Some(supermarket) => match self.supermarket_repository.get_by_name(supermarket).await? {
                Some(existing) => (Some(existing.id), None),
                None => {
                    let created = Supermarket::new(supermarket.to_string());
                    (Some(created.id), Some(created))
                }
            },
            None => (None, None),
        };

        let linked = match conversation.shopping_list_id {
            Some(list_id) => {
                self.shopping_list_repository
                    .get_by_id(list_id, user.id)
                    .await?
            }
            None => None,
        };

        let (list, new_list) = match linked {
            Some(mut list) => {
                list.name = name.clone();
                list.budget = extracted.budget.or(list.budget);
                list.supermarket_id = supermarket_id.or(list.supermarket_id);
                list.updated_at = now;
                (list, false)
            }
            None => (
                ShoppingList::new(user.id, name.clone(), supermarket_id, extracted.budget),
                true,
            ),
        };

        conversation.shopping_list_id = Some(list.id);
        conversation.name = name;
        conversation.updated_at = now;

        let mut new_products: Vec<Product> = Vec::new();
        let mut entries: Vec<ShoppingListEntry> = Vec::new();

        for product in extracted.products {
            let product_name = product.name.trim();
            let key = normalize_name(product_name);

            let pending = new_products
                .iter()
                .find(|pending| normalize_name(&pending.name) == key)
                .map(|pending| pending.id);

            let product_id = match pending {
                Some(product_id) => product_id,
                None => match self.product_repository.get_by_name(product_name).await? {
                    Some(existing) => existing.id,
                    None => {
                        let created = Product::new(
                            product_name.to_string(),
                            catalog_category(product_name, Some(product.category.as_str())),
                            product.price,
                        );
                        let product_id = created.id;
                        new_products.push(created);
                        product_id
                    }
                },
            };

            let entry = ShoppingListEntry::new(
                list.id,
                product_id,
                quantity_or_default(Some(product.quantity)),
                product.price,
            );
            match entries
                .iter_mut()
                .find(|existing| existing.product_id == product_id)
            {
                Some(existing) => *existing = entry,
                None => entries.push(entry),
            }
        }

        let list = self
            .shopping_list_repository
            .save_extracted(ExtractedListChanges {
                conversation,
                new_conversation,
                list,
                new_list,
                new_supermarket,
                new_products,
                entries,
            })
            .await?;

        info!(shopping_list_id = %list.id, user_id = %user.id, "saved extracted shopping list");

        load_detail(
            &self.shopping_list_repository,
            &self.supermarket_repository,
            &self.product_repository,
            list,
        )
        .await
    }

    async fn get_supermarkets(&self) -> Result<Vec<Supermarket>, CoreError> {
        self.supermarket_repository.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::fakes::{FakeLlm, test_service, test_user},
        product::ports::ProductRepository,
        shopping_list::extraction::{ExtractedShoppingList, extract_shopping_list},
    };

    fn extracted() -> ExtractedShoppingList {
        extract_shopping_list(
            "Tu lista para Mercadona:\n- Leche desnatada (1L) - 1.20€\n- Pan integral - 0.95€",
            &[],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_extracted_list_creates_everything() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;

        let detail = service
            .save_extracted_list(
                user.clone(),
                SaveExtractedListInput {
                    conversation_id: None,
                    list: extracted(),
                },
            )
            .await
            .unwrap();

        assert_eq!(detail.list.name, "Lista de Mercadona");
        assert_eq!(detail.supermarket.unwrap().name, "Mercadona");
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.total, 2.15);

        let conversations = fakes.conversations.get_by_user(user.id).await.unwrap();
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].name, "Lista de Mercadona");
        assert_eq!(conversations[0].shopping_list_id, Some(detail.list.id));
    }

    #[tokio::test]
    async fn test_resubmitting_does_not_duplicate() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;

        let first = service
            .save_extracted_list(
                user.clone(),
                SaveExtractedListInput {
                    conversation_id: None,
                    list: extracted(),
                },
            )
            .await
            .unwrap();
        let conversation_id = fakes.conversations.get_by_user(user.id).await.unwrap()[0].id;

        let mut again = extracted();
        again.products[0].quantity = "2L".to_string();
        let second = service
            .save_extracted_list(
                user.clone(),
                SaveExtractedListInput {
                    conversation_id: Some(conversation_id),
                    list: again,
                },
            )
            .await
            .unwrap();

        assert_eq!(second.list.id, first.list.id);
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[0].quantity, "2L");

        let catalog = fakes
            .products
            .get_products(Default::default())
            .await
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(service.get_supermarkets().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_product_writes_nothing() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;

        let mut blank = extracted();
        blank.products[1].name = "   ".to_string();
        let mut oversized = extracted();
        oversized.products[1].quantity = "1".repeat(101);

        for list in [blank, oversized] {
            let result = service
                .save_extracted_list(
                    user.clone(),
                    SaveExtractedListInput {
                        conversation_id: None,
                        list,
                    },
                )
                .await;
            assert_eq!(result.unwrap_err(), CoreError::Invalid);
        }

        assert!(service.get_shopping_lists(user.clone()).await.unwrap().is_empty());
        assert!(fakes.conversations.get_by_user(user.id).await.unwrap().is_empty());
        assert!(service.get_supermarkets().await.unwrap().is_empty());
        let catalog = fakes
            .products
            .get_products(Default::default())
            .await
            .unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_product_in_one_extraction_is_stored_once() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;

        let mut list = extracted();
        let mut repeated = list.products[0].clone();
        repeated.name = "leche DESNATADA".to_string();
        repeated.quantity = "3L".to_string();
        list.products.push(repeated);

        let detail = service
            .save_extracted_list(
                user,
                SaveExtractedListInput {
                    conversation_id: None,
                    list,
                },
            )
            .await
            .unwrap();

        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.items[0].quantity, "3L");
        let catalog = fakes
            .products
            .get_products(Default::default())
            .await
            .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_existing_catalog_product_is_reused_case_insensitively() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;
        let existing = fakes
            .products
            .create_product(crate::domain::product::entities::Product::new(
                "LECHE DESNATADA".to_string(),
                "Lácteos".to_string(),
                None,
            ))
            .await
            .unwrap();

        let detail = service
            .save_extracted_list(
                user,
                SaveExtractedListInput {
                    conversation_id: None,
                    list: extracted(),
                },
            )
            .await
            .unwrap();

        assert_eq!(detail.items[0].product.id, existing.id);
        assert_eq!(detail.items[0].price, Some(1.20));
    }

    #[tokio::test]
    async fn test_add_and_remove_product() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;

        let list = service
            .create_shopping_list(
                user.clone(),
                CreateShoppingListInput {
                    name: "Cena".to_string(),
                    supermarket: Some("lidl".to_string()),
                    budget: Some(5.0),
                },
            )
            .await
            .unwrap();

        let detail = service
            .add_product_to_list(
                user.clone(),
                AddProductToListInput {
                    shopping_list_id: list.list.id,
                    name: Some("Tomates".to_string()),
                    price: Some(2.5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].quantity, DEFAULT_QUANTITY);
        assert_eq!(detail.items[0].product.category, "Verduras");

        let product_id = detail.items[0].product.id;
        let detail = service
            .remove_product_from_list(
                user.clone(),
                RemoveProductFromListInput {
                    shopping_list_id: list.list.id,
                    product_id,
                },
            )
            .await
            .unwrap();
        assert!(detail.items.is_empty());

        let again = service
            .remove_product_from_list(
                user,
                RemoveProductFromListInput {
                    shopping_list_id: list.list.id,
                    product_id,
                },
            )
            .await;
        assert_eq!(again.unwrap_err(), CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_checked_survives_resaving() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;

        let first = service
            .save_extracted_list(
                user.clone(),
                SaveExtractedListInput {
                    conversation_id: None,
                    list: extracted(),
                },
            )
            .await
            .unwrap();
        assert!(first.items.iter().all(|item| !item.checked));

        let leche = first.items[0].product.id;
        let detail = service
            .set_product_checked(
                user.clone(),
                SetProductCheckedInput {
                    shopping_list_id: first.list.id,
                    product_id: leche,
                    checked: true,
                },
            )
            .await
            .unwrap();
        assert!(detail.items[0].checked);
        assert!(!detail.items[1].checked);

        let conversation_id = fakes.conversations.get_by_user(user.id).await.unwrap()[0].id;
        let again = service
            .save_extracted_list(
                user.clone(),
                SaveExtractedListInput {
                    conversation_id: Some(conversation_id),
                    list: extracted(),
                },
            )
            .await
            .unwrap();
        assert!(again.items[0].checked);

        let missing = service
            .set_product_checked(
                user,
                SetProductCheckedInput {
                    shopping_list_id: first.list.id,
                    product_id: uuid::Uuid::new_v4(),
                    checked: true,
                },
            )
            .await;
        assert_eq!(missing.unwrap_err(), CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_lists_are_scoped_to_their_owner() {
        let (service, fakes) = test_service(FakeLlm::replying("ok", 1));
        let user = test_user(&fakes).await;
        let list = service
            .create_shopping_list(
                user.clone(),
                CreateShoppingListInput {
                    name: "Privada".to_string(),
                    supermarket: None,
                    budget: None,
                },
            )
            .await
            .unwrap();

        let mut stranger = user;
        stranger.id = uuid::Uuid::new_v4();

        let result = service
            .get_shopping_list(
                stranger,
                GetShoppingListInput {
                    shopping_list_id: list.list.id,
                },
            )
            .await;
        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }
}
