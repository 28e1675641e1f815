//! In-memory doubles of every port, shared by the service tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use uuid::Uuid;

use crate::{
    domain::{
        chat::{entities::LlmCompletion, gateway::ChatGateway, ports::LLMClient},
        common::{entities::app_errors::CoreError, normalize_name, services::Service},
        conversation::{
            entities::{ChatMessage, Conversation},
            ports::ConversationRepository,
        },
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
        product::{entities::Product, ports::ProductRepository, value_objects::GetProductsFilter},
        shopping_list::{
            entities::{ExtractedListChanges, ShoppingList, ShoppingListEntry, Supermarket},
            ports::{ShoppingListRepository, SupermarketRepository},
        },
        user::{entities::User, ports::UserRepository},
    },
    infrastructure::cache::memory::InMemoryKeyValueStore,
};

#[derive(Clone)]
pub struct FakeLlm {
    reply: Option<(String, u32)>,
    calls: Arc<AtomicUsize>,
}

impl FakeLlm {
    pub fn replying(content: &str, tokens_used: u32) -> Self {
        Self {
            reply: Some((content.to_string(), tokens_used)),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LLMClient for FakeLlm {
    async fn complete(
        &self,
        _system_prompt: String,
        _message: String,
    ) -> Result<LlmCompletion, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            Some((content, tokens_used)) => Ok(LlmCompletion {
                content: content.clone(),
                tokens_used: *tokens_used,
            }),
            None => Err(CoreError::ExternalServiceError("llm down".to_string())),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeUsers(Arc<Mutex<Vec<User>>>);

impl UserRepository for FakeUsers {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        self.0.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self.0.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_user(&self, user: User) -> Result<User, CoreError> {
        let mut users = self.0.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(CoreError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }
}

#[derive(Clone, Default)]
pub struct FakeConversations {
    conversations: Arc<Mutex<Vec<Conversation>>>,
    messages: Arc<Mutex<Vec<ChatMessage>>>,
}

impl FakeConversations {
    pub fn messages(&self, conversation_id: Uuid) -> Vec<ChatMessage> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect()
    }
}

impl ConversationRepository for FakeConversations {
    async fn create_conversation(
        &self,
        conversation: Conversation,
    ) -> Result<Conversation, CoreError> {
        self.conversations.lock().unwrap().push(conversation.clone());
        Ok(conversation)
    }

    async fn get_by_id(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Conversation>, CoreError> {
        Ok(self
            .conversations
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == conversation_id && c.is_owned_by(user_id))
            .cloned())
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Conversation>, CoreError> {
        Ok(self
            .conversations
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn update_conversation(
        &self,
        conversation: Conversation,
    ) -> Result<Conversation, CoreError> {
        let mut conversations = self.conversations.lock().unwrap();
        let slot = conversations
            .iter_mut()
            .find(|c| c.id == conversation.id)
            .ok_or(CoreError::NotFound)?;
        *slot = conversation.clone();
        Ok(conversation)
    }

    async fn delete_conversation(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), CoreError> {
        self.conversations
            .lock()
            .unwrap()
            .retain(|c| !(c.id == conversation_id && c.is_owned_by(user_id)));
        self.messages
            .lock()
            .unwrap()
            .retain(|m| m.conversation_id != conversation_id);
        Ok(())
    }

    async fn add_message(&self, message: ChatMessage) -> Result<ChatMessage, CoreError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn get_messages(&self, conversation_id: Uuid) -> Result<Vec<ChatMessage>, CoreError> {
        Ok(self.messages(conversation_id))
    }
}

/// Shares the conversation, supermarket and product stores so that
/// `save_extracted` lands in the same places the other fakes read from.
#[derive(Clone, Default)]
pub struct FakeShoppingLists {
    lists: Arc<Mutex<Vec<ShoppingList>>>,
    entries: Arc<Mutex<Vec<ShoppingListEntry>>>,
    conversations: FakeConversations,
    supermarkets: FakeSupermarkets,
    products: FakeProducts,
}

impl ShoppingListRepository for FakeShoppingLists {
    async fn create_list(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        self.lists.lock().unwrap().push(list.clone());
        Ok(list)
    }

    async fn get_by_id(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ShoppingList>, CoreError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == list_id && l.user_id == user_id)
            .cloned())
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<ShoppingList>, CoreError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_list(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let mut lists = self.lists.lock().unwrap();
        let slot = lists
            .iter_mut()
            .find(|l| l.id == list.id)
            .ok_or(CoreError::NotFound)?;
        *slot = list.clone();
        Ok(list)
    }

    async fn delete_list(&self, list_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        self.lists
            .lock()
            .unwrap()
            .retain(|l| !(l.id == list_id && l.user_id == user_id));
        self.entries
            .lock()
            .unwrap()
            .retain(|e| e.shopping_list_id != list_id);
        Ok(())
    }

    async fn upsert_entry(&self, entry: ShoppingListEntry) -> Result<ShoppingListEntry, CoreError> {
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|e| {
            e.shopping_list_id == entry.shopping_list_id && e.product_id == entry.product_id
        }) {
            Some(existing) => {
                existing.quantity = entry.quantity.clone();
                existing.price = entry.price;
                existing.updated_at = entry.updated_at;
                Ok(existing.clone())
            }
            None => {
                entries.push(entry.clone());
                Ok(entry)
            }
        }
    }

    async fn set_entry_checked(
        &self,
        list_id: Uuid,
        product_id: Uuid,
        checked: bool,
    ) -> Result<bool, CoreError> {
        let mut entries = self.entries.lock().unwrap();
        match entries
            .iter_mut()
            .find(|e| e.shopping_list_id == list_id && e.product_id == product_id)
        {
            Some(entry) => {
                entry.checked = checked;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_entry(&self, list_id: Uuid, product_id: Uuid) -> Result<bool, CoreError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !(e.shopping_list_id == list_id && e.product_id == product_id));
        Ok(entries.len() != before)
    }

    async fn get_entries(&self, list_id: Uuid) -> Result<Vec<ShoppingListEntry>, CoreError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.shopping_list_id == list_id)
            .cloned()
            .collect())
    }
    async fn save_extracted(
        &self,
        changes: ExtractedListChanges,
    ) -> Result<ShoppingList, CoreError> {
        if let Some(supermarket) = changes.new_supermarket {
            self.supermarkets.create_supermarket(supermarket).await?;
        }
        for product in changes.new_products {
            self.products.create_product(product).await?;
        }

        let list = if changes.new_list {
            self.create_list(changes.list).await?
        } else {
            self.update_list(changes.list).await?
        };

        if changes.new_conversation {
            self.conversations
                .create_conversation(changes.conversation)
                .await?;
        } else {
            self.conversations
                .update_conversation(changes.conversation)
                .await?;
        }

        for entry in changes.entries {
            self.upsert_entry(entry).await?;
        }

        Ok(list)
    }
}

#[derive(Clone, Default)]
pub struct FakeSupermarkets(Arc<Mutex<Vec<Supermarket>>>);

impl SupermarketRepository for FakeSupermarkets {
    async fn create_supermarket(&self, supermarket: Supermarket) -> Result<Supermarket, CoreError> {
        self.0.lock().unwrap().push(supermarket.clone());
        Ok(supermarket)
    }

    async fn get_by_id(&self, supermarket_id: Uuid) -> Result<Option<Supermarket>, CoreError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == supermarket_id)
            .cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Supermarket>, CoreError> {
        let key = normalize_name(name);
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|s| normalize_name(&s.name) == key)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Supermarket>, CoreError> {
        Ok(self.0.lock().unwrap().clone())
    }
}

#[derive(Clone, Default)]
pub struct FakeProducts(Arc<Mutex<Vec<Product>>>);

impl ProductRepository for FakeProducts {
    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        self.0.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, product_id: Uuid) -> Result<Option<Product>, CoreError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == product_id)
            .cloned())
    }

    async fn get_by_ids(&self, product_ids: Vec<Uuid>) -> Result<Vec<Product>, CoreError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|p| product_ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>, CoreError> {
        let key = normalize_name(name);
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|p| normalize_name(&p.name) == key)
            .cloned())
    }

    async fn get_products(&self, filter: GetProductsFilter) -> Result<Vec<Product>, CoreError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|category| &p.category == category)
            })
            .filter(|p| {
                filter
                    .name_contains
                    .as_ref()
                    .is_none_or(|needle| normalize_name(&p.name).contains(&normalize_name(needle)))
            })
            .cloned()
            .collect())
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        let mut products = self.0.lock().unwrap();
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(CoreError::NotFound)?;
        *slot = product.clone();
        Ok(product)
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), CoreError> {
        self.0.lock().unwrap().retain(|p| p.id != product_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeHealth;

impl HealthCheckRepository for FakeHealth {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus::up())
    }
}

pub type TestService = Service<
    FakeUsers,
    FakeConversations,
    FakeShoppingLists,
    FakeSupermarkets,
    FakeProducts,
    FakeHealth,
    InMemoryKeyValueStore,
    FakeLlm,
>;

/// Handles onto the repositories wired into a [`TestService`].
#[derive(Clone)]
pub struct Fakes {
    pub users: FakeUsers,
    pub conversations: FakeConversations,
    pub shopping_lists: FakeShoppingLists,
    pub supermarkets: FakeSupermarkets,
    pub products: FakeProducts,
}

pub fn test_service(llm: FakeLlm) -> (TestService, Fakes) {
    let conversations = FakeConversations::default();
    let supermarkets = FakeSupermarkets::default();
    let products = FakeProducts::default();
    let fakes = Fakes {
        users: FakeUsers::default(),
        shopping_lists: FakeShoppingLists {
            conversations: conversations.clone(),
            supermarkets: supermarkets.clone(),
            products: products.clone(),
            ..Default::default()
        },
        conversations,
        supermarkets,
        products,
    };

    let service = Service::new(
        fakes.users.clone(),
        fakes.conversations.clone(),
        fakes.shopping_lists.clone(),
        fakes.supermarkets.clone(),
        fakes.products.clone(),
        FakeHealth,
        ChatGateway::new(
            InMemoryKeyValueStore::default(),
            llm,
            Duration::from_secs(3600),
        ),
    );

    (service, fakes)
}

pub async fn test_user(fakes: &Fakes) -> User {
    let user = User::new(
        "Ana".to_string(),
        format!("ana+{}@example.com", Uuid::new_v4()),
        vec!["gluten".to_string()],
        vec![],
    );

    fakes.users.create_user(user).await.unwrap()
}
