use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    shopping_list::{
        entities::{
            ExtractedListChanges, ShoppingList, ShoppingListDetail, ShoppingListEntry,
            Supermarket,
        },
        value_objects::{
            AddProductToListInput, CreateShoppingListInput, DeleteShoppingListInput,
            GetShoppingListInput, RemoveProductFromListInput, SaveExtractedListInput,
            SetProductCheckedInput, UpdateShoppingListInput,
        },
    },
    user::entities::User,
};

pub trait ShoppingListRepository: Send + Sync {
    fn create_list(
        &self,
        list: ShoppingList,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn get_by_id(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    fn update_list(
        &self,
        list: ShoppingList,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn delete_list(
        &self,
        list_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Inserts the entry or overwrites quantity and price of the existing one.
    fn upsert_entry(
        &self,
        entry: ShoppingListEntry,
    ) -> impl Future<Output = Result<ShoppingListEntry, CoreError>> + Send;

    /// Returns whether the entry exists.
    fn set_entry_checked(
        &self,
        list_id: Uuid,
        product_id: Uuid,
        checked: bool,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Returns whether an entry was removed.
    fn remove_entry(
        &self,
        list_id: Uuid,
        product_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn get_entries(
        &self,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ShoppingListEntry>, CoreError>> + Send;

    /// Writes all of `changes` or none of them.
    fn save_extracted(
        &self,
        changes: ExtractedListChanges,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;
}

pub trait SupermarketRepository: Send + Sync {
    fn create_supermarket(
        &self,
        supermarket: Supermarket,
    ) -> impl Future<Output = Result<Supermarket, CoreError>> + Send;

    fn get_by_id(
        &self,
        supermarket_id: Uuid,
    ) -> impl Future<Output = Result<Option<Supermarket>, CoreError>> + Send;

    /// Case-insensitive lookup.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Supermarket>, CoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Supermarket>, CoreError>> + Send;
}

pub trait ShoppingListService: Send + Sync {
    fn get_shopping_lists(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    fn get_shopping_list(
        &self,
        user: User,
        input: GetShoppingListInput,
    ) -> impl Future<Output = Result<ShoppingListDetail, CoreError>> + Send;

    fn create_shopping_list(
        &self,
        user: User,
        input: CreateShoppingListInput,
    ) -> impl Future<Output = Result<ShoppingListDetail, CoreError>> + Send;

    fn update_shopping_list(
        &self,
        user: User,
        input: UpdateShoppingListInput,
    ) -> impl Future<Output = Result<ShoppingListDetail, CoreError>> + Send;

    fn delete_shopping_list(
        &self,
        user: User,
        input: DeleteShoppingListInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_product_to_list(
        &self,
        user: User,
        input: AddProductToListInput,
    ) -> impl Future<Output = Result<ShoppingListDetail, CoreError>> + Send;

    fn remove_product_from_list(
        &self,
        user: User,
        input: RemoveProductFromListInput,
    ) -> impl Future<Output = Result<ShoppingListDetail, CoreError>> + Send;

    fn set_product_checked(
        &self,
        user: User,
        input: SetProductCheckedInput,
    ) -> impl Future<Output = Result<ShoppingListDetail, CoreError>> + Send;

    /// Persists a list detected in a chat reply and links it to the
    /// conversation. Submitting the same list twice updates it in place.
    fn save_extracted_list(
        &self,
        user: User,
        input: SaveExtractedListInput,
    ) -> impl Future<Output = Result<ShoppingListDetail, CoreError>> + Send;

    fn get_supermarkets(&self) -> impl Future<Output = Result<Vec<Supermarket>, CoreError>> + Send;
}
