use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::Product,
        value_objects::{
            CreateProductInput, DeleteProductInput, GetProductInput, GetProductsFilter,
            UpdateProductInput,
        },
    },
};

pub trait ProductRepository: Send + Sync {
    fn create_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn get_by_id(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_by_ids(
        &self,
        product_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    /// Case-insensitive lookup on the product name.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn get_products(
        &self,
        filter: GetProductsFilter,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn update_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(&self, product_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ProductService: Send + Sync {
    fn get_products(
        &self,
        filter: GetProductsFilter,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        input: GetProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn create_product(
        &self,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update_product(
        &self,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        input: DeleteProductInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
