use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{RegisterUserInput, UpdateProfileInput},
    },
};

pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn update_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}

pub trait UserService: Send + Sync {
    fn register_user(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_user(&self, user_id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_profile(
        &self,
        user: User,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
