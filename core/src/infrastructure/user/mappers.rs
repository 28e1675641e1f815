use chrono::{TimeZone, Utc};

use crate::domain::user::entities::User;
use crate::entity::users::Model as UserModel;

impl From<&UserModel> for User {
    fn from(model: &UserModel) -> Self {
        User {
            id: model.id,
            name: model.name.clone(),
            email: model.email.clone(),
            allergens: model.allergens.clone(),
            preferences: model.preferences.clone(),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::from(&model)
    }
}
