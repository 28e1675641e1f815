use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::user::{
    entities::User, ports::UserService, value_objects::RegisterUserInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::RegisterUserValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterUserResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Register user",
    description = "Creates a user profile. The returned id is sent as the x-user-id header on later requests.",
    responses(
        (status = 201, body = RegisterUserResponse),
        (status = 400, description = "Email already registered")
    ),
    request_body = RegisterUserValidator
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterUserValidator>,
) -> Result<Response<RegisterUserResponse>, ApiError> {
    let user = state
        .service
        .register_user(RegisterUserInput {
            name: payload.name,
            email: payload.email,
            allergens: payload.allergens,
            preferences: payload.preferences,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterUserResponse { data: user }))
}
