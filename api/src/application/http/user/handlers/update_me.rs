use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::user::{
    entities::User, ports::UserService, value_objects::UpdateProfileInput,
};
use utoipa::ToSchema;

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        user::validators::UpdateProfileValidator,
    },
    user_context::CurrentUser,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateMeResponse {
    pub data: User,
}

#[utoipa::path(
    put,
    path = "/me",
    tag = "user",
    summary = "Update profile",
    description = "Updates name, allergens or preferences. Absent fields are left untouched.",
    params(
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = UpdateMeResponse)
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateMeResponse>, ApiError> {
    let user = state
        .service
        .update_profile(
            user,
            UpdateProfileInput {
                name: payload.name,
                allergens: payload.allergens,
                preferences: payload.preferences,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateMeResponse { data: user }))
}
