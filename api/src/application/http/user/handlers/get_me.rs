use serde::{Deserialize, Serialize};
use smartfood_core::domain::user::entities::User;
use utoipa::ToSchema;

use crate::application::{
    http::server::api_entities::{api_error::ApiError, response::Response},
    user_context::CurrentUser,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "user",
    summary = "Current user profile",
    params(
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, description = "Missing or unknown user id")
    )
)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Result<Response<GetMeResponse>, ApiError> {
    Ok(Response::OK(GetMeResponse { data: user }))
}
