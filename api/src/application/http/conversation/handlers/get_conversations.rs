use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::conversation::{entities::Conversation, ports::ConversationService};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::CurrentUser,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConversationsResponse {
    pub data: Vec<Conversation>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "conversation",
    summary = "List conversations",
    description = "Returns the caller's conversations, most recently active first.",
    params(
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = GetConversationsResponse)
    )
)]
pub async fn get_conversations(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response<GetConversationsResponse>, ApiError> {
    let conversations = state
        .service
        .get_conversations(user)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetConversationsResponse {
        data: conversations,
    }))
}
