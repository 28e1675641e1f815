use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use smartfood_core::domain::conversation::{
    entities::ConversationWithMessages, ports::ConversationService,
    value_objects::GetConversationInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::CurrentUser,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConversationResponse {
    pub data: ConversationWithMessages,
}

#[utoipa::path(
    get,
    path = "/{conversation_id}",
    tag = "conversation",
    summary = "Get conversation",
    description = "Returns a conversation with its messages in chronological order.",
    params(
        ("conversation_id" = Uuid, Path, description = "Conversation id"),
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = GetConversationResponse),
        (status = 404, description = "Conversation not found")
    )
)]
pub async fn get_conversation(
    Path(conversation_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response<GetConversationResponse>, ApiError> {
    let conversation = state
        .service
        .get_conversation(user, GetConversationInput { conversation_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetConversationResponse { data: conversation }))
}
