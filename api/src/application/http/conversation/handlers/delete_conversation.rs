use axum::extract::{Path, State};
use smartfood_core::domain::conversation::{
    ports::ConversationService, value_objects::DeleteConversationInput,
};
use uuid::Uuid;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user_context::CurrentUser,
};

#[utoipa::path(
    delete,
    path = "/{conversation_id}",
    tag = "conversation",
    summary = "Delete conversation",
    description = "Deletes a conversation and its messages. A linked shopping list is kept.",
    params(
        ("conversation_id" = Uuid, Path, description = "Conversation id"),
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 204, description = "Conversation deleted"),
        (status = 404, description = "Conversation not found")
    )
)]
pub async fn delete_conversation(
    Path(conversation_id): Path<Uuid>,
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_conversation(user, DeleteConversationInput { conversation_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
