use axum::extract::State;
use serde::{Deserialize, Serialize};
use smartfood_core::domain::chat::{
    entities::ChatResult, ports::ChatService, value_objects::SendMessageInput,
};
use utoipa::ToSchema;

use crate::application::{
    http::{
        chat::validators::SendMessageValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    user_context::CurrentUser,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SendMessageResponse {
    pub data: ChatResult,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Send chat message",
    description = "Sends a message to the assistant with the caller's profile as context. Replies are cached per message and profile. When the reply contains a shopping list it is returned in `extracted_list`.",
    params(
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = SendMessageResponse),
        (status = 404, description = "Conversation not found"),
        (status = 502, description = "Language model unavailable")
    ),
    request_body = SendMessageValidator
)]
pub async fn send_message(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidateJson(payload): ValidateJson<SendMessageValidator>,
) -> Result<Response<SendMessageResponse>, ApiError> {
    let result = state
        .service
        .send_message(
            user,
            SendMessageInput {
                conversation_id: payload.conversation_id,
                message: payload.message,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SendMessageResponse { data: result }))
}
