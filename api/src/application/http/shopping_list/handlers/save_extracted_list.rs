use axum::extract::State;
use smartfood_core::domain::shopping_list::{
    ports::ShoppingListService, value_objects::SaveExtractedListInput,
};

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        shopping_list::{
            handlers::get_shopping_list::ShoppingListDetailResponse,
            validators::SaveExtractedListValidator,
        },
    },
    user_context::CurrentUser,
};

#[utoipa::path(
    post,
    path = "/from-chat",
    tag = "shopping-list",
    summary = "Save list from chat",
    description = "Persists a list extracted from a chat reply and links it to the conversation. Saving again for the same conversation updates the linked list instead of creating a new one.",
    params(
        ("x-user-id" = String, Header, description = "Caller user id"),
    ),
    responses(
        (status = 200, body = ShoppingListDetailResponse),
        (status = 404, description = "Conversation not found")
    ),
    request_body = SaveExtractedListValidator
)]
pub async fn save_extracted_list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidateJson(payload): ValidateJson<SaveExtractedListValidator>,
) -> Result<Response<ShoppingListDetailResponse>, ApiError> {
    let (conversation_id, list) = payload.into_extracted();

    let detail = state
        .service
        .save_extracted_list(
            user,
            SaveExtractedListInput {
                conversation_id,
                list,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ShoppingListDetailResponse { data: detail }))
}
