use utoipa::OpenApi;

use crate::application::http::{
    chat::router::ChatApiDoc, conversation::router::ConversationApiDoc,
    health::router::HealthApiDoc, product::router::ProductApiDoc,
    shopping_list::router::ShoppingListApiDoc, supermarket::router::SupermarketApiDoc,
    user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SmartFood API",
        description = "Shopping-list assistant: profiles, LLM chat with list extraction, lists and the product catalog."
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/chat", api = ChatApiDoc),
        (path = "/conversations", api = ConversationApiDoc),
        (path = "/shopping-lists", api = ShoppingListApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/supermarkets", api = SupermarketApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&str> = openapi.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/health",
            "/health/ready",
            "/users",
            "/users/me",
            "/chat",
            "/chat/stats",
            "/conversations",
            "/conversations/{conversation_id}",
            "/shopping-lists",
            "/shopping-lists/from-chat",
            "/shopping-lists/{shopping_list_id}",
            "/shopping-lists/{shopping_list_id}/products",
            "/shopping-lists/{shopping_list_id}/products/{product_id}",
            "/products",
            "/products/{product_id}",
            "/supermarkets",
        ] {
            assert!(paths.contains(&expected), "{expected} missing from {paths:?}");
        }
    }

    #[test]
    fn test_list_items_can_be_ticked_and_removed() {
        let openapi = ApiDoc::openapi();
        let item = openapi
            .paths
            .paths
            .get("/shopping-lists/{shopping_list_id}/products/{product_id}")
            .unwrap();

        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
