use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use smartfood_core::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserService},
};
use tracing::debug;
use uuid::Uuid;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Header carrying the caller's user id. There is no authentication; the
/// id only selects whose profile and data the request works on.
pub const USER_ID_HEADER: &str = "x-user-id";

pub fn user_id_from_headers(headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::Unauthorized(format!("Missing {USER_ID_HEADER} header")))?;

    Uuid::parse_str(raw)
        .map_err(|_| ApiError::Unauthorized(format!("Invalid {USER_ID_HEADER} header")))
}

/// Loads the calling user's profile and stores it in the request extensions.
pub async fn user_context(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = user_id_from_headers(req.headers())?;

    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::Unauthorized("Unknown user".to_string()),
            other => ApiError::from(other),
        })?;

    debug!(user_id = %user.id, "request user resolved");
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// The user loaded by [`user_context`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::Unauthorized("User context missing".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{HeaderValue, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_user_id_from_headers() {
        let id = Uuid::new_v4();
        assert_eq!(user_id_from_headers(&headers(&id.to_string())), Ok(id));
    }

    #[test]
    fn test_missing_or_invalid_header_is_unauthorized() {
        assert!(matches!(
            user_id_from_headers(&HeaderMap::new()),
            Err(ApiError::Unauthorized(_))
        ));
        assert!(matches!(
            user_id_from_headers(&headers("not-a-uuid")),
            Err(ApiError::Unauthorized(_))
        ));
        assert!(matches!(
            user_id_from_headers(&headers("  ")),
            Err(ApiError::Unauthorized(_))
        ));
    }

    async fn whoami(CurrentUser(user): CurrentUser) -> String {
        user.name
    }

    async fn inject_user(mut req: Request, next: Next) -> Response {
        req.extensions_mut().insert(User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            vec![],
            vec![],
        ));
        next.run(req).await
    }

    fn get_request() -> Request {
        axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_current_user_reads_extension() {
        let app = Router::new()
            .route("/", get(whoami))
            .layer(middleware::from_fn(inject_user));

        let response = app.oneshot(get_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Ana");
    }

    #[tokio::test]
    async fn test_current_user_without_context_is_unauthorized() {
        let app = Router::new().route("/", get(whoami));

        let response = app.oneshot(get_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
