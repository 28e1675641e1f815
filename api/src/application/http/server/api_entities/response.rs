use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
    ServiceUnavailable(T),
    NoContent,
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize,
{
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Created(data) => (StatusCode::CREATED, Json(data)).into_response(),
            Response::ServiceUnavailable(data) => {
                (StatusCode::SERVICE_UNAVAILABLE, Json(data)).into_response()
            }
            Response::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}
