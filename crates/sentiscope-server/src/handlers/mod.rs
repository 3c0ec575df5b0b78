//! HTTP route handlers for the sentiment server.

pub mod model;
pub mod predict;
pub mod records;

use axum::Json;

use crate::dto::MessageResponse;

/// GET / - Static greeting. Touches neither the model nor the store.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World".to_string(),
    })
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
