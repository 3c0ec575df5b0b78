//! HTTP server exposing sentiment prediction with persisted history.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router with logging and CORS layers.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                request_id = %uuid::Uuid::new_v4(),
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/records", get(handlers::records::list))
        .route("/records/summary", get(handlers::records::summary))
        .route("/records/{id}", get(handlers::records::get))
        .route("/model", get(handlers::model::info))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
