//! API routes configuration module

use crate::api::errors::handle_panic;
use crate::api::handlers::{chat, health, AppState};
use axum::{
    extract::Request,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info_span, Level, Span};
use uuid::Uuid;

fn request_span(request: &Request) -> Span {
    info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `state` - Shared state holding the upstream provider client
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(request_span)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(health))
        .route("/chat", post(chat))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace)
        .layer(cors)
}
