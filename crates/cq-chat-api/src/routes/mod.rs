//! API route definitions and router builder.

pub mod cars;
pub mod chat;
pub mod health;
pub mod interpret;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Chatbot
        .route("/chat", get(chat::list_chats).post(chat::send_message))
        .route("/chat/{id}", get(chat::get_chat))
        .route("/interpret", post(interpret::interpret))
        // Listing snapshot
        .route("/cars", get(cars::list_cars))
        .route("/cars/reload", post(cars::reload_cars));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
