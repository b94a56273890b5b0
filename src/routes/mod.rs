// src/routes/mod.rs
pub mod chat;
pub mod health;
pub mod pages;

use axum::{
    Router,
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use chat::chat_handler;
use health::health_handler;
use pages::{index_handler, privacy_handler, terms_handler};

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/privacy", get(privacy_handler))
        .route("/terms", get(terms_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

/// Current time as an ISO-8601 string, shared by the chat and health
/// responses.
pub(crate) fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
