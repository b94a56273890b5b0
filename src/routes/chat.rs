// src/routes/chat.rs
use axum::Json;
use tracing::debug;

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};
use crate::notice::staging_reply;
use crate::routes::iso_timestamp;

/// Handle a chat message. Every valid message gets the staging notice back,
/// with a timestamp and the echoed input for QA tracking.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that a malformed body surfaces as a 500 with the parse error in the
/// `error` field, while a missing or empty `message` stays a 400.
pub async fn chat_handler(body: String) -> Result<Json<ChatResponse>, AppError> {
    let payload: ChatRequest =
        serde_json::from_str(&body).map_err(|e| AppError::Unexpected(e.to_string()))?;

    if payload.message.is_empty() {
        return Err(AppError::Validation("No message provided".to_string()));
    }

    debug!(len = payload.message.len(), "serving staging reply");

    Ok(Json(ChatResponse {
        response: staging_reply(&payload.message).to_string(),
        timestamp: iso_timestamp(),
        user_message: payload.message,
        status: "success".to_string(),
    }))
}
