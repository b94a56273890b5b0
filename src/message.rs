// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    // Absent field behaves like an empty message, so `{}` and
    // `{"message": ""}` both take the validation path.
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
    pub user_message: String,
    pub status: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}
