//! Axum route handler for the chat endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::relay;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Older frontends send `prompt`; the canonical field is `question`.
    /// Both parse into the same field so validation cannot drift from parsing.
    #[serde(default, alias = "prompt")]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub output: String,
}

/// POST /chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let output = relay::answer(&request.question, &state.context, state.completer.as_ref()).await?;
    Ok(Json(ChatResponse { output }))
}
