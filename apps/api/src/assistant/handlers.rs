//! Axum route handlers for the Assistant API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::bridge::ask_assistant;
use crate::errors::AppError;
use crate::models::chat::{ChatMessage, Role};
use crate::models::roadmap::Roadmap;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Full chat log so far, oldest first. May be empty.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    pub question: String,
    pub roadmap: Roadmap,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub reply: ChatMessage,
}

/// POST /api/v1/assistant
///
/// Answers one question. Upstream failures come back as a fallback reply, not an error.
/// The client appends its question and this reply to its own log.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let text = ask_assistant(
        state.model.as_ref(),
        &request.history,
        &request.question,
        &request.roadmap,
    )
    .await;

    Ok(Json(AskResponse {
        reply: ChatMessage::new(Role::Model, text),
    }))
}
