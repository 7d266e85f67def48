//! Assistant bridge — answers one chat question grounded in the active roadmap.
//!
//! Stateless: every call rebuilds a fresh session from the full turn log the
//! caller hands in. Nothing is cached between calls, so cost grows with the log.
//! The caller appends both the question and the returned answer to its own log
//! and keeps at most one call in flight per session.
//!
//! Never fails: upstream errors and blank completions become `FALLBACK_REPLY`.

use tracing::{debug, warn};

use crate::assistant::prompts::{ASSISTANT_SYSTEM_TEMPLATE, FALLBACK_REPLY};
use crate::llm_client::{ChatRequest, ModelService, Turn};
use crate::models::chat::ChatMessage;
use crate::models::roadmap::Roadmap;

/// Compact grounding text: title, summary, and skill names only.
pub fn roadmap_digest(context: &Roadmap) -> String {
    let names: Vec<&str> = context.skill_names().collect();
    format!(
        "Current Roadmap Context: {}\nSummary: {}\nSkills: {}",
        context.title,
        context.summary,
        names.join(", ")
    )
}

pub fn build_chat_request(
    prior_turns: &[ChatMessage],
    question: &str,
    context: &Roadmap,
) -> ChatRequest {
    ChatRequest {
        system_instruction: ASSISTANT_SYSTEM_TEMPLATE.replace("{digest}", &roadmap_digest(context)),
        history: prior_turns
            .iter()
            .map(|m| Turn {
                role: m.role,
                text: m.text.clone(),
            })
            .collect(),
        message: question.to_string(),
    }
}

pub async fn ask_assistant(
    model: &dyn ModelService,
    prior_turns: &[ChatMessage],
    question: &str,
    context: &Roadmap,
) -> String {
    let request = build_chat_request(prior_turns, question, context);
    debug!(
        "Assistant call: {} prior turns, roadmap '{}'",
        request.history.len(),
        context.title
    );

    match model.complete_chat(&request).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Assistant returned a blank completion");
            FALLBACK_REPLY.to_string()
        }
        Err(e) => {
            warn!("Chat error: {e}");
            FALLBACK_REPLY.to_string()
        }
    }
}
