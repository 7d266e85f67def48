//! Roadmap generation — turns a free-text interest into a validated `Roadmap`.
//!
//! Flow: build prompt + schema → one structured model call → strict decode → validate.
//!
//! All-or-nothing: any upstream error, malformed JSON, unknown enum label, missing
//! field, or structural violation fails the whole call. No field is ever defaulted.

use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{LlmError, ModelService, StructuredRequest};
use crate::models::roadmap::{Roadmap, RoadmapViolation};
use crate::roadmap::prompts::{ADVISOR_PERSONA, ROADMAP_PROMPT_TEMPLATE};
use crate::roadmap::schema::roadmap_schema;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("model returned malformed roadmap JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model returned an unusable roadmap: {0}")]
    Invalid(#[from] RoadmapViolation),
}

/// Builds the request for `interest`. The interest is passed through verbatim.
pub fn build_roadmap_request(interest: &str) -> StructuredRequest {
    StructuredRequest {
        prompt: ROADMAP_PROMPT_TEMPLATE.replace("{interest}", interest),
        system_instruction: format!("{ADVISOR_PERSONA} {JSON_ONLY_INSTRUCTION}"),
        response_schema: roadmap_schema(),
    }
}

/// Generates a roadmap for `interest`. Callers reject blank input before calling.
pub async fn generate_roadmap(
    model: &dyn ModelService,
    interest: &str,
) -> Result<Roadmap, GenerationError> {
    let request = build_roadmap_request(interest);

    let text = model.generate_structured(&request).await.map_err(|e| {
        error!("Roadmap generation call failed for '{interest}': {e}");
        GenerationError::Upstream(e)
    })?;

    let roadmap = decode_roadmap(&text).map_err(|e| {
        error!("Roadmap response rejected for '{interest}': {e}");
        e
    })?;

    info!(
        "Generated roadmap '{}' with {} skills for '{}'",
        roadmap.title,
        roadmap.skills.len(),
        interest
    );

    Ok(roadmap)
}

/// Strict decode + structural validation of a roadmap document.
pub fn decode_roadmap(text: &str) -> Result<Roadmap, GenerationError> {
    let roadmap: Roadmap = serde_json::from_str(text)?;
    roadmap.validate()?;
    Ok(roadmap)
}
