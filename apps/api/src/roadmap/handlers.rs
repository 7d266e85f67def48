//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::chat::ChatMessage;
use crate::models::roadmap::{CategoryFilter, Roadmap, Skill, SkillCategory};
use crate::roadmap::builder::generate_roadmap;
use crate::state::AppState;

/// Quick-pick interests offered on the landing form.
pub const SUGGESTED_INTERESTS: [&str; 4] = [
    "Autonomous Vehicles",
    "Humanoids",
    "Industrial Automation",
    "IoT & Edge AI",
];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRoadmapRequest {
    pub interest: String,
}

/// A fresh roadmap plus the greeting that seeds its chat log.
#[derive(Debug, Serialize)]
pub struct GenerateRoadmapResponse {
    pub roadmap: Roadmap,
    pub greeting: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct FilterSkillsRequest {
    pub roadmap: Roadmap,
    /// `"ALL"` or a category label.
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: SkillCategory,
    pub count: usize,
}

/// Matching skills plus per-category totals for the filter chips.
#[derive(Debug, Serialize)]
pub struct FilterSkillsResponse {
    pub skills: Vec<Skill>,
    pub counts: Vec<CategoryCount>,
}

#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub label: &'static str,
    pub short_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub interests: Vec<&'static str>,
    pub categories: Vec<CategoryOption>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/roadmaps
///
/// Generates a roadmap for the submitted interest. On failure nothing partial is returned.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<GenerateRoadmapRequest>,
) -> Result<Json<GenerateRoadmapResponse>, AppError> {
    if request.interest.trim().is_empty() {
        return Err(AppError::Validation("interest cannot be empty".to_string()));
    }

    let roadmap = generate_roadmap(state.model.as_ref(), &request.interest).await?;

    Ok(Json(GenerateRoadmapResponse {
        greeting: ChatMessage::greeting(&request.interest),
        roadmap,
    }))
}

/// POST /api/v1/roadmaps/filter
pub async fn handle_filter_skills(
    Json(request): Json<FilterSkillsRequest>,
) -> Result<Json<FilterSkillsResponse>, AppError> {
    let filter = CategoryFilter::parse(&request.category).ok_or_else(|| {
        AppError::Validation(format!("unknown category '{}'", request.category))
    })?;

    let skills = request
        .roadmap
        .filter_skills(filter)
        .into_iter()
        .cloned()
        .collect();

    let counts = request
        .roadmap
        .category_counts()
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

    Ok(Json(FilterSkillsResponse { skills, counts }))
}

/// GET /api/v1/roadmaps/suggestions
pub async fn handle_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        interests: SUGGESTED_INTERESTS.to_vec(),
        categories: SkillCategory::ALL
            .into_iter()
            .map(|c| CategoryOption {
                label: c.label(),
                short_label: c.short_label(),
            })
            .collect(),
    })
}
