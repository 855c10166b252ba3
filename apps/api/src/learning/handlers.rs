use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::learning::{
    missing_skills_for_learning, recommend_resources, LearningResource, DEFAULT_RESOURCE_LIMIT,
    DEFAULT_SKILL_LIMIT,
};
use crate::matching::ranker::{rank_jobs_with, OpaqueJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LearningRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub jobs: Vec<OpaqueJob>,
    #[serde(default)]
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Serialize)]
pub struct LearningResponse {
    pub missing_skills: Vec<String>,
    pub resources: Vec<LearningResource>,
}

/// POST /api/v1/learning/recommendations
pub async fn handle_learning_recommendations(
    State(state): State<AppState>,
    AppJson(request): AppJson<LearningRequest>,
) -> Result<Json<LearningResponse>, AppError> {
    let ranked = rank_jobs_with(
        state.equivalence.as_ref(),
        &request.jobs,
        &request.candidate_skills,
    )?;

    let missing_skills = missing_skills_for_learning(&ranked, DEFAULT_SKILL_LIMIT);
    let resources = recommend_resources(&request.resources, &missing_skills, DEFAULT_RESOURCE_LIMIT);

    Ok(Json(LearningResponse {
        missing_skills,
        resources,
    }))
}
