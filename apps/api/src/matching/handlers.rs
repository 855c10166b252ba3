//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppJson};
use crate::matching::matcher::{match_skills_with, MatchResult, ScoreBand};
use crate::matching::ranker::{rank_jobs_with, OpaqueJob, RankedJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub band: ScoreBand,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    pub jobs: Vec<OpaqueJob>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub jobs: Vec<RankedJob<OpaqueJob>>,
}

/// POST /api/v1/match
///
/// Compares one candidate skill set against one job's required skills.
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let result = match_skills_with(
        state.equivalence.as_ref(),
        &request.candidate_skills,
        &request.required_skills,
    )?;
    let band = ScoreBand::from_score(result.score);

    Ok(Json(MatchResponse { result, band }))
}

/// POST /api/v1/rank
///
/// Scores every job against the candidate and returns them best first.
/// Fields other than `required_skills` are echoed back untouched.
pub async fn handle_rank(
    State(state): State<AppState>,
    AppJson(request): AppJson<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let jobs = rank_jobs_with(
        state.equivalence.as_ref(),
        &request.jobs,
        &request.candidate_skills,
    )?;

    Ok(Json(RankResponse { jobs }))
}
