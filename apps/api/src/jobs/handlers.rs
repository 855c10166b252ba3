//! Axum route handlers for the Jobs API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::jobs::models::{ExternalJob, JobCategory, JobPosting, JobSearchQuery};
use crate::jobs::search::filter_jobs;
use crate::jobs::skill_extraction::extract_skills_from_text;
use crate::matching::matcher::validate_skills;
use crate::matching::ranker::{rank_jobs_with, RankedJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExternalJobsRequest {
    #[serde(default)]
    pub category: JobCategory,
    #[serde(default)]
    pub location: String,
    #[serde(default = "first_page")]
    pub page: u32,
    /// Free-text filter applied to title, company and skills after fetching.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub candidate_skills: Vec<String>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct ExternalJobsResponse {
    pub jobs: Vec<RankedJob<ExternalJob>>,
    pub total_count: u64,
    /// False when no candidate skills were given; scores are then all 0 and
    /// clients should hide match info.
    pub ranked: bool,
}

#[derive(Debug, Deserialize)]
pub struct PlatformJobsRequest {
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub candidate_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PlatformJobsResponse {
    pub jobs: Vec<RankedJob<JobPosting>>,
    pub ranked: bool,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/jobs/external
///
/// Fetches one page of job-board listings for a category and ranks them
/// against the candidate's skills.
pub async fn handle_external_jobs(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExternalJobsRequest>,
) -> Result<Json<ExternalJobsResponse>, AppError> {
    if request.page == 0 {
        return Err(AppError::Validation("page starts at 1".to_string()));
    }
    validate_skills(&request.candidate_skills, "candidate_skills")?;

    let query = JobSearchQuery {
        category: request.category,
        location: request.location.trim().to_string(),
        page: request.page,
    };

    let page = state.job_source.search(&query).await?;
    info!(
        "Fetched {} of {} external jobs for {:?}",
        page.jobs.len(),
        page.total_count,
        query.category
    );

    let jobs = filter_jobs(&page.jobs, &request.query);
    let ranked = rank_jobs_with(
        state.equivalence.as_ref(),
        &jobs,
        &request.candidate_skills,
    )?;

    Ok(Json(ExternalJobsResponse {
        jobs: ranked,
        total_count: page.total_count,
        ranked: !request.candidate_skills.is_empty(),
    }))
}

/// POST /api/v1/jobs/platform
///
/// Filters and ranks recruiter-posted jobs supplied by the caller.
pub async fn handle_platform_jobs(
    State(state): State<AppState>,
    AppJson(request): AppJson<PlatformJobsRequest>,
) -> Result<Json<PlatformJobsResponse>, AppError> {
    let jobs = filter_jobs(&request.jobs, &request.query);
    let ranked = rank_jobs_with(
        state.equivalence.as_ref(),
        &jobs,
        &request.candidate_skills,
    )?;

    Ok(Json(PlatformJobsResponse {
        jobs: ranked,
        ranked: !request.candidate_skills.is_empty(),
    }))
}

/// POST /api/v1/skills/extract
///
/// Runs keyword skill extraction over free text (e.g. a job description).
pub async fn handle_extract_skills(
    AppJson(request): AppJson<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(ExtractSkillsResponse {
        skills: extract_skills_from_text(&request.text),
    }))
}
