pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::learning::handlers as learning;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/rank", post(matching::handle_rank))
        // Jobs API
        .route("/api/v1/jobs/external", post(jobs::handle_external_jobs))
        .route("/api/v1/jobs/platform", post(jobs::handle_platform_jobs))
        .route("/api/v1/skills/extract", post(jobs::handle_extract_skills))
        // Learning API
        .route(
            "/api/v1/learning/recommendations",
            post(learning::handle_learning_recommendations),
        )
        .with_state(state)
}
