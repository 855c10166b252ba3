//! jobmatch: skill matching and job ranking, plus the HTTP service around it.
//!
//! The core lives in [`matching`]: `match_skills` compares a candidate's skills
//! with one job's required skills and `rank_jobs` orders a job collection by
//! that score. Both are pure and synchronous. The remaining modules wire the
//! core to the Jooble job board and to an Axum router.

pub mod config;
pub mod errors;
pub mod jobs;
pub mod learning;
pub mod matching;
pub mod routes;
pub mod state;

pub use matching::matcher::{match_skills, MatchError, MatchResult, ScoreBand};
pub use matching::ranker::{rank_jobs, JobLike, RankedJob};
