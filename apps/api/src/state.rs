use std::sync::Arc;

use crate::config::Config;
use crate::jobs::jooble::JobSource;
use crate::matching::matcher::SkillEquivalence;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// External job listings. `JoobleClient` when a key is configured, else `DisabledJobSource`.
    pub job_source: Arc<dyn JobSource>,
    /// Skill equivalence used by every match and rank. Default: SubstringEquivalence.
    pub equivalence: Arc<dyn SkillEquivalence>,
}
