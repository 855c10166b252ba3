//! Skill Matcher: compares a candidate skill set against a job's required skills.
//!
//! Matching is lexical: labels are lower-cased and a required skill counts as
//! satisfied when it and some candidate skill contain one another. The
//! equivalence rule lives behind `SkillEquivalence` so a token- or
//! embedding-based rule can replace it without touching the partition logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Partition of a job's required skills into satisfied and unsatisfied labels.
/// `score` is in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Coarse bucket used by clients to colour a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::Strong
        } else if score >= 50 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Equivalence predicate
// ────────────────────────────────────────────────────────────────────────────

/// Decides whether a candidate skill satisfies a required skill.
///
/// Both arguments arrive already normalized (see `normalize_skill`).
/// Carried in `AppState` as `Arc<dyn SkillEquivalence>`.
pub trait SkillEquivalence: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_equivalent(&self, candidate: &str, required: &str) -> bool;
}

/// Bidirectional substring containment. "react.js" satisfies "react" and
/// "react" satisfies "react.js"; "java" also satisfies "javascript".
pub struct SubstringEquivalence;

impl SkillEquivalence for SubstringEquivalence {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn is_equivalent(&self, candidate: &str, required: &str) -> bool {
        candidate.contains(required) || required.contains(candidate)
    }
}

/// Comparison form of a skill label. Never used for output.
pub fn normalize_skill(label: &str) -> String {
    label.to_lowercase()
}

/// Rejects empty and whitespace-only labels.
pub fn validate_skills(skills: &[String], side: &str) -> Result<(), MatchError> {
    match skills.iter().position(|s| s.trim().is_empty()) {
        Some(index) => Err(MatchError::InvalidArgument(format!(
            "{side}[{index}] is an empty skill label"
        ))),
        None => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Matches with the default substring policy.
pub fn match_skills(candidate: &[String], required: &[String]) -> Result<MatchResult, MatchError> {
    match_skills_with(&SubstringEquivalence, candidate, required)
}

/// Matches `required` against `candidate` using `equivalence`.
///
/// An empty `candidate` or an empty `required` yields score 0 with every
/// required skill reported missing. A job with no requirements therefore
/// scores 0, not 100.
pub fn match_skills_with<E: SkillEquivalence + ?Sized>(
    equivalence: &E,
    candidate: &[String],
    required: &[String],
) -> Result<MatchResult, MatchError> {
    validate_skills(candidate, "candidate_skills")?;
    validate_skills(required, "required_skills")?;

    if candidate.is_empty() || required.is_empty() {
        return Ok(MatchResult {
            score: 0,
            matched: vec![],
            missing: required.to_vec(),
        });
    }

    let normalized_candidate: Vec<String> = candidate.iter().map(|s| normalize_skill(s)).collect();

    let (matched, missing): (Vec<String>, Vec<String>) =
        required.iter().cloned().partition(|skill| {
            let required_lower = normalize_skill(skill);
            normalized_candidate
                .iter()
                .any(|c| equivalence.is_equivalent(c, &required_lower))
        });

    let score = percentage(matched.len(), required.len());

    debug!(
        "{} match: {}/{} required skills → {score}",
        equivalence.name(),
        matched.len(),
        required.len()
    );

    Ok(MatchResult {
        score,
        matched,
        missing,
    })
}

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}
