//! Job Ranker: scores a collection of jobs against one candidate and orders
//! them by compatibility.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::matching::matcher::{
    match_skills_with, MatchError, SkillEquivalence, SubstringEquivalence,
};

/// Anything carrying a required-skills field can be ranked.
pub trait JobLike {
    fn required_skills(&self) -> &[String];
}

/// A job record plus its match against the candidate.
/// The job's own fields are flattened next to the match fields on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RankedJob<J> {
    #[serde(flatten)]
    pub job: J,
    pub compatibility_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Keys written by the ranker next to a job's own fields.
const MATCH_FIELDS: [&str; 3] = ["compatibility_score", "matched_skills", "missing_skills"];

/// A job whose only known field is `required_skills`; every other field is
/// carried through untouched, except match fields from an earlier ranking,
/// which are dropped so the fresh ones replace them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OpaqueJobFields")]
pub struct OpaqueJob {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Deserialize)]
struct OpaqueJobFields {
    #[serde(default)]
    required_skills: Vec<String>,
    #[serde(flatten)]
    metadata: Map<String, Value>,
}

impl From<OpaqueJobFields> for OpaqueJob {
    fn from(fields: OpaqueJobFields) -> Self {
        let mut metadata = fields.metadata;
        for key in MATCH_FIELDS {
            metadata.remove(key);
        }
        OpaqueJob {
            required_skills: fields.required_skills,
            metadata,
        }
    }
}

impl JobLike for OpaqueJob {
    fn required_skills(&self) -> &[String] {
        &self.required_skills
    }
}

/// Ranks with the default substring policy.
pub fn rank_jobs<J: JobLike + Clone>(
    jobs: &[J],
    candidate: &[String],
) -> Result<Vec<RankedJob<J>>, MatchError> {
    rank_jobs_with(&SubstringEquivalence, jobs, candidate)
}

/// Scores every job and sorts by descending score. The sort is stable, so
/// jobs with equal scores keep their input order. Zero-score jobs are kept.
pub fn rank_jobs_with<J, E>(
    equivalence: &E,
    jobs: &[J],
    candidate: &[String],
) -> Result<Vec<RankedJob<J>>, MatchError>
where
    J: JobLike + Clone,
    E: SkillEquivalence + ?Sized,
{
    let mut ranked = jobs
        .iter()
        .enumerate()
        .map(|(position, job)| -> Result<RankedJob<J>, MatchError> {
            let result = match_skills_with(equivalence, candidate, job.required_skills())
                .map_err(|MatchError::InvalidArgument(msg)| {
                    MatchError::InvalidArgument(format!("jobs[{position}]: {msg}"))
                })?;
            Ok(RankedJob {
                job: job.clone(),
                compatibility_score: result.score,
                matched_skills: result.matched,
                missing_skills: result.missing,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

    Ok(ranked)
}
