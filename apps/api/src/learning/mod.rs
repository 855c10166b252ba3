//! Learning recommendations: suggests resources for the skills a candidate is missing.
//!
//! Selection is plain filtering over the caller's resource catalog; nothing is scored.

pub mod handlers;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::ranker::RankedJob;

pub const DEFAULT_SKILL_LIMIT: usize = 5;
pub const DEFAULT_RESOURCE_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub id: String,
    pub skill_name: String,
    pub resource_title: String,
    pub resource_url: String,
    pub resource_type: String,
    pub provider: Option<String>,
    pub is_free: bool,
}

/// Distinct missing skills across ranked jobs, in rank order, first occurrence wins.
pub fn missing_skills_for_learning<J>(ranked: &[RankedJob<J>], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    ranked
        .iter()
        .flat_map(|r| r.missing_skills.iter())
        .filter(|skill| seen.insert(*skill))
        .take(limit)
        .cloned()
        .collect()
}

/// Resources whose skill name contains any missing skill (case-insensitive).
pub fn recommend_resources(
    resources: &[LearningResource],
    missing_skills: &[String],
    limit: usize,
) -> Vec<LearningResource> {
    let missing_lower: Vec<String> = missing_skills.iter().map(|s| s.to_lowercase()).collect();

    resources
        .iter()
        .filter(|r| {
            let name = r.skill_name.to_lowercase();
            missing_lower.iter().any(|s| name.contains(s.as_str()))
        })
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(missing: &[&str]) -> RankedJob<()> {
        RankedJob {
            job: (),
            compatibility_score: 0,
            matched_skills: vec![],
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn resource(id: &str, skill: &str) -> LearningResource {
        LearningResource {
            id: id.to_string(),
            skill_name: skill.to_string(),
            resource_title: format!("Intro to {skill}"),
            resource_url: format!("https://learn.example.com/{id}"),
            resource_type: "course".to_string(),
            provider: None,
            is_free: true,
        }
    }

    #[test]
    fn test_missing_skills_deduped_in_rank_order() {
        let jobs = vec![
            ranked(&["Docker", "AWS"]),
            ranked(&["AWS", "Kubernetes"]),
            ranked(&["Docker", "Terraform"]),
        ];
        assert_eq!(
            missing_skills_for_learning(&jobs, DEFAULT_SKILL_LIMIT),
            vec!["Docker", "AWS", "Kubernetes", "Terraform"]
        );
    }

    #[test]
    fn test_missing_skills_limited() {
        let jobs = vec![ranked(&["a", "b", "c"]), ranked(&["d", "e", "f", "g"])];
        assert_eq!(
            missing_skills_for_learning(&jobs, DEFAULT_SKILL_LIMIT),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn test_missing_skills_empty_without_jobs() {
        let jobs: Vec<RankedJob<()>> = vec![];
        assert!(missing_skills_for_learning(&jobs, DEFAULT_SKILL_LIMIT).is_empty());
    }

    #[test]
    fn test_recommend_filters_by_skill_name() {
        let resources = vec![
            resource("1", "Docker"),
            resource("2", "Spanish"),
            resource("3", "Advanced docker networking"),
            resource("4", "AWS"),
        ];
        let recs = recommend_resources(
            &resources,
            &["docker".to_string(), "AWS".to_string()],
            DEFAULT_RESOURCE_LIMIT,
        );
        let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_recommend_limited() {
        let resources: Vec<_> = (0..10).map(|i| resource(&i.to_string(), "SQL")).collect();
        let recs = recommend_resources(&resources, &["sql".to_string()], DEFAULT_RESOURCE_LIMIT);
        assert_eq!(recs.len(), 6);
        assert_eq!(recs[0].id, "0");
    }

    #[test]
    fn test_recommend_nothing_when_no_missing_skills() {
        let resources = vec![resource("1", "Docker")];
        assert!(recommend_resources(&resources, &[], DEFAULT_RESOURCE_LIMIT).is_empty());
    }
}
