use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::ranker::JobLike;

/// Search category offered to users. Each maps to a fixed keyword query for the job board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobCategory {
    #[default]
    MachineLearning,
    FullStack,
    Frontend,
    Backend,
    DataScience,
    Devops,
}

impl JobCategory {
    pub fn keywords(self) -> &'static str {
        match self {
            JobCategory::MachineLearning => "machine learning AI deep learning",
            JobCategory::FullStack => "full stack developer fullstack",
            JobCategory::Frontend => "frontend react vue angular",
            JobCategory::Backend => "backend nodejs python java",
            JobCategory::DataScience => "data scientist analytics",
            JobCategory::Devops => "devops cloud engineer SRE",
        }
    }
}

/// A rankable job that also exposes the fields the search box looks at.
pub trait JobListing: JobLike {
    fn title(&self) -> &str;
    fn company(&self) -> &str;
}

/// A job posted on the platform by a recruiter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub required_skills: Vec<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub is_internship: bool,
    pub created_at: DateTime<Utc>,
}

impl JobLike for JobPosting {
    fn required_skills(&self) -> &[String] {
        &self.required_skills
    }
}

impl JobListing for JobPosting {
    fn title(&self) -> &str {
        &self.title
    }

    fn company(&self) -> &str {
        &self.company
    }
}

/// A job fetched from the external job board, normalized to our shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub salary_info: Option<String>,
    pub source_url: String,
    pub source: String,
    pub updated_at: DateTime<Utc>,
    pub is_external: bool,
    pub required_skills: Vec<String>,
}

impl JobLike for ExternalJob {
    fn required_skills(&self) -> &[String] {
        &self.required_skills
    }
}

impl JobListing for ExternalJob {
    fn title(&self) -> &str {
        &self.title
    }

    fn company(&self) -> &str {
        &self.company
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchQuery {
    pub category: JobCategory,
    pub location: String,
    pub page: u32,
}

impl Default for JobSearchQuery {
    fn default() -> Self {
        Self {
            category: JobCategory::default(),
            location: String::new(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchPage {
    pub jobs: Vec<ExternalJob>,
    pub total_count: u64,
}
