//! Job-board client. Jooble is the single external source of job listings.
//!
//! `AppState` holds an `Arc<dyn JobSource>`; the router never talks to Jooble directly.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::jobs::models::{ExternalJob, JobSearchPage, JobSearchQuery};
use crate::jobs::skill_extraction::extract_skills_from_text;

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum JobSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Job board API key is not configured")]
    NotConfigured,
}

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, query: &JobSearchQuery) -> Result<JobSearchPage, JobSourceError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct JoobleRequest<'a> {
    keywords: &'a str,
    location: &'a str,
    page: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoobleResponse {
    #[serde(default)]
    total_count: u64,
    #[serde(default)]
    jobs: Vec<JoobleJob>,
}

#[derive(Debug, Deserialize)]
struct JoobleJob {
    id: Option<serde_json::Value>,
    title: Option<String>,
    location: Option<String>,
    snippet: Option<String>,
    salary: Option<String>,
    source: Option<String>,
    #[serde(rename = "type")]
    job_type: Option<String>,
    link: Option<String>,
    company: Option<String>,
    updated: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct JoobleClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl JoobleClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, JobSourceError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// POSTs one search. Retries on 429 and 5xx with exponential backoff.
    async fn fetch(&self, request: &JoobleRequest<'_>) -> Result<JoobleResponse, JobSourceError> {
        let url = format!("{}/{}", self.base_url, self.api_key);
        let mut last_error: Option<JobSourceError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Jooble attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&url).json(request).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(JobSourceError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Jooble API returned {}: {}", status, body);
                last_error = Some(JobSourceError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(JobSourceError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        Err(last_error.unwrap_or(JobSourceError::Api {
            status: 429,
            message: format!("gave up after {MAX_RETRIES} attempts"),
        }))
    }
}

#[async_trait]
impl JobSource for JoobleClient {
    async fn search(&self, query: &JobSearchQuery) -> Result<JobSearchPage, JobSourceError> {
        let request = JoobleRequest {
            keywords: query.category.keywords(),
            location: &query.location,
            page: query.page,
        };

        debug!(
            "Fetching jobs for '{}' in {}",
            request.keywords,
            if query.location.is_empty() { "any location" } else { query.location.as_str() }
        );

        let response = self.fetch(&request).await?;
        Ok(normalize_response(response))
    }
}

/// Stand-in used when no API key is configured. Every search fails with `NotConfigured`.
pub struct DisabledJobSource;

#[async_trait]
impl JobSource for DisabledJobSource {
    async fn search(&self, _query: &JobSearchQuery) -> Result<JobSearchPage, JobSourceError> {
        Err(JobSourceError::NotConfigured)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

fn normalize_response(response: JoobleResponse) -> JobSearchPage {
    JobSearchPage {
        jobs: response.jobs.into_iter().map(normalize_job).collect(),
        total_count: response.total_count,
    }
}

fn normalize_job(job: JoobleJob) -> ExternalJob {
    let title = non_empty(job.title).unwrap_or_else(|| "Untitled Position".to_string());
    let description = job.snippet.unwrap_or_default();
    let source = non_empty(job.source);
    let required_skills = extract_skills_from_text(&format!("{description} {title}"));

    ExternalJob {
        id: job
            .id
            .and_then(|v| match v {
                serde_json::Value::String(s) if !s.is_empty() => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        title,
        company: non_empty(job.company)
            .or_else(|| source.clone())
            .unwrap_or_else(|| "Unknown Company".to_string()),
        location: non_empty(job.location).unwrap_or_else(|| "Remote".to_string()),
        job_type: non_empty(job.job_type).unwrap_or_else(|| "Full-time".to_string()),
        description,
        salary_info: non_empty(job.salary),
        source_url: job.link.unwrap_or_default(),
        source: source.unwrap_or_else(|| "Jooble".to_string()),
        updated_at: job
            .updated
            .as_deref()
            .and_then(parse_updated)
            .unwrap_or_else(Utc::now),
        is_external: true,
        required_skills,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Jooble sends either RFC 3339 or a zone-less timestamp with 7 fractional digits.
fn parse_updated(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn parse_fixture(json: &str) -> JobSearchPage {
        let response: JoobleResponse = serde_json::from_str(json).unwrap();
        normalize_response(response)
    }

    #[test]
    fn test_full_job_is_normalized() {
        let page = parse_fixture(
            r#"{
                "totalCount": 412,
                "jobs": [{
                    "id": -8167459389271406838,
                    "title": "Senior Python Engineer",
                    "location": "Austin, TX",
                    "snippet": "Build ML pipelines with PyTorch and Docker",
                    "salary": "$150k",
                    "source": "indeed.com",
                    "type": "Contract",
                    "link": "https://jooble.org/desc/1",
                    "company": "Initech",
                    "updated": "2024-05-02T00:00:00.0000000"
                }]
            }"#,
        );

        assert_eq!(page.total_count, 412);
        let job = &page.jobs[0];
        assert_eq!(job.id, "-8167459389271406838");
        assert_eq!(job.title, "Senior Python Engineer");
        assert_eq!(job.company, "Initech");
        assert_eq!(job.location, "Austin, TX");
        assert_eq!(job.job_type, "Contract");
        assert_eq!(job.salary_info.as_deref(), Some("$150k"));
        assert_eq!(job.source, "indeed.com");
        assert_eq!(job.source_url, "https://jooble.org/desc/1");
        assert!(job.is_external);
        assert_eq!(job.updated_at.year(), 2024);
        assert_eq!(job.updated_at.month(), 5);
        assert!(job.required_skills.contains(&"Python".to_string()));
        assert!(job.required_skills.contains(&"PyTorch".to_string()));
        assert!(job.required_skills.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let page = parse_fixture(r#"{"jobs": [{"snippet": ""}]}"#);
        let job = &page.jobs[0];
        assert_eq!(job.title, "Untitled Position");
        assert_eq!(job.company, "Unknown Company");
        assert_eq!(job.location, "Remote");
        assert_eq!(job.job_type, "Full-time");
        assert_eq!(job.source, "Jooble");
        assert_eq!(job.salary_info, None);
        assert!(Uuid::parse_str(&job.id).is_ok());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_company_falls_back_to_source() {
        let page = parse_fixture(r#"{"jobs": [{"company": "", "source": "glassdoor"}]}"#);
        assert_eq!(page.jobs[0].company, "glassdoor");
    }

    #[test]
    fn test_empty_salary_is_none() {
        let page = parse_fixture(r#"{"jobs": [{"salary": "  "}]}"#);
        assert_eq!(page.jobs[0].salary_info, None);
    }

    #[test]
    fn test_empty_body_yields_empty_page() {
        let page = parse_fixture("{}");
        assert!(page.jobs.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_parse_updated_rfc3339() {
        let dt = parse_updated("2024-01-15T08:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 6);
    }

    #[test]
    fn test_parse_updated_zoneless_fraction() {
        let dt = parse_updated("2024-01-15T08:30:00.0000000").unwrap();
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_updated_garbage() {
        assert!(parse_updated("yesterday").is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let request = JoobleRequest {
            keywords: "devops cloud engineer SRE",
            location: "Remote",
            page: 2,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["keywords"], "devops cloud engineer SRE");
        assert_eq!(json["location"], "Remote");
        assert_eq!(json["page"], 2);
    }

    #[tokio::test]
    async fn test_disabled_source_reports_not_configured() {
        let err = DisabledJobSource
            .search(&JobSearchQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, JobSourceError::NotConfigured));
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = JoobleClient::new(
            "https://jooble.org/api/".to_string(),
            "key".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url, "https://jooble.org/api");
    }
}
