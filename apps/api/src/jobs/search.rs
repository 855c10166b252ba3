use crate::jobs::models::JobListing;

/// Keeps jobs whose title, company, or any required skill contains `query`,
/// case-insensitively. An empty query keeps everything. Order is preserved.
pub fn filter_jobs<J: JobListing + Clone>(jobs: &[J], query: &str) -> Vec<J> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return jobs.to_vec();
    }

    jobs.iter()
        .filter(|job| job_matches_query(*job, &query))
        .cloned()
        .collect()
}

fn job_matches_query<J: JobListing>(job: &J, query_lower: &str) -> bool {
    job.title().to_lowercase().contains(query_lower)
        || job.company().to_lowercase().contains(query_lower)
        || job
            .required_skills()
            .iter()
            .any(|s| s.to_lowercase().contains(query_lower))
}
