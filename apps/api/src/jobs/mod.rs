// Job listings: models, the Jooble job-board client, keyword skill extraction, search filter.
// Nothing here persists jobs; platform postings arrive from the caller.

pub mod handlers;
pub mod jooble;
pub mod models;
pub mod search;
pub mod skill_extraction;
