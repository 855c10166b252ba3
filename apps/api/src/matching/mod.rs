// Skill matching core: matcher, ranker, and their HTTP handlers.
// The matcher and ranker are pure and synchronous; handlers only adapt them to JSON.

pub mod handlers;
pub mod matcher;
pub mod ranker;
