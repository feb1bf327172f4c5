//! Idea review: browsing submitted ideas and recording review decisions.

pub mod api;

pub use api::{Idea, IdeaStats, IdeaStatus, get_idea, idea_stats, list_ideas, review_idea};
