//! Request wrappers for the idea endpoints:
//! - GET /ideas - Paginated listing with stage/status/search filters
//! - GET /ideas/stats - Counts by status for the dashboard
//! - GET /ideas/:id - Fetch a single idea with its full description
//! - PUT /ideas/:id/review - Record a review decision

use serde::{Deserialize, Serialize};

use crate::core::api::{self, ApiError, Page};

/// Review status of a submitted idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdeaStatus {
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
}

impl IdeaStatus {
    pub fn label(self) -> &'static str {
        match self {
            IdeaStatus::Submitted => "Submitted",
            IdeaStatus::UnderReview => "Under review",
            IdeaStatus::Accepted => "Accepted",
            IdeaStatus::Rejected => "Rejected",
        }
    }
}

/// A submitted idea.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: String,
    pub submitter_name: String,
    pub stage_id: i64,
    pub status: IdeaStatus,
    pub submitted_at: String,
    #[serde(default)]
    pub reviewer_comment: Option<String>,
}

/// Counts by status, shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaStats {
    pub total: u64,
    pub submitted: u64,
    pub under_review: u64,
    pub accepted: u64,
    pub rejected: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRequest<'a> {
    status: IdeaStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

/// List ideas, newest first. All filters are optional; an empty `search`
/// matches everything.
pub async fn list_ideas(
    page: u32,
    stage_id: Option<i64>,
    status: Option<IdeaStatus>,
    search: &str,
) -> Result<Page<Idea>, ApiError> {
    let mut query = vec![("page", page.to_string())];
    if let Some(stage_id) = stage_id {
        query.push(("stageId", stage_id.to_string()));
    }
    if let Some(status) = status {
        // Reuse the wire spelling of the enum for the filter value
        let value = serde_json::to_value(status)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        query.push(("status", value));
    }
    if !search.is_empty() {
        query.push(("search", search.to_string()));
    }
    api::get_json_query("ideas", &query).await
}

pub async fn idea_stats() -> Result<IdeaStats, ApiError> {
    api::get_json("ideas/stats").await
}

pub async fn get_idea(id: i64) -> Result<Idea, ApiError> {
    api::get_json(&format!("ideas/{}", id)).await
}

/// Record a review decision, returning the updated idea.
pub async fn review_idea(
    id: i64,
    status: IdeaStatus,
    comment: Option<&str>,
) -> Result<Idea, ApiError> {
    api::put_json(&format!("ideas/{}/review", id), &ReviewRequest { status, comment }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_camel_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&IdeaStatus::UnderReview).unwrap(),
            r#""underReview""#
        );
        let status: IdeaStatus = serde_json::from_str(r#""accepted""#).unwrap();
        assert_eq!(status, IdeaStatus::Accepted);
    }

    #[test]
    fn test_idea_deserializes_listing_shape() {
        let idea: Idea = serde_json::from_str(
            r#"{
                "id": 31,
                "title": "Solar canopies for the parking lot",
                "summary": "Generate power on existing structures.",
                "submitterName": "J. Rivera",
                "stageId": 1,
                "status": "submitted",
                "submittedAt": "2026-03-02T10:15:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(idea.status, IdeaStatus::Submitted);
        assert!(idea.description.is_empty());
        assert!(idea.reviewer_comment.is_none());
    }

    #[test]
    fn test_stats_deserialize() {
        let stats: IdeaStats = serde_json::from_str(
            r#"{"total":10,"submitted":4,"underReview":3,"accepted":2,"rejected":1}"#,
        )
        .unwrap();

        assert_eq!(stats.total, 10);
        assert_eq!(stats.under_review, 3);
    }

    #[test]
    fn test_review_request_omits_empty_comment() {
        let json = serde_json::to_string(&ReviewRequest {
            status: IdeaStatus::Rejected,
            comment: None,
        })
        .unwrap();

        assert_eq!(json, r#"{"status":"rejected"}"#);
    }
}
