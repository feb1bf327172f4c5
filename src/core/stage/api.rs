//! Request wrappers for the call-stage endpoints:
//! - GET /call-stages - All stages in order
//! - GET /call-stages/active - The currently open stage, if any
//! - PUT /call-stages/:id - Update a stage's window or description

use serde::{Deserialize, Serialize};

use crate::core::api::{self, ApiError};

/// One phase of the call for proposals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    pub active: bool,
    pub position: u32,
}

/// Body for stage updates.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStageRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
    pub active: bool,
}

/// All stages, ordered by `position`.
pub async fn list_stages() -> Result<Vec<CallStage>, ApiError> {
    api::get_json("call-stages").await
}

/// The currently open stage. A 404 means no stage is open, which is a normal
/// state between calls, not an error.
pub async fn active_stage() -> Result<Option<CallStage>, ApiError> {
    match api::get_json("call-stages/active").await {
        Ok(stage) => Ok(Some(stage)),
        Err(ApiError::Status { status: 404, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn update_stage(id: i64, request: &CallStageRequest) -> Result<CallStage, ApiError> {
    api::put_json(&format!("call-stages/{}", id), request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_stage_deserializes() {
        let stage: CallStage = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Submission",
                "startsAt": "2026-02-01T00:00:00Z",
                "endsAt": "2026-03-31T23:59:59Z",
                "active": true,
                "position": 0
            }"#,
        )
        .unwrap();

        assert_eq!(stage.name, "Submission");
        assert!(stage.active);
        assert!(stage.description.is_none());
    }

    #[test]
    fn test_stage_request_omits_unset_window() {
        let request = CallStageRequest {
            name: "Review".to_string(),
            active: false,
            ..Default::default()
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("startsAt"));
        assert!(!json.contains("endsAt"));
    }
}
