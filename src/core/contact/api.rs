//! Request wrappers for the contact-us endpoints:
//! - GET /contact-us - Paginated message inbox
//! - GET /contact-us/:id - Fetch a single message
//! - PUT /contact-us/:id/read - Mark a message read
//! - DELETE /contact-us/:id - Delete a message

use serde::Deserialize;

use crate::core::api::{self, ApiError, Page};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
}

/// List messages, unread first.
pub async fn list_messages(page: u32) -> Result<Page<ContactMessage>, ApiError> {
    api::get_json_query("contact-us", &[("page", page.to_string())]).await
}

pub async fn get_message(id: i64) -> Result<ContactMessage, ApiError> {
    api::get_json(&format!("contact-us/{}", id)).await
}

/// Mark a message as read, returning the updated record.
pub async fn mark_read(id: i64) -> Result<ContactMessage, ApiError> {
    api::put_json(&format!("contact-us/{}/read", id), &serde_json::json!({})).await
}

pub async fn delete_message(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("contact-us/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_message_deserializes() {
        let message: ContactMessage = serde_json::from_str(
            r#"{
                "id": 9,
                "name": "Visitor",
                "email": "visitor@example.org",
                "message": "How do I submit an idea?",
                "createdAt": "2026-03-10T14:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(message.id, 9);
        assert!(message.subject.is_none());
        assert!(!message.read);
    }
}
