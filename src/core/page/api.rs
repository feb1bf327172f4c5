//! Request wrappers for the dynamic-page endpoints:
//! - GET /pages - All pages
//! - GET /pages/:slug - Fetch a page by slug
//! - POST /pages - Create a page
//! - PUT /pages/:id - Update a page
//! - DELETE /pages/:id - Delete a page

use serde::{Deserialize, Serialize};

use crate::core::api::{self, ApiError};

/// A free-form content page of the public site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicPage {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    pub published: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for both create and update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicPageRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub published: bool,
}

pub async fn list_pages() -> Result<Vec<DynamicPage>, ApiError> {
    api::get_json("pages").await
}

pub async fn get_page(slug: &str) -> Result<DynamicPage, ApiError> {
    api::get_json(&format!("pages/{}", slug)).await
}

pub async fn create_page(request: &DynamicPageRequest) -> Result<DynamicPage, ApiError> {
    api::post_json("pages", request).await
}

pub async fn update_page(id: i64, request: &DynamicPageRequest) -> Result<DynamicPage, ApiError> {
    api::put_json(&format!("pages/{}", id), request).await
}

pub async fn delete_page(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("pages/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_page_deserializes() {
        let page: DynamicPage = serde_json::from_str(
            r#"{
                "id": 5,
                "title": "Privacy policy",
                "slug": "privacy",
                "content": "<p>...</p>",
                "published": true,
                "updatedAt": "2026-01-20T08:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(page.slug, "privacy");
        assert!(page.published);
    }
}
