//! Request wrappers for the blog endpoints:
//! - GET /blogs - Paginated listing with optional search
//! - GET /blogs/:id - Fetch a single post
//! - POST /blogs - Create a post (multipart, cover image upload)
//! - PUT /blogs/:id - Update a post (multipart)
//! - PUT /blogs/:id/publish - Toggle publication
//! - DELETE /blogs/:id - Delete a post

use serde::{Deserialize, Serialize};

use crate::core::api::{self, ApiError, Page};

/// A blog post as the backend reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PublishRequest {
    published: bool,
}

/// List posts, newest first. An empty `search` lists everything.
pub async fn list_posts(page: u32, search: &str) -> Result<Page<BlogPost>, ApiError> {
    let mut query = vec![("page", page.to_string())];
    if !search.is_empty() {
        query.push(("search", search.to_string()));
    }
    api::get_json_query("blogs", &query).await
}

pub async fn get_post(id: i64) -> Result<BlogPost, ApiError> {
    api::get_json(&format!("blogs/{}", id)).await
}

/// Create a post from a multipart form (text fields plus an optional cover
/// image file).
#[cfg(not(feature = "ssr"))]
pub async fn create_post(form: web_sys::FormData) -> Result<BlogPost, ApiError> {
    api::post_form("blogs", form).await
}

/// Update a post from a multipart form.
#[cfg(not(feature = "ssr"))]
pub async fn update_post(id: i64, form: web_sys::FormData) -> Result<BlogPost, ApiError> {
    api::put_form(&format!("blogs/{}", id), form).await
}

/// Publish or unpublish a post.
pub async fn set_published(id: i64, published: bool) -> Result<BlogPost, ApiError> {
    api::put_json(&format!("blogs/{}/publish", id), &PublishRequest { published }).await
}

pub async fn delete_post(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("blogs/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_post_deserializes_listing_shape() {
        let post: BlogPost = serde_json::from_str(
            r#"{
                "id": 4,
                "title": "Call for proposals 2026",
                "slug": "call-for-proposals-2026",
                "summary": "The new call is open.",
                "published": true,
                "publishedAt": "2026-02-01T09:00:00Z",
                "authorName": "Admin"
            }"#,
        )
        .unwrap();

        assert_eq!(post.id, 4);
        assert_eq!(post.slug, "call-for-proposals-2026");
        assert!(post.published);
        // Listing payloads omit the body; detail payloads fill it in.
        assert!(post.content.is_empty());
        assert!(post.cover_image_url.is_none());
    }

    #[test]
    fn test_blog_page_deserializes() {
        let page: Page<BlogPost> = serde_json::from_str(
            r#"{
                "items": [
                    {"id": 1, "title": "A", "slug": "a", "published": false}
                ],
                "total": 1,
                "page": 1,
                "perPage": 20
            }"#,
        )
        .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page_count(), 1);
    }
}
