//! Request wrappers for the hero-slide endpoints:
//! - GET /hero-slides - All slides in display order
//! - POST /hero-slides - Create a slide (multipart, image upload)
//! - PUT /hero-slides/:id - Update a slide (multipart)
//! - PUT /hero-slides/order - Persist a new display order
//! - DELETE /hero-slides/:id - Delete a slide

use serde::{Deserialize, Serialize};

use crate::core::api::{self, ApiError};

/// One slide of the landing-page carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    pub position: u32,
    pub active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReorderRequest<'a> {
    ids: &'a [i64],
}

/// All slides, ordered by `position`.
pub async fn list_slides() -> Result<Vec<HeroSlide>, ApiError> {
    api::get_json("hero-slides").await
}

#[cfg(not(feature = "ssr"))]
pub async fn create_slide(form: web_sys::FormData) -> Result<HeroSlide, ApiError> {
    api::post_form("hero-slides", form).await
}

#[cfg(not(feature = "ssr"))]
pub async fn update_slide(id: i64, form: web_sys::FormData) -> Result<HeroSlide, ApiError> {
    api::put_form(&format!("hero-slides/{}", id), form).await
}

/// Persist a new display order; `ids` is the full slide list, first to last.
pub async fn reorder_slides(ids: &[i64]) -> Result<(), ApiError> {
    let _: Vec<HeroSlide> = api::put_json("hero-slides/order", &ReorderRequest { ids }).await?;
    Ok(())
}

pub async fn delete_slide(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("hero-slides/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_slide_deserializes() {
        let slide: HeroSlide = serde_json::from_str(
            r#"{
                "id": 2,
                "title": "Innovation week",
                "imageUrl": "/uploads/hero/week.jpg",
                "position": 0,
                "active": true
            }"#,
        )
        .unwrap();

        assert_eq!(slide.id, 2);
        assert_eq!(slide.position, 0);
        assert!(slide.subtitle.is_none());
    }

    #[test]
    fn test_reorder_request_serializes_ids_in_order() {
        let json = serde_json::to_string(&ReorderRequest { ids: &[3, 1, 2] }).unwrap();
        assert_eq!(json, r#"{"ids":[3,1,2]}"#);
    }
}
