//! Request wrappers for the menu-item endpoints:
//! - GET /menu-items - The full menu as a tree
//! - POST /menu-items - Create an item
//! - PUT /menu-items/:id - Update an item
//! - DELETE /menu-items/:id - Delete an item (children are re-parented by
//!   the backend)

use serde::{Deserialize, Serialize};

use crate::core::api::{self, ApiError};

/// A node of the public site's navigation menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub position: u32,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

/// Body for both create and update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    pub label: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub position: u32,
}

/// The whole menu, root items ordered by `position`, children nested.
pub async fn list_menu() -> Result<Vec<MenuItem>, ApiError> {
    api::get_json("menu-items").await
}

pub async fn create_item(request: &MenuItemRequest) -> Result<MenuItem, ApiError> {
    api::post_json("menu-items", request).await
}

pub async fn update_item(id: i64, request: &MenuItemRequest) -> Result<MenuItem, ApiError> {
    api::put_json(&format!("menu-items/{}", id), request).await
}

pub async fn delete_item(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("menu-items/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_tree_deserializes_nested_children() {
        let menu: Vec<MenuItem> = serde_json::from_str(
            r#"[
                {
                    "id": 1, "label": "About", "url": "/about", "position": 0,
                    "children": [
                        {"id": 2, "label": "Team", "url": "/about/team",
                         "parentId": 1, "position": 0}
                    ]
                },
                {"id": 3, "label": "Blog", "url": "/blog", "position": 1}
            ]"#,
        )
        .unwrap();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].children.len(), 1);
        assert_eq!(menu[0].children[0].parent_id, Some(1));
        assert!(menu[1].children.is_empty());
    }

    #[test]
    fn test_request_omits_parent_for_root_items() {
        let request = MenuItemRequest {
            label: "Blog".to_string(),
            url: "/blog".to_string(),
            parent_id: None,
            position: 1,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("parentId"));
    }
}
