//! Navigation-menu management for the public site: a small tree of labeled
//! links with nesting one level deep in practice, arbitrary in the model.

pub mod api;

pub use api::{MenuItem, MenuItemRequest, create_item, delete_item, list_menu, update_item};
