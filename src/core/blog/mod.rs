//! Blog administration: listing, editing and publishing posts.

pub mod api;

pub use api::{BlogPost, delete_post, get_post, list_posts, set_published};
