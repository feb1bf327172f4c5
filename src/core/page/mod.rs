//! Dynamic-page management: free-form content pages rendered by the public
//! site under their slug.

pub mod api;

pub use api::{DynamicPage, DynamicPageRequest, create_page, delete_page, get_page, list_pages,
              update_page};
