//! UI components: session plumbing, guards, layout and the route pages.

pub mod auth;
pub mod common;
pub mod guard;
pub mod layout;
pub mod pages;

pub use auth::{provide_session_context, use_session_context};
pub use guard::{PermissionGated, RequireSession};
pub use layout::AdminLayout;
