//! Non-visual logic of the console: configuration, the shared HTTP client,
//! the auth core and per-domain request wrappers over the platform REST API.

pub mod api;
pub mod auth;
pub mod blog;
pub mod config;
pub mod contact;
pub mod hero;
pub mod idea;
pub mod menu;
pub mod page;
pub mod stage;
pub mod util;
