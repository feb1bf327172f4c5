//! Contact-us administration: reading and triaging visitor messages.

pub mod api;

pub use api::{ContactMessage, delete_message, get_message, list_messages, mark_read};
