//! Common reusable UI components shared across pages.

pub mod message;
pub mod spinner;

pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::Spinner;
