//! Hero-slide management for the public site's landing carousel.

pub mod api;

pub use api::{HeroSlide, delete_slide, list_slides, reorder_slides};
#[cfg(not(feature = "ssr"))]
pub use api::{create_slide, update_slide};
