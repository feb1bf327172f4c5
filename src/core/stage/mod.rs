//! Call-stage management: the phases of the current call for proposals and
//! their submission windows.

pub mod api;

pub use api::{CallStage, CallStageRequest, active_stage, list_stages, update_stage};
