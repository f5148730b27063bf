//! Scene module - per-detection and per-frame logic over one explicit state
//!
//! Re-exports only. All logic in submodules.

mod controller;
mod state;
mod update;

pub use controller::TemplateSwitch;
pub use state::{SceneState, FAR_AWAY};
pub use update::{proximity, update_particles};
