//! Projection module - camera transform and screen-to-world mapping
//!
//! Re-exports only. All logic in submodules.

mod camera;
mod mapper;

pub use camera::CameraTransform;
pub use mapper::{screen_to_world, to_ndc};
