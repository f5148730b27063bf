//! Particle Web - hand-tracked particle cloud for the browser
//!
//! WASM core behind a MediaPipe + three.js page. JS pushes hand landmarks
//! and camera matrices in, pulls particle arrays and dirty flags out:
//! - `hand`: landmark parsing, gesture classification (pointing/fist/open)
//! - `projection`: fingertip screen point -> world point 3 units ahead
//! - `particles`: sphere/heart/flower templates and their buffers
//! - `scene`: per-detection and per-frame logic over one explicit state
//! - `bridge`: wasm_bindgen entry points

pub mod bridge;
pub mod config;
pub mod error;
pub mod hand;
pub mod logging;
pub mod particles;
pub mod projection;
pub mod scene;

use wasm_bindgen::prelude::*;

pub use bridge::{apply_hand_landmarks, init_scene, set_camera, take_render_flags, update_particles};
pub use config::SceneConfig;
pub use error::{Result, SceneError};
pub use scene::SceneState;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
