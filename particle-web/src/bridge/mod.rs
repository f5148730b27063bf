//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod scene;
mod detection;
mod render;

pub use scene::{init_scene, detector_options};

pub use detection::{apply_hand_landmarks, set_camera};

pub use render::{
    update_particles,
    take_render_flags,
    particle_positions,
    particle_colors,
    particle_size,
    particle_count,
    current_gesture,
    current_template,
    hand_position,
    FrameFlags,
};
