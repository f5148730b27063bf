//! Render-side entry points: frame update and buffer access
//!
//! Per-frame calls never throw; before `init_scene` they return empty data.

use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::particles::RenderFlags;

use super::scene::with_scene;

/// Dirty/rebind state for the renderer, cleared when read
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameFlags {
    pub positions_dirty: bool,
    pub colors_dirty: bool,
    pub rebind: bool,
}

impl From<RenderFlags> for FrameFlags {
    fn from(flags: RenderFlags) -> Self {
        Self {
            positions_dirty: flags.positions_dirty,
            colors_dirty: flags.colors_dirty,
            rebind: flags.rebind,
        }
    }
}

/// Run the hand effect for one render frame
#[wasm_bindgen]
pub fn update_particles() {
    if let Err(e) = run_frame() {
        tracing::warn!("frame skipped: {}", e);
    }
}

fn run_frame() -> Result<()> {
    with_scene(|scene| scene.update())
}

/// Read and clear the buffer flags
#[wasm_bindgen]
pub fn take_render_flags() -> FrameFlags {
    with_scene(|scene| scene.take_render_flags().into()).unwrap_or_default()
}

/// Positions as a flat Float32Array (3 per particle)
#[wasm_bindgen]
pub fn particle_positions() -> Vec<f32> {
    with_scene(|scene| scene.particles().positions_flat().to_vec()).unwrap_or_default()
}

/// Colors as a flat Float32Array (RGB per particle)
#[wasm_bindgen]
pub fn particle_colors() -> Vec<f32> {
    with_scene(|scene| scene.particles().colors_flat().to_vec()).unwrap_or_default()
}

/// Global point size for the material
#[wasm_bindgen]
pub fn particle_size() -> f32 {
    with_scene(|scene| scene.particles().size()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn particle_count() -> usize {
    with_scene(|scene| scene.particles().len()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn current_gesture() -> String {
    with_scene(|scene| scene.gesture().to_string()).unwrap_or_else(|_| "none".to_string())
}

#[wasm_bindgen]
pub fn current_template() -> String {
    with_scene(|scene| scene.template().to_string()).unwrap_or_default()
}

/// Hand world position `[x, y, z]`; the far-away sentinel when no hand
#[wasm_bindgen]
pub fn hand_position() -> Vec<f32> {
    with_scene(|scene| {
        let p = scene.hand_position();
        vec![p.x, p.y, p.z]
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{apply_hand_landmarks, init_scene};
    use crate::error::SceneError;
    use crate::hand::{FLAT_HAND_LEN, INDEX_MCP, MIDDLE_MCP, MIDDLE_TIP, THUMB_TIP, WRIST};

    fn pointing_flat() -> Vec<f32> {
        let mut data = vec![0.5; FLAT_HAND_LEN];
        data.iter_mut().skip(2).step_by(3).for_each(|z| *z = 0.0);
        let mut set_y = |index: usize, y: f32| data[index * 3 + 1] = y;
        set_y(WRIST, 0.9);
        set_y(THUMB_TIP, 0.85);
        set_y(INDEX_MCP, 0.7);
        set_y(MIDDLE_MCP, 0.6);
        set_y(MIDDLE_TIP, 0.7);
        data
    }

    #[test]
    fn test_scene_through_bridge() {
        // error level keeps every event off the (browser-only) console
        init_scene(Some(
            r#"{ "particle_count": 16, "seed": 5, "log_level": "error" }"#.to_string(),
        ))
        .unwrap();

        assert_eq!(particle_count(), 16);
        assert_eq!(particle_positions().len(), 48);
        assert_eq!(particle_colors().len(), 48);
        assert_eq!(current_template(), "sphere");
        assert!(take_render_flags().rebind);
        assert!(!take_render_flags().rebind);

        apply_hand_landmarks(&pointing_flat(), 1);
        assert_eq!(current_gesture(), "pointing");
        assert_eq!(current_template(), "heart");
        assert!(take_render_flags().rebind);

        // truncated data counts as no hand
        apply_hand_landmarks(&pointing_flat()[..30], 1);
        assert_eq!(current_gesture(), "none");
        assert_eq!(hand_position(), vec![1000.0, 1000.0, 1000.0]);

        update_particles();
        assert!((particle_size() - 0.05).abs() < 1e-6);
        let flags = take_render_flags();
        assert!(flags.positions_dirty && flags.colors_dirty && !flags.rebind);
    }

    #[test]
    fn test_frame_before_init_reports_error() {
        // fresh thread, so the scene slot is empty
        let result = std::thread::spawn(|| {
            update_particles();
            run_frame()
        })
        .join()
        .unwrap();
        assert!(matches!(result, Err(SceneError::NotInitialized)));
    }
}
