//! Detection-side entry points: hand landmarks and camera matrices

use wasm_bindgen::prelude::*;

use crate::hand::LandmarkSet;
use crate::projection::CameraTransform;

use super::scene::with_scene;

/// MediaPipe results callback.
///
/// `flat_data` holds `num_hands` × 21 × (x, y, z); only the first hand is
/// used. Zero hands resets the hand to "not present".
#[wasm_bindgen]
pub fn apply_hand_landmarks(flat_data: &[f32], num_hands: usize) {
    let hand = if num_hands == 0 {
        None
    } else {
        match LandmarkSet::from_flat(flat_data) {
            Ok(set) => Some(set),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    };

    if let Err(e) = with_scene(|scene| scene.apply_detection(hand.as_ref())) {
        tracing::warn!("{}", e);
    }
}

/// Push the renderer's camera: column-major projection and view matrices
/// (16 floats each) and the camera's world position (3 floats)
#[wasm_bindgen]
pub fn set_camera(projection: &[f32], view: &[f32], position: &[f32]) -> Result<(), JsValue> {
    let camera = CameraTransform::from_column_slices(projection, view, position)?;
    with_scene(|scene| scene.set_camera(camera))?;
    Ok(())
}
