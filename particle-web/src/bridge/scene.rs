//! Scene slot and setup entry points
//!
//! The scene lives in one thread-local slot (WASM is single-threaded).
//! Detection callbacks and the render loop both borrow it briefly.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::SceneConfig;
use crate::error::{Result, SceneError};
use crate::logging;
use crate::particles::XorShift32;
use crate::scene::SceneState;

thread_local! {
    static SCENE: RefCell<Option<SceneState>> = const { RefCell::new(None) };
}

/// Run `f` against the scene, or fail if `init_scene` hasn't run
pub(crate) fn with_scene<R>(f: impl FnOnce(&mut SceneState) -> R) -> Result<R> {
    SCENE.with(|scene_cell| {
        let mut slot = scene_cell.borrow_mut();
        let scene = slot.as_mut().ok_or(SceneError::NotInitialized)?;
        Ok(f(scene))
    })
}

/// Build the scene. `config_json` may be omitted or partial; missing fields
/// take defaults. Calling again replaces the scene.
#[wasm_bindgen]
pub fn init_scene(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => SceneConfig::from_json(json)?,
        None => SceneConfig::default(),
    };

    logging::init(&config.log_level);

    let rng = match config.seed {
        Some(seed) => XorShift32::new(seed),
        None => XorShift32::from_timestamp(js_sys::Date::now()),
    };
    let scene = SceneState::new(config, rng)?;

    SCENE.with(|scene_cell| {
        *scene_cell.borrow_mut() = Some(scene);
    });
    Ok(())
}

/// MediaPipe Hands options and capture size as JSON, for `hands.setOptions`
/// and the camera helper
#[wasm_bindgen]
pub fn detector_options() -> std::result::Result<String, JsValue> {
    let json = match with_scene(|scene| scene.config().detector_json()) {
        Ok(json) => json?,
        Err(_) => SceneConfig::default().detector_json()?,
    };
    Ok(json)
}
