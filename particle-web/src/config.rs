//! Scene configuration, parsed from a JSON string handed over by JavaScript

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::particles::Template;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of particles in the cloud; fixed for the scene's lifetime
    pub particle_count: usize,
    /// Template generated when the scene is created
    pub initial_template: Template,
    /// tracing level: "trace", "debug", "info", "warn" or "error"
    pub log_level: String,
    /// Fixed seed for the particle random source (random when absent)
    pub seed: Option<u32>,
    pub camera: CameraConfig,
    pub effect: EffectConfig,
    pub detector: DetectorConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: 5000,
            initial_template: Template::Sphere,
            log_level: "info".to_string(),
            seed: None,
            camera: CameraConfig::default(),
            effect: EffectConfig::default(),
            detector: DetectorConfig::default(),
        }
    }
}

/// Default perspective camera, used until JS pushes real matrices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 0.0, 5.0],
        }
    }
}

/// Hand interaction tuning for the frame update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Distance from the camera at which the hand is placed (world units)
    pub target_distance: f32,
    /// Planar distance at which proximity reaches zero
    pub falloff: f32,
    /// Per-frame lerp factor toward white at full proximity
    pub blend_rate: f32,
    pub base_size: f32,
    pub size_gain: f32,
    pub fist_size: f32,
    pub fist_color: [f32; 3],
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            target_distance: 3.0,
            falloff: 2.0,
            blend_rate: 0.1,
            base_size: 0.05,
            size_gain: 0.1,
            fist_size: 0.5,
            fist_color: [1.0, 0.0, 0.0],
        }
    }
}

/// MediaPipe Hands options, passed back to JS for `hands.setOptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    pub capture_width: u32,
    pub capture_height: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.5,
            capture_width: 1280,
            capture_height: 720,
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl SceneConfig {
    /// Parse configuration from a JSON string; missing fields take defaults
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Detector options as JSON
    pub fn detector_json(&self) -> Result<String> {
        serde_json::to_string(&self.detector)
            .map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(invalid("particle_count", "must be greater than 0").into());
        }

        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(invalid("log_level", "unknown tracing level").into());
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(invalid("camera.fov_degrees", "must be in (0, 180)").into());
        }
        if camera.aspect <= 0.0 {
            return Err(invalid("camera.aspect", "must be positive").into());
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(invalid("camera.near", "need 0 < near < far").into());
        }

        let effect = &self.effect;
        if effect.target_distance <= 0.0 {
            return Err(invalid("effect.target_distance", "must be positive").into());
        }
        if effect.falloff <= 0.0 {
            return Err(invalid("effect.falloff", "must be positive").into());
        }
        if !(0.0..=1.0).contains(&effect.blend_rate) {
            return Err(invalid("effect.blend_rate", "must be between 0.0 and 1.0").into());
        }
        if effect.fist_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(invalid("effect.fist_color", "channels must be in [0, 1]").into());
        }

        let detector = &self.detector;
        if detector.max_num_hands == 0 {
            tracing::warn!("detector.max_num_hands is 0, no hand will ever be tracked");
        }
        for (field, value) in [
            ("detector.minDetectionConfidence", detector.min_detection_confidence),
            ("detector.minTrackingConfidence", detector.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0").into());
            }
        }

        Ok(())
    }
}
