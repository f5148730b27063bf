//! Error types for the particle scene core

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Main error type for the scene core
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid landmark data length: {actual} (expected {expected})")]
    LandmarkLength { expected: usize, actual: usize },

    #[error("Invalid {name} length: {actual} (expected {expected})")]
    MatrixLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Camera projection x view is not invertible")]
    SingularCamera,

    #[error("Scene not initialized, call init_scene first")]
    NotInitialized,
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, SceneError>;

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
