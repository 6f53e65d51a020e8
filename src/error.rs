use thiserror::Error;
use wasm_bindgen::JsValue;

/// Faults raised by a tactile-output backend.
///
/// None of these ever leave the haptics layer: the lifecycle logs them and
/// carries on without feedback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HapticError {
    #[error("no tactile output available on this device")]
    Unavailable,
    #[error("failed to create and start the haptic engine: {0}")]
    CreateFailed(String),
    #[error("failed to play haptic pulse: {0}")]
    PlaybackFailed(String),
    #[error("failed to stop the haptic engine: {0}")]
    StopFailed(String),
}

impl HapticError {
    /// Wraps a JS exception thrown while probing or creating an engine.
    pub fn create(err: &JsValue) -> Self {
        HapticError::CreateFailed(format!("{:?}", err))
    }
}

pub type HapticResult<T> = Result<T, HapticError>;
