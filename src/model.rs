//! Core data types shared by the gesture tracker and the haptics layer.

/// A single transient tactile pulse, both parameters in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    /// How crisp the tap feels; higher is sharper.
    pub sharpness: f64,
    /// How strong the tap is.
    pub intensity: f64,
}

impl Pulse {
    pub const COMPLETE: Pulse = Pulse {
        sharpness: 1.0,
        intensity: 1.0,
    };

    pub fn new(sharpness: f64, intensity: f64) -> Self {
        Self {
            sharpness: sharpness.clamp(0.0, 1.0),
            intensity: intensity.clamp(0.0, 1.0),
        }
    }
}

/// Outcome of a hysteresis evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    /// Play feedback for this progress value.
    Fire(f64),
    /// Suppressed: either latched or just re-armed.
    Hold,
}

impl Decision {
    pub fn progress(self) -> Option<f64> {
        match self {
            Decision::Fire(p) => Some(p),
            Decision::Hold => None,
        }
    }
}

/// Notifications feeding the engine lifecycle, processed in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The page became visible.
    Foreground,
    /// The page was hidden.
    Background,
    /// The backend's resources were invalidated and must be rebuilt.
    EngineReset,
}
