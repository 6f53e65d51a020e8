// Web Vibration API backend.
use js_sys::Reflect;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::Navigator;

use super::{HapticBackend, HapticEngine};
use crate::error::{HapticError, HapticResult};
use crate::model::Pulse;
use crate::util::document_visible;

/// Duration of a full-intensity, full-sharpness pulse.
pub const MAX_PULSE_MS: f64 = 20.0;
/// How much longer the softest pulse lasts than the sharpest one.
const SOFTNESS_STRETCH: f64 = 0.5;

/// Vibration only has a duration knob: intensity scales it, and low
/// sharpness stretches it into a duller buzz.
pub fn pulse_duration_ms(pulse: Pulse) -> u32 {
    let softness = 1.0 - pulse.sharpness.clamp(0.0, 1.0);
    let ms = pulse.intensity.clamp(0.0, 1.0) * MAX_PULSE_MS * (1.0 + softness * SOFTNESS_STRETCH);
    ms.round() as u32
}

pub struct VibrationBackend {
    navigator: Navigator,
}

impl VibrationBackend {
    /// Probed once at startup; `None` when the browser has no `navigator.vibrate`.
    pub fn detect() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        match Reflect::has(&navigator, &JsValue::from_str("vibrate")) {
            Ok(true) => Some(Self { navigator }),
            Ok(false) => None,
            Err(e) => {
                warn!("{}", HapticError::create(&e));
                None
            }
        }
    }
}

impl HapticBackend for VibrationBackend {
    fn create_and_start(&self) -> HapticResult<Box<dyn HapticEngine>> {
        // Browsers drop vibration requests from hidden pages.
        if !document_visible() {
            return Err(HapticError::CreateFailed("document is hidden".into()));
        }
        Ok(Box::new(VibrationEngine {
            navigator: self.navigator.clone(),
        }))
    }
}

struct VibrationEngine {
    navigator: Navigator,
}

impl HapticEngine for VibrationEngine {
    fn play_pulse(&mut self, pulse: Pulse) -> HapticResult<()> {
        let ms = pulse_duration_ms(pulse);
        if ms == 0 {
            return Ok(());
        }
        if self.navigator.vibrate_with_duration(ms) {
            Ok(())
        } else {
            Err(HapticError::PlaybackFailed(format!(
                "vibrate({ms}) rejected"
            )))
        }
    }

    fn stop(&mut self) -> HapticResult<()> {
        if self.navigator.vibrate_with_duration(0) {
            Ok(())
        } else {
            Err(HapticError::StopFailed("vibrate(0) rejected".into()))
        }
    }
}
