use crate::model::Pulse;

const BASE_SHARPNESS: f64 = 0.2;
const SHARPNESS_SPAN: f64 = 0.2;
const INTENSITY_SPAN: f64 = 0.5;

/// Maps pull progress to pulse parameters.
///
/// Intermediate taps stay in a soft band (sharpness `[0.2, 0.4)`, intensity
/// `[0, 0.5)`) so the completed pull, and only it, plays at `(1, 1)`.
pub fn map_progress(progress: f64) -> Pulse {
    if progress >= 1.0 {
        return Pulse::COMPLETE;
    }
    let p = if progress > 0.0 { progress } else { 0.0 };
    Pulse::new(BASE_SHARPNESS + p * SHARPNESS_SPAN, p * INTENSITY_SPAN)
}
