pub mod easing;
pub mod hysteresis;
pub mod touch;

pub use easing::{CubicBezier, ease_in};
pub use hysteresis::HysteresisGate;
pub use touch::{GestureTracker, TouchSession};
