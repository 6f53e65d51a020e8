//! Pull-to-refresh scroll view with graduated haptic feedback.
//!
//! The gesture core ([`state`]) and the engine lifecycle ([`haptics`]) are
//! plain Rust; [`components`] wires them into a Yew scroll container.

pub mod components;
pub mod config;
pub mod error;
pub mod haptics;
pub mod model;
pub mod state;
pub mod util;

pub use config::ArcScrollConfig;
pub use error::{HapticError, HapticResult};
pub use model::{Decision, LifecycleEvent, Pulse};
