//! Tactile feedback: backend contract, intensity mapping and engine lifecycle.
//!
//! The backend is injected rather than looked up globally. A device without
//! tactile output gets [`NoopBackend`], which turns the whole feedback path
//! into a no-op.

pub mod intensity;
pub mod lifecycle;
pub mod vibrate;

use std::rc::Rc;

use crate::error::HapticResult;
use crate::model::Pulse;

pub use intensity::map_progress;
pub use lifecycle::EngineLifecycle;
pub use vibrate::VibrationBackend;

/// A live output engine. Dropped after `stop`, never restarted.
pub trait HapticEngine {
    /// Submits one transient pulse at relative time zero without waiting for it.
    fn play_pulse(&mut self, pulse: Pulse) -> HapticResult<()>;
    fn stop(&mut self) -> HapticResult<()>;
}

pub trait HapticBackend {
    fn create_and_start(&self) -> HapticResult<Box<dyn HapticEngine>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBackend;

struct NoopEngine;

impl HapticEngine for NoopEngine {
    fn play_pulse(&mut self, _pulse: Pulse) -> HapticResult<()> {
        Ok(())
    }

    fn stop(&mut self) -> HapticResult<()> {
        Ok(())
    }
}

impl HapticBackend for NoopBackend {
    fn create_and_start(&self) -> HapticResult<Box<dyn HapticEngine>> {
        Ok(Box::new(NoopEngine))
    }
}

/// Shared backend reference usable as a component prop. Equality is identity.
#[derive(Clone)]
pub struct BackendHandle(pub Rc<dyn HapticBackend>);

impl BackendHandle {
    pub fn new(backend: impl HapticBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }

    /// The platform backend when the device supports it, otherwise a no-op.
    pub fn detect() -> Self {
        match VibrationBackend::detect() {
            Some(backend) => Self::new(backend),
            None => {
                log::info!("tactile output unavailable, haptics disabled");
                Self::new(NoopBackend)
            }
        }
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BackendHandle")
    }
}
