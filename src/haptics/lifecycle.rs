use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, warn};

use super::{BackendHandle, HapticBackend, HapticEngine, map_progress};
use crate::model::{LifecycleEvent, Pulse};

/// Owns the live engine and rebuilds it on foreground and reset notifications.
///
/// Visibility changes and backend resets arrive from independent sources; both
/// go through one inbox and are applied strictly in arrival order. A reset that
/// races a background transition therefore resolves to whichever came last.
pub struct EngineLifecycle {
    backend: Rc<dyn HapticBackend>,
    engine: Option<Box<dyn HapticEngine>>,
    inbox: VecDeque<LifecycleEvent>,
}

impl EngineLifecycle {
    pub fn new(backend: BackendHandle) -> Self {
        Self {
            backend: backend.0,
            engine: None,
            inbox: VecDeque::new(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.engine.is_some()
    }

    pub fn pending(&self) -> usize {
        self.inbox.len()
    }

    pub fn enqueue(&mut self, event: LifecycleEvent) {
        self.inbox.push_back(event);
    }

    /// Applies every queued event, oldest first.
    pub fn drain(&mut self) {
        while let Some(event) = self.inbox.pop_front() {
            self.apply(event);
        }
    }

    pub fn dispatch(&mut self, event: LifecycleEvent) {
        self.enqueue(event);
        self.drain();
    }

    pub fn on_foreground(&mut self) {
        self.dispatch(LifecycleEvent::Foreground);
    }

    pub fn on_background(&mut self) {
        self.dispatch(LifecycleEvent::Background);
    }

    pub fn on_engine_reset(&mut self) {
        self.dispatch(LifecycleEvent::EngineReset);
    }

    /// Plays one pulse on the live engine. Dropped silently when there is none.
    pub fn play(&mut self, pulse: Pulse) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if let Err(e) = engine.play_pulse(pulse) {
            warn!("{e}");
        }
    }

    /// Maps gated progress to a pulse and plays it.
    pub fn play_progress(&mut self, progress: f64) {
        self.play(map_progress(progress));
    }

    fn apply(&mut self, event: LifecycleEvent) {
        debug!("haptic engine lifecycle: {event:?}");
        match event {
            LifecycleEvent::Foreground | LifecycleEvent::EngineReset => self.recreate(),
            LifecycleEvent::Background => self.release(),
        }
    }

    fn recreate(&mut self) {
        self.release();
        match self.backend.create_and_start() {
            Ok(engine) => self.engine = Some(engine),
            Err(e) => warn!("{e}"),
        }
    }

    fn release(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            if let Err(e) = engine.stop() {
                warn!("{e}");
            }
        }
    }
}
