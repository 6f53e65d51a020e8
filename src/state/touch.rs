// Pull gesture state: touch session, distance sampling and progress.
use log::debug;

use super::easing::ease_in;
use super::hysteresis::HysteresisGate;
use crate::config::ArcScrollConfig;

/// Lives only while a finger is on the surface.
#[derive(Default, Debug, Clone)]
pub struct TouchSession {
    pub is_active: bool,
    /// Baseline for the next evaluation. After a touch ends this holds the raw
    /// offset at release; during a gesture, the last evaluated pull distance.
    pub last_sampled_offset: f64,
}

/// Turns scroll samples of an active touch into gated feedback progress.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    session: TouchSession,
    gate: HysteresisGate,
    threshold: f64,
    tap_distance: f64,
}

impl GestureTracker {
    pub fn new(threshold: f64, tap_distance: f64) -> Self {
        Self {
            session: TouchSession::default(),
            gate: HysteresisGate::new(),
            threshold: threshold.max(f64::EPSILON),
            tap_distance: tap_distance.max(0.0),
        }
    }

    pub fn from_config(config: &ArcScrollConfig, viewport_height: f64) -> Self {
        Self::new(config.threshold_for(viewport_height), config.tap_distance)
    }

    pub fn session(&self) -> &TouchSession {
        &self.session
    }

    pub fn gate(&self) -> &HysteresisGate {
        &self.gate
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn on_touch_begin(&mut self) {
        self.session.is_active = true;
    }

    pub fn on_touch_end(&mut self, current_offset: f64) {
        self.session.is_active = false;
        self.session.last_sampled_offset = current_offset;
    }

    /// Clamped, un-eased pull progress for a raw scroll offset.
    pub fn progress_for(&self, offset: f64) -> f64 {
        let distance = (-offset).max(0.0);
        (distance / self.threshold).min(1.0)
    }

    /// Feeds one scroll sample. Returns the progress to play feedback for, if
    /// the sample was evaluated and the gate fired.
    pub fn on_scroll(&mut self, offset: f64) -> Option<f64> {
        if !self.session.is_active {
            return None;
        }

        let distance = (-offset).max(0.0);
        let eased = ease_in(self.progress_for(offset));

        if (distance - self.session.last_sampled_offset).abs() < self.tap_distance {
            return None;
        }

        let decision = self.gate.evaluate(eased);
        self.session.last_sampled_offset = distance;
        if let Some(p) = decision.progress() {
            debug!("pull feedback at distance {distance:.1}, progress {p:.3}");
        }
        decision.progress()
    }
}
