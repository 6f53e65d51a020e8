//! Tunables for the pull-feedback gesture.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::util::local_storage;

/// localStorage key holding a JSON `ArcScrollConfig` override.
pub const STORAGE_KEY: &str = "arc_scroll_config";

/// Viewport height used when the window can't be measured.
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 932.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcScrollConfig {
    /// Pull travel between two feedback evaluations. Small values (2-3) feel
    /// like a rubber band, larger ones (5-10) like a gear.
    pub tap_distance: f64,
    /// Pull distance that completes the gesture, as a fraction of viewport height.
    pub pull_threshold_fraction: f64,
}

impl Default for ArcScrollConfig {
    fn default() -> Self {
        Self {
            tap_distance: 2.0,
            pull_threshold_fraction: 0.178111588,
        }
    }
}

impl ArcScrollConfig {
    /// Loads the stored override, falling back to defaults.
    pub fn load() -> Self {
        let Some(store) = local_storage() else {
            return Self::default();
        };
        match store.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => Self::from_json(&raw),
            _ => Self::default(),
        }
    }

    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<ArcScrollConfig>(raw) {
            Ok(cfg) => cfg.validated(),
            Err(e) => {
                warn!("ignoring unparsable {STORAGE_KEY}: {e}");
                Self::default()
            }
        }
    }

    /// Replaces non-finite or out-of-range values with their defaults.
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        let mut cfg = self;
        if !(cfg.tap_distance.is_finite() && cfg.tap_distance >= 0.0) {
            warn!("invalid tap_distance {}, using default", cfg.tap_distance);
            cfg.tap_distance = defaults.tap_distance;
        }
        if !(cfg.pull_threshold_fraction.is_finite() && cfg.pull_threshold_fraction > 0.0) {
            warn!(
                "invalid pull_threshold_fraction {}, using default",
                cfg.pull_threshold_fraction
            );
            cfg.pull_threshold_fraction = defaults.pull_threshold_fraction;
        }
        cfg
    }

    /// Pull distance, in CSS pixels, that counts as a completed pull.
    pub fn threshold_for(&self, viewport_height: f64) -> f64 {
        let height = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            FALLBACK_VIEWPORT_HEIGHT
        };
        height * self.pull_threshold_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ArcScrollConfig::default();
        assert_eq!(cfg.tap_distance, 2.0);
        assert!((cfg.threshold_for(1000.0) - 178.111588).abs() < 1e-9);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = ArcScrollConfig::from_json(r#"{"tap_distance": 6}"#);
        assert_eq!(cfg.tap_distance, 6.0);
        assert_eq!(
            cfg.pull_threshold_fraction,
            ArcScrollConfig::default().pull_threshold_fraction
        );
    }

    #[test]
    fn garbage_falls_back() {
        assert_eq!(
            ArcScrollConfig::from_json("not json"),
            ArcScrollConfig::default()
        );
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let cfg = ArcScrollConfig::from_json(r#"{"pull_threshold_fraction": 0, "tap_distance": -1}"#);
        assert_eq!(cfg, ArcScrollConfig::default());
    }

    #[test]
    fn unmeasurable_viewport_uses_fallback() {
        let cfg = ArcScrollConfig::default();
        assert_eq!(cfg.threshold_for(0.0), cfg.threshold_for(FALLBACK_VIEWPORT_HEIGHT));
        assert_eq!(cfg.threshold_for(f64::NAN), cfg.threshold_for(FALLBACK_VIEWPORT_HEIGHT));
    }
}
