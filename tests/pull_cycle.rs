use std::cell::{Cell, RefCell};
use std::rc::Rc;

use arc_scroll::haptics::{BackendHandle, EngineLifecycle, HapticBackend, HapticEngine};
use arc_scroll::state::GestureTracker;
use arc_scroll::{ArcScrollConfig, HapticError, HapticResult, Pulse};

#[derive(Default)]
struct Log {
    created: Cell<u32>,
    stopped: Cell<u32>,
    pulses: RefCell<Vec<Pulse>>,
    fail_playback: Cell<bool>,
}

struct Recorder(Rc<Log>);

struct RecordingEngine(Rc<Log>);

impl HapticEngine for RecordingEngine {
    fn play_pulse(&mut self, pulse: Pulse) -> HapticResult<()> {
        if self.0.fail_playback.get() {
            return Err(HapticError::PlaybackFailed("device busy".into()));
        }
        self.0.pulses.borrow_mut().push(pulse);
        Ok(())
    }

    fn stop(&mut self) -> HapticResult<()> {
        self.0.stopped.set(self.0.stopped.get() + 1);
        Ok(())
    }
}

impl HapticBackend for Recorder {
    fn create_and_start(&self) -> HapticResult<Box<dyn HapticEngine>> {
        self.0.created.set(self.0.created.get() + 1);
        Ok(Box::new(RecordingEngine(self.0.clone())))
    }
}

struct Harness {
    log: Rc<Log>,
    tracker: GestureTracker,
    lifecycle: EngineLifecycle,
}

impl Harness {
    fn mounted() -> Self {
        let log = Rc::new(Log::default());
        let mut lifecycle = EngineLifecycle::new(BackendHandle::new(Recorder(log.clone())));
        lifecycle.on_foreground();
        Self {
            log,
            tracker: GestureTracker::new(100.0, 2.0),
            lifecycle,
        }
    }

    fn scroll(&mut self, offset: f64) -> Option<f64> {
        let fired = self.tracker.on_scroll(offset);
        if let Some(p) = fired {
            self.lifecycle.play_progress(p);
        }
        fired
    }

    fn pulses(&self) -> Vec<Pulse> {
        self.log.pulses.borrow().clone()
    }

    fn completes(&self) -> usize {
        self.pulses().iter().filter(|p| **p == Pulse::COMPLETE).count()
    }
}

#[test]
fn pull_past_threshold_ramps_then_completes_once() {
    let mut h = Harness::mounted();
    h.tracker.on_touch_begin();

    assert_eq!(h.scroll(0.0), None);
    let fired: Vec<f64> = [-5.0, -40.0, -90.0]
        .into_iter()
        .filter_map(|o| h.scroll(o))
        .collect();
    assert_eq!(fired.len(), 3);
    assert!(fired.windows(2).all(|w| w[0] < w[1]));
    assert!(fired.iter().all(|p| *p < 1.0));

    assert_eq!(h.scroll(-140.0), Some(1.0));
    assert_eq!(h.scroll(-150.0), None);
    assert_eq!(h.scroll(-200.0), None);

    let pulses = h.pulses();
    assert_eq!(pulses.len(), 4);
    assert!(pulses[..3].iter().all(|p| p.intensity < 0.5 && p.sharpness < 0.4));
    assert!(pulses[..3].windows(2).all(|w| w[0].intensity < w[1].intensity));
    assert_eq!(h.completes(), 1);
}

#[test]
fn retreat_rearms_and_next_crossing_completes_again() {
    let mut h = Harness::mounted();
    h.tracker.on_touch_begin();
    for o in [0.0, -5.0, -40.0, -90.0, -140.0] {
        h.scroll(o);
    }
    assert_eq!(h.completes(), 1);
    let before = h.pulses().len();

    // Re-arming is silent.
    assert_eq!(h.scroll(-20.0), None);
    assert_eq!(h.pulses().len(), before);
    assert!(!h.tracker.gate().has_fired());

    assert_eq!(h.scroll(-110.0), Some(1.0));
    assert_eq!(h.completes(), 2);
}

#[test]
fn scroll_after_release_is_ignored() {
    let mut h = Harness::mounted();
    h.tracker.on_touch_begin();
    h.scroll(-30.0);
    h.tracker.on_touch_end(-30.0);
    let before = h.pulses().len();
    for o in [-60.0, -120.0, -10.0, 0.0] {
        assert_eq!(h.scroll(o), None);
    }
    assert_eq!(h.pulses().len(), before);
    assert!(!h.tracker.gate().has_fired());
}

#[test]
fn visibility_flapping_without_gesture_plays_nothing() {
    let mut h = Harness::mounted();
    for _ in 0..2 {
        h.lifecycle.on_background();
        assert!(!h.lifecycle.is_live());
        h.lifecycle.on_foreground();
        assert!(h.lifecycle.is_live());
    }
    assert!(h.pulses().is_empty());
    assert_eq!(h.log.created.get(), 3);
    assert_eq!(h.log.stopped.get(), 2);
}

#[test]
fn backgrounded_engine_drops_feedback_but_gate_still_advances() {
    let mut h = Harness::mounted();
    h.lifecycle.on_background();
    h.tracker.on_touch_begin();
    assert_eq!(h.scroll(-150.0), Some(1.0));
    assert!(h.pulses().is_empty());
    assert!(h.tracker.gate().has_fired());

    // Nothing was queued while the engine was away.
    h.lifecycle.on_foreground();
    assert!(h.pulses().is_empty());
}

#[test]
fn playback_failure_does_not_disturb_the_gesture() {
    let mut h = Harness::mounted();
    h.log.fail_playback.set(true);
    h.tracker.on_touch_begin();
    h.scroll(-50.0);
    assert_eq!(h.scroll(-120.0), Some(1.0));
    assert!(h.tracker.gate().has_fired());
    assert!(h.lifecycle.is_live());

    h.log.fail_playback.set(false);
    h.scroll(-30.0);
    assert_eq!(h.scroll(-125.0), Some(1.0));
    assert_eq!(h.completes(), 1);
}

#[test]
fn engine_reset_rebuilds_a_fresh_engine() {
    let mut h = Harness::mounted();
    h.lifecycle.on_engine_reset();
    assert_eq!(h.log.created.get(), 2);
    assert_eq!(h.log.stopped.get(), 1);
    h.lifecycle.play(Pulse::COMPLETE);
    assert_eq!(h.completes(), 1);
}

#[test]
fn tracker_from_config_uses_viewport_fraction() {
    let cfg = ArcScrollConfig {
        tap_distance: 4.0,
        pull_threshold_fraction: 0.1,
    };
    let mut t = GestureTracker::from_config(&cfg, 1000.0);
    assert!((t.threshold() - 100.0).abs() < 1e-9);
    t.on_touch_begin();
    assert!(t.on_scroll(-10.0).is_some());
    // 3 units of travel is below the configured tap distance.
    assert_eq!(t.on_scroll(-13.0), None);
    assert!(t.on_scroll(-14.0).is_some());
}
