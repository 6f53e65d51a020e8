use crate::model::Decision;

/// One-shot latch for a pull cycle.
///
/// Below the threshold every evaluation fires a graduated event. Crossing it
/// fires exactly one terminal event and latches; the gate re-arms only once
/// progress drops strictly below 1.0 again, and re-arming itself is silent.
#[derive(Default, Debug, Clone)]
pub struct HysteresisGate {
    has_fired: bool,
}

impl HysteresisGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.has_fired
    }

    pub fn evaluate(&mut self, eased_progress: f64) -> Decision {
        if self.has_fired {
            if eased_progress < 1.0 {
                self.has_fired = false;
            }
            return Decision::Hold;
        }
        if eased_progress >= 1.0 {
            self.has_fired = true;
            Decision::Fire(1.0)
        } else {
            Decision::Fire(eased_progress)
        }
    }
}
