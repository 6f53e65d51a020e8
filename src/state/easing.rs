// Cubic Bézier easing, anchored at (0,0) and (1,1).

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;
const EPSILON: f64 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// The standard "ease" ease-in curve: slow start, full speed at the end.
    pub const EASE_IN: CubicBezier = CubicBezier::new(0.42, 0.0, 1.0, 1.0);

    /// Control point x values must lie in `[0, 1]` for the curve to be a function of x.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps `x` in `[0, 1]` to the eased value. Inputs outside the unit
    /// interval (and NaN) are pinned to the nearest end.
    pub fn ease(&self, x: f64) -> f64 {
        if !(x > 0.0) {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        sample(self.y1, self.y2, t).clamp(0.0, 1.0)
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(self.x1, self.x2, t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let v = sample(self.x1, self.x2, t);
            if (v - x).abs() < EPSILON {
                break;
            }
            if x > v {
                lo = t;
            } else {
                hi = t;
            }
            t = lo + (hi - lo) * 0.5;
        }
        t
    }
}

// One coordinate of the curve at parameter t, with endpoints fixed at 0 and 1.
fn sample(a1: f64, a2: f64, t: f64) -> f64 {
    let c = 3.0 * a1;
    let b = 3.0 * (a2 - a1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn slope(a1: f64, a2: f64, t: f64) -> f64 {
    let c = 3.0 * a1;
    let b = 3.0 * (a2 - a1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Ease-in applied to pull progress.
pub fn ease_in(progress: f64) -> f64 {
    CubicBezier::EASE_IN.ease(progress)
}
