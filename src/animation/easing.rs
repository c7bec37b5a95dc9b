//! # Easing Curves
//!
//! CSS-style cubic bézier timing functions. The curve runs from (0,0) to
//! (1,1); `solve` maps linear progress to eased progress.

/// Cubic bézier timing function with control points `(x1, y1)` and `(x2, y2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// Ease-out curve shared by every reveal on the page
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f32 = 1e-3;
const PRECISION: f32 = 1e-6;
const BISECTION_STEPS: usize = 32;

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t`, clamped to `[0, 1]`
    pub fn solve(&self, t: f32) -> f32 {
        if !(t > 0.0) {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let u = self.parameter_for_x(t);
        bezier(u, self.y1, self.y2)
    }

    fn parameter_for_x(&self, x: f32) -> f32 {
        let mut u = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = bezier(u, self.x1, self.x2) - x;
            if err.abs() < PRECISION {
                return u;
            }
            let slope = bezier_slope(u, self.x1, self.x2);
            if slope.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            u -= err / slope;
        }

        // Newton stalled on a flat segment
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        u = x;
        for _ in 0..BISECTION_STEPS {
            let value = bezier(u, self.x1, self.x2);
            if (value - x).abs() < PRECISION {
                break;
            }
            if value < x {
                lo = u;
            } else {
                hi = u;
            }
            u = (lo + hi) * 0.5;
        }
        u
    }
}

#[inline]
fn bezier(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

#[inline]
fn bezier_slope(u: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(EASE_OUT.solve(0.0), 0.0);
        assert_eq!(EASE_OUT.solve(1.0), 1.0);
        assert_eq!(EASE_OUT.solve(-3.0), 0.0);
        assert_eq!(EASE_OUT.solve(7.0), 1.0);
        assert_eq!(EASE_OUT.solve(f32::NAN), 0.0);
    }

    #[test]
    fn test_ease_out_leads_linear() {
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!(EASE_OUT.solve(t) > t, "ease-out should lead at t={t}");
        }
    }

    #[test]
    fn test_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = EASE_OUT.solve(i as f32 / 100.0);
            assert!(v >= last - 1e-5);
            last = v;
        }
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.solve(t) - t).abs() < 1e-4);
        }
    }
}
