//! Easing functions for camera flights.
//!
//! Each curve maps normalized time in [0, 1] to normalized progress in
//! [0, 1], starting at 0 and ending at exactly 1.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for flight curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-out: `1 - (1 - t)³`.
    CubicOut,
    /// Cubic ease-in-out (slow start and end).
    CubicInOut,
}

impl EasingFunction {
    /// Default easing function: cubic ease-out, so flights settle into the
    /// target instead of arriving abruptly.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let k = -2.0 * t + 2.0;
                    1.0 - k * k * k / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticOut,
        EasingFunction::CubicOut,
        EasingFunction::CubicInOut,
    ];

    #[test]
    fn test_endpoints() {
        for f in ALL {
            assert_eq!(f.evaluate(0.0), 0.0, "{f:?} at 0");
            assert_eq!(f.evaluate(1.0), 1.0, "{f:?} at 1");
        }
    }

    #[test]
    fn test_cubic_out_midpoint() {
        // 1 - 0.5³
        assert_eq!(EasingFunction::CubicOut.evaluate(0.5), 0.875);
    }

    #[test]
    fn test_cubic_in_out_is_symmetric() {
        let f = EasingFunction::CubicInOut;
        assert_eq!(f.evaluate(0.5), 0.5);
        let a = f.evaluate(0.2);
        let b = f.evaluate(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        for f in ALL {
            assert_eq!(f.evaluate(-0.5), 0.0);
            assert_eq!(f.evaluate(1.5), 1.0);
        }
    }

    #[test]
    fn test_monotonic() {
        for f in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = f.evaluate(i as f32 / 100.0);
                assert!(v >= prev, "{f:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_default_is_cubic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicOut);
    }
}
