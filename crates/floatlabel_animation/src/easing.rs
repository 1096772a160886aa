//! Easing curves for timed animations

/// An easing curve mapping linear progress to eased progress
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in
    EaseIn,
    /// Cubic ease-out
    EaseOut,
    /// Slow start, abrupt stop: `cubic-bezier(0.42, 0, 1, 1)`
    Ease,
    /// [`Easing::Ease`] mirrored around the midpoint
    ///
    /// The default curve of timed transitions on mobile toolkits.
    #[default]
    EaseInOut,
    /// A CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map `t` in `0.0..=1.0` to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::Ease => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    Easing::Ease.apply(t * 2.0) / 2.0
                } else {
                    1.0 - Easing::Ease.apply((1.0 - t) * 2.0) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_component(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve the curve parameter for `x` and evaluate `y` there
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson first, bisection when the slope flattens out
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_component(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return bezier_component(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let current = bezier_component(x1, x2, s);
        if (current - x).abs() < 1e-6 {
            break;
        }
        if current < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_component(y1, y2, s)
}
