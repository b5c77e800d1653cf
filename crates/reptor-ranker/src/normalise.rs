//! Confidence normalisation: maps an observation count onto [0, 1].

/// Piecewise ease-in/ease-out step with threshold `a` and saturation `b`.
///
/// - `x <= a`                 → 0
/// - `a < x < a + b/2`        → 2((x - a)/(b - a))²
/// - `a + b/2 <= x < b`       → 1 - 2((b - x)/(b - a))²
/// - `x >= b`                 → 1
///
/// The midpoint is `a + b/2`, not `(a + b)/2`. With that midpoint the rising
/// branch can overshoot 1 before `b` (e.g. `a=4, b=8, x=7`), so the result
/// is clamped to [0, 1].
pub fn sigmoid(x: f64, a: f64, b: f64) -> f64 {
    let midpoint = a + b / 2.0;
    let span = b - a;

    let y = if x <= a {
        0.0
    } else if x < midpoint && x < b {
        2.0 * ((x - a) / span).powi(2)
    } else if x < b {
        1.0 - 2.0 * ((b - x) / span).powi(2)
    } else {
        1.0
    };

    y.clamp(0.0, 1.0)
}
