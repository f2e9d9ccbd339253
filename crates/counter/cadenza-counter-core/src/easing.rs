//! Timing helpers: elapsed ratio and ease-out cubic.

/// Ease-out cubic: fast start, settles into the end value. `f(0) = 0`, `f(1) = 1`.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fraction of `duration_ms` elapsed, clamped to `[0, 1]`.
///
/// Zero, negative and non-finite durations complete immediately.
#[inline]
pub fn elapsed_ratio(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return 1.0;
    }
    let t = elapsed_ms / duration_ms;
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}
