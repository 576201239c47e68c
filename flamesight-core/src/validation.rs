//! Advisory Input Checks
//!
//! Shared range checks for the estimator. Unlike a rejecting validator, a
//! failed check here only means "tell the operator"; the caller keeps
//! computing with the value it has.
//!
//! All checks are pure and allocation-free. Non-finite values always fail,
//! although callers sanitize before checking so in practice they see zeros.

/// `value` lies in the half-open interval `(min, max]`
pub fn in_half_open(value: f32, min: f32, max: f32) -> bool {
    value.is_finite() && value > min && value <= max
}

/// `value` is finite and strictly positive
pub fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Ratio of `width` to `reference`, or zero when either is non-positive
///
/// A zero ratio zeroes the scaled distance, which is how a missing target
/// width shows up in the estimator output.
pub fn width_scale(width: f32, reference: f32) -> f32 {
    if is_positive(width) && is_positive(reference) {
        width / reference
    } else {
        0.0
    }
}
