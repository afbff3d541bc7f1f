/// Floating point tolerance used for equality checks and division guarding.
pub const EPSILON: f64 = 0.001;

/// The value every game is trying to reach.
pub const TARGET: f64 = 24.0;

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
///
/// # Examples
///
/// ```
/// use twentyfour_core::approx_eq;
///
/// assert!(approx_eq(24.0, 24.0009));
/// assert!(!approx_eq(24.0, 24.01));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns `true` if `value` is within [`EPSILON`] of [`TARGET`].
#[must_use]
pub fn is_target(value: f64) -> bool {
    approx_eq(value, TARGET)
}

/// Returns `true` if `value` is too close to zero to divide by.
#[must_use]
pub fn is_near_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
