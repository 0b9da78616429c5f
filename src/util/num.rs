/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `i32` if the value is finite, within range, and
/// not fractional.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// - `Some(i32)`: The converted value if it is exact.
/// - `None`: For non-finite, out-of-range, or fractional values.
///
/// # Example
/// ```
/// use mathnote::util::num::f64_to_i32_checked;
///
/// assert_eq!(f64_to_i32_checked(-12.0), Some(-12));
/// assert_eq!(f64_to_i32_checked(1.5), None);
/// assert_eq!(f64_to_i32_checked(1e12), None);
/// assert_eq!(f64_to_i32_checked(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_checked(value: f64) -> Option<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}

/// Returns the nearest integer to `value` if it lies within `tolerance` of
/// it and is exactly representable as an `f64`.
///
/// # Parameters
/// - `value`: The floating-point value to inspect.
/// - `tolerance`: How far `value` may sit from the integer.
///
/// # Returns
/// - `Some(i64)`: The nearest integer.
/// - `None`: If `value` is not within tolerance of a safe integer.
///
/// # Example
/// ```
/// use mathnote::util::num::integral_value;
///
/// assert_eq!(integral_value(2.000_000_000_000_000_4, 1e-15), Some(2));
/// assert_eq!(integral_value(-3.0, 0.0), Some(-3));
/// assert_eq!(integral_value(0.5, 1e-15), None);
/// assert_eq!(integral_value(1e300, 1.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn integral_value(value: f64, tolerance: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let nearest = value.round();
    if nearest.abs() > MAX_SAFE_I64_INT as f64 || (value - nearest).abs() > tolerance {
        return None;
    }
    Some(nearest as i64)
}

