//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions from world coordinates into the integer
//! block domain used by terrain queries.

/// Truncate a coordinate toward zero and clamp it into the `i32` domain.
///
/// Non-finite input maps to `0`.
///
/// # Examples
/// ```
/// use hoverpet::numeric::truncate_to_i32;
/// assert_eq!(truncate_to_i32(3.9), 3);
/// assert_eq!(truncate_to_i32(-3.9), -3);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn truncate_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let clamped = value.trunc().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}
