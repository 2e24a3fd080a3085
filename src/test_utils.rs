// src/test_utils.rs

//! This module contains utilities for testing.

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f64 = 1e-9;

/// Checks if two floating point numbers are close enough to be considered
/// equal.
///
/// # Arguments
/// * `target` - The target value.
/// * `value` - The value to compare against the target.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` is less than
/// `TEST_TOLERANCE`, otherwise `false`.
pub fn value_close(target: f64, value: f64) -> bool {
    let difference = target - value;
    let magnitude = if difference < 0.0 {
        -difference
    } else {
        difference
    };
    magnitude < TEST_TOLERANCE
}

/// Checks if each of the components in a two-phase vector is close enough
/// to be considered equal.
///
/// # Arguments
/// * `target` - The target vector as a tuple of two `f64` values.
/// * `value` - The vector to compare against the target.
///
/// # Returns
/// `true` if each component of `target` and `value` is close as per
/// `value_close`, otherwise `false`.
pub fn pair_close(target: (f64, f64), value: (f64, f64)) -> bool {
    value_close(target.0, value.0) && value_close(target.1, value.1)
}

/// Checks if each of the components in a three-phase vector is close
/// enough to be considered equal.
///
/// # Arguments
/// * `target` - The target vector as a tuple of three `f64` values.
/// * `value` - The vector to compare against the target.
///
/// # Returns
/// `true` if each component of `target` and `value` is close as per
/// `value_close`, otherwise `false`.
pub fn triple_close(target: (f64, f64, f64), value: (f64, f64, f64)) -> bool {
    value_close(target.0, value.0)
        && value_close(target.1, value.1)
        && value_close(target.2, value.2)
}
