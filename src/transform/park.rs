// src/transform/park.rs

//! # Park Transform Module
//!
//! This module provides the Park transformation, which rotates the two-phase
//! stationary frame into a rotating frame aligned with a given angle, and
//! its inverse. The pair form an orthonormal rotation and its transpose, so
//! composing them is the identity up to floating-point rounding.

use crate::Number;
use num_traits::Float;

/// Rotates a stationary vector into the rotating frame at `angle` (radians):
///
/// - `ds = alpha * cos(angle) + beta * sin(angle)`
/// - `qs = -alpha * sin(angle) + beta * cos(angle)`
///
/// The result is meaningful only together with the angle used to produce it.
/// Angles are not normalized; any real value is numerically valid.
pub fn park<T: Float>(alpha: T, beta: T, angle: T) -> (T, T) {
    let (sin_angle, cos_angle) = angle.sin_cos();
    park_sin_cos(alpha, beta, sin_angle, cos_angle)
}

/// Rotates a vector in the rotating frame at `angle` (radians) back into the
/// stationary frame:
///
/// - `alpha = ds * cos(angle) - qs * sin(angle)`
/// - `beta = ds * sin(angle) + qs * cos(angle)`
pub fn ipark<T: Float>(ds: T, qs: T, angle: T) -> (T, T) {
    let (sin_angle, cos_angle) = angle.sin_cos();
    ipark_sin_cos(ds, qs, sin_angle, cos_angle)
}

/// Variant of [`park`] taking the precomputed sine and cosine of the
/// rotation angle. Fixed-point targets without a floating-point unit can
/// supply values from a CORDIC or lookup-table routine.
pub fn park_sin_cos<T: Number>(alpha: T, beta: T, sin_angle: T, cos_angle: T) -> (T, T) {
    let ds = alpha * cos_angle + beta * sin_angle;
    let qs = beta * cos_angle - alpha * sin_angle;
    (ds, qs)
}

/// Variant of [`ipark`] taking the precomputed sine and cosine of the
/// rotation angle.
pub fn ipark_sin_cos<T: Number>(ds: T, qs: T, sin_angle: T, cos_angle: T) -> (T, T) {
    let alpha = ds * cos_angle - qs * sin_angle;
    let beta = ds * sin_angle + qs * cos_angle;
    (alpha, beta)
}
