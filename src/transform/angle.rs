// src/transform/angle.rs

//! # Angle Unit Conversion Module
//!
//! This module provides conversion between degrees and radians. The rest of
//! the crate works in radians; these functions sit at the boundary for
//! callers whose sensors or operator inputs are calibrated in degrees.

use num_traits::Float;

/// Converts an angle in degrees to radians.
pub fn to_radians<T: Float>(degrees: T) -> T {
    degrees.to_radians()
}

/// Converts an angle in radians to degrees.
pub fn to_degrees<T: Float>(radians: T) -> T {
    radians.to_degrees()
}
