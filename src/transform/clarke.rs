// src/transform/clarke.rs

//! # Clarke Transform Module
//!
//! This module provides the Clarke transformation, which converts balanced
//! three-phase quantities into balanced two-phase orthogonal quantities in
//! the stationary frame, and its inverse.

use num_traits::Float;

/// Converts three instantaneous phase samples into the two-phase stationary
/// frame:
///
/// - `alpha = phase_a`
/// - `beta = (phase_b - phase_c) / sqrt(3)`
///
/// The transform is defined for any three samples, but the result is only
/// physically meaningful when the balanced assumption
/// `phase_a + phase_b + phase_c ~ 0` holds. The transform does not verify
/// the assumption.
pub fn clarke3<T: Float>(phase_a: T, phase_b: T, phase_c: T) -> (T, T) {
    let sqrt_3 = (T::one() + T::one() + T::one()).sqrt();
    let alpha = phase_a;
    let beta = (phase_b - phase_c) / sqrt_3;
    (alpha, beta)
}

/// Two-input variant of [`clarke3`] for sensing setups that measure only
/// phases A and B. It substitutes `phase_c = -(phase_a + phase_b)` into the
/// three-input form, giving:
///
/// - `alpha = phase_a`
/// - `beta = (phase_a + 2 * phase_b) / sqrt(3)`
///
/// Equivalent to [`clarke3`] whenever the balanced assumption holds; callers
/// choose whichever variant matches their available sensors.
pub fn clarke2<T: Float>(phase_a: T, phase_b: T) -> (T, T) {
    let two = T::one() + T::one();
    let sqrt_3 = (two + T::one()).sqrt();
    let alpha = phase_a;
    let beta = (phase_a + two * phase_b) / sqrt_3;
    (alpha, beta)
}

/// Converts a two-phase stationary vector back into three phase quantities:
///
/// - `a = alpha`
/// - `b = (-alpha + sqrt(3) * beta) / 2`
/// - `c = (-alpha - sqrt(3) * beta) / 2`
///
/// The returned phases sum to zero; composing with [`clarke3`] is the
/// identity for balanced inputs.
pub fn iclarke<T: Float>(alpha: T, beta: T) -> (T, T, T) {
    let two = T::one() + T::one();
    let sqrt_3 = (two + T::one()).sqrt();
    let a = alpha;
    let b = (-alpha + sqrt_3 * beta) / two;
    let c = (-alpha - sqrt_3 * beta) / two;
    (a, b, c)
}
