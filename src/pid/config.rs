// src/pid/config.rs

//! A module specifying the shared scalar abstraction and the tunable
//! surface of the PID controller. This module is designed for embedded
//! systems in no_std environments; the controller runs on any scalar type
//! meeting the `Number` requirements, floating or fixed-point. It includes
//! the configuration structure for controller gains, weightings, filter
//! coefficients, and saturation bounds, along with its validation error.

use core::fmt;
use core::ops::{Neg, Sub};
use num_traits::{One, Zero};

/// Custom trait to encapsulate base number requirements.
pub trait Number:
    Copy + PartialEq + PartialOrd + Zero + One + Sub<Output = Self> + Neg<Output = Self>
{
    /// Clamps generic PartialOrd values within a given range.
    fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if max < self {
            max
        } else {
            self
        }
    }
}

impl<T> Number for T where
    T: Copy + PartialEq + PartialOrd + Zero + One + Sub<Output = T> + Neg<Output = T>
{
}

/// Error returned when a PID configuration fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PidConfigError {
    /// The saturation bounds are inverted: `u_max` is below `u_min`.
    SaturationBounds,
}

impl fmt::Display for PidConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PidConfigError::SaturationBounds => {
                write!(f, "saturation bounds are inverted: u_max is below u_min")
            }
        }
    }
}

/// Configuration for PID gains, weightings, and saturation bounds.
///
/// The fields are the entire tunable surface of the controller. They are
/// set by the operator and never mutated by the controller itself; the
/// configuration may be replaced between control iterations for gain
/// scheduling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidConfig<T: Number> {
    /// Reference weighting applied to the set point in the proportional
    /// term.
    pub kr: T,
    /// Proportional gain, applied to the sum of the three terms.
    pub kp: T,
    /// Integral gain.
    pub ki: T,
    /// Derivative gain.
    pub kd: T,
    /// Derivative weighting applied to the set point in the derivative
    /// term. Zero gives derivative-on-measurement, avoiding derivative
    /// kick on set point steps.
    pub km: T,
    /// Scaling for the integral-of-absolute-error performance index.
    /// Reserved; the controller does not currently surface the index.
    pub kiae: T,
    /// Upper saturation bound for the controller output.
    pub u_max: T,
    /// Lower saturation bound for the controller output. Must not exceed
    /// `u_max`.
    pub u_min: T,
    /// First derivative filter coefficient.
    ///
    /// The filter coefficients are not derived internally; set them
    /// according to the desired derivative filter time constant and the
    /// sample period of the control loop.
    pub c1: T,
    /// Second derivative filter coefficient.
    pub c2: T,
}

impl<T: Number> PidConfig<T> {
    /// Creates a new configuration with pass-through defaults: a unit
    /// proportional path, the integral and derivative paths disabled, and
    /// per-unit saturation bounds. These should be replaced with values
    /// tuned for the plant.
    ///
    /// Example Usage
    /// ```
    /// use digital_motor_control::pid::PidConfig;
    ///
    /// let mut config = PidConfig::<f64>::new();
    ///
    /// // Set the controller gains.
    /// config.kp = 1.2;
    /// config.ki = 0.08;
    /// config.kd = 0.01;
    ///
    /// // Set the derivative filter coefficients for the sample period.
    /// config.c1 = 188.0;
    /// config.c2 = 0.88;
    ///
    /// // Set the saturation bounds to the actuator range.
    /// config.u_max = 1.0;
    /// config.u_min = -1.0;
    ///
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new() -> Self {
        Self {
            kr: T::one(),
            kp: T::one(),
            ki: T::zero(),
            kd: T::zero(),
            km: T::one(),
            kiae: T::zero(),
            u_max: T::one(),
            u_min: -T::one(),
            c1: T::one(),
            c2: T::zero(),
        }
    }

    /// Checks the configuration invariants, rejecting an inverted
    /// saturation bound pair rather than silently swapping it.
    pub fn validate(&self) -> Result<(), PidConfigError> {
        if self.u_max < self.u_min {
            return Err(PidConfigError::SaturationBounds);
        }
        Ok(())
    }
}
