// src/pid/controller.rs

//! # Anti-Windup PID Controller Module
//!
//! This module provides a stateful discrete-time PID controller combining
//! a reference-weighted proportional term, an integral term with an
//! anti-windup clamp driven by saturation feedback, and a filtered
//! derivative term. While the saturated output differs from the raw sum of
//! terms, integral accumulation is frozen, preventing windup against a
//! limited actuator.
//!
//! The controller is designed for a single logical control loop invoking
//! [`PidController::update`] once per sampling period, sequentially. It
//! performs no internal synchronization; concurrent loops (independent
//! axes) must each own an independent controller instance, and callers
//! sharing one instance across threads must serialize access themselves.

use crate::{Number, PidConfig, PidConfigError};

/// Rolling state of the controller.
///
/// The state at iteration k depends only on the state at iteration k-1 and
/// the inputs of call k; there are no hidden global or time-based inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PidState<T: Number> {
    /// Proportional term of the most recent iteration.
    up: T,
    /// Integral term of the most recent iteration.
    ui: T,
    /// Derivative term of the most recent iteration.
    ud: T,
    /// Most recent output before saturation.
    v1: T,
    /// One-sample-delayed integrator storage.
    i1: T,
    /// One-sample-delayed differentiator storage.
    d1: T,
    /// Second one-sample-delayed differentiator storage.
    d2: T,
    /// Saturation record gating the integrator: one while the previous
    /// output was not saturated, zero while it was.
    w1: T,
}

impl<T: Number> PidState<T> {
    /// A fresh state: every rolling term zero and the integral gate armed.
    fn new() -> Self {
        Self {
            up: T::zero(),
            ui: T::zero(),
            ud: T::zero(),
            v1: T::zero(),
            i1: T::zero(),
            d1: T::zero(),
            d2: T::zero(),
            w1: T::one(),
        }
    }
}

/// Struct representing the anti-windup PID controller.
///
/// One instance owns one rolling state; its lifetime bounds the state's
/// lifetime, and [`PidController::reset`] is the only way to clear the
/// state short of dropping the instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidController<T: Number> {
    config: PidConfig<T>,
    state: PidState<T>,
}

impl<T: Number> PidController<T> {
    /// Creates a new controller with pass-through default parameters,
    /// valid by construction.
    pub fn new() -> Self {
        Self {
            config: PidConfig::new(),
            state: PidState::new(),
        }
    }

    /// Creates a new controller using the provided configuration.
    ///
    /// Fails with [`PidConfigError::SaturationBounds`] when the
    /// configuration's saturation bounds are inverted.
    pub fn with_config(config: PidConfig<T>) -> Result<Self, PidConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: PidState::new(),
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PidConfig<T> {
        &self.config
    }

    /// Replaces the configuration between control iterations, e.g. for
    /// gain scheduling. The rolling state is left untouched; call
    /// [`PidController::reset`] as well when stale integrator or
    /// differentiator storage would be meaningless under the new gains.
    ///
    /// Fails with [`PidConfigError::SaturationBounds`] when the new
    /// configuration's saturation bounds are inverted; the previous
    /// configuration then remains active.
    pub fn set_config(&mut self, config: PidConfig<T>) -> Result<(), PidConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Performs one control iteration and returns the saturated output.
    ///
    /// Each term reads the storage left behind by the previous call before
    /// overwriting it:
    ///
    /// 1. Proportional: `up = kr * reference - feedback`.
    /// 2. Integral: `ui = ki * (w1 * (reference - feedback)) + i1`, where
    ///    `w1` is the saturation record of the previous iteration; the
    ///    integrator holds its value while the output is saturated.
    /// 3. Derivative: a two-pole filtered difference of the weighted error
    ///    `reference * km - feedback`, through the `c1`/`c2` coefficients.
    /// 4. The terms are summed, scaled by `kp`, and clamped to
    ///    `[u_min, u_max]`.
    /// 5. The saturation record is updated for the next iteration.
    ///
    /// The call mutates the rolling state and is not idempotent.
    pub fn update(&mut self, reference: T, feedback: T) -> T {
        let config = self.config;
        let state = &mut self.state;

        // Proportional term.
        state.up = config.kr * reference - feedback;

        // Integral term, gated by the saturation record of the previous
        // iteration.
        state.ui = config.ki * (state.w1 * (reference - feedback)) + state.i1;
        state.i1 = state.ui;

        // Filtered derivative term.
        let d2 = config.kd * (config.c1 * (reference * config.km - feedback)) - state.d2;
        state.ud = d2 + state.d1;
        state.d1 = state.ud * config.c2;
        state.d2 = d2;

        // Combine terms and saturate.
        state.v1 = config.kp * (state.up + state.ui + state.ud);
        let output = state.v1.clamp(config.u_min, config.u_max);

        // Record saturation for the next iteration's integral gate.
        state.w1 = if output == state.v1 {
            T::one()
        } else {
            T::zero()
        };

        output
    }

    /// Zeroes the rolling state and re-arms the integral gate, as when
    /// bringing the loop back up after a stop or after retuning.
    pub fn reset(&mut self) {
        self.state = PidState::new();
    }

    /// Returns the proportional term of the most recent iteration.
    pub fn proportional(&self) -> T {
        self.state.up
    }

    /// Returns the integral term of the most recent iteration. This is
    /// also the accumulator carried into the next iteration.
    pub fn integral(&self) -> T {
        self.state.ui
    }

    /// Returns the derivative term of the most recent iteration.
    pub fn derivative(&self) -> T {
        self.state.ud
    }

    /// Returns the most recent output before saturation.
    pub fn presaturated_output(&self) -> T {
        self.state.v1
    }

    /// Returns whether the most recent output was clamped to a saturation
    /// bound. While this reads true, the integrator holds its value.
    pub fn is_saturated(&self) -> bool {
        self.state.w1 == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use fixed::types::I16F16;

    /// Test configuration with a pure proportional path and wide bounds.
    fn proportional_config() -> PidConfig<f64> {
        let mut config = PidConfig::<f64>::new();
        config.kr = 1.0;
        config.kp = 1.0;
        config.ki = 0.0;
        config.kd = 0.0;
        config.u_max = 100.0;
        config.u_min = -100.0;
        config
    }

    /// Test that a unit proportional configuration passes the error
    /// through exactly.
    #[test]
    fn test_pid_proportional_pass_through() {
        let mut pid = PidController::with_config(proportional_config()).unwrap();
        let output = pid.update(5.0, 2.0);
        assert_eq!(3.0, output, "Output should be exactly the error.");
        assert!(!pid.is_saturated(), "A pass-through output is unsaturated.");
    }

    /// Test that the reference weighting scales only the set point.
    #[test]
    fn test_pid_reference_weighting() {
        let mut config = proportional_config();
        config.kr = 0.5;
        let mut pid = PidController::with_config(config).unwrap();
        let output = pid.update(10.0, 2.0);
        assert!(
            value_close(3.0, output),
            "Output should weight the reference before the comparison."
        );
    }

    /// Test that the integral term accumulates the error each iteration.
    #[test]
    fn test_pid_integral_accumulation() {
        let mut config = proportional_config();
        config.ki = 0.5;
        let mut pid = PidController::with_config(config).unwrap();

        let output = pid.update(4.0, 0.0);
        assert!(value_close(2.0, pid.integral()), "Integral should be 2.");
        assert!(value_close(6.0, output), "Output should sum up and ui.");

        let output = pid.update(4.0, 0.0);
        assert!(
            value_close(4.0, pid.integral()),
            "Integral should accumulate to 4."
        );
        assert!(value_close(8.0, output), "Output should sum up and ui.");
    }

    /// Test the two-pole derivative filter against values computed by
    /// hand.
    #[test]
    fn test_pid_derivative_filter() {
        let mut config = proportional_config();
        config.kd = 2.0;
        config.c1 = 0.5;
        config.c2 = 0.25;
        let mut pid = PidController::with_config(config).unwrap();

        // d2 = 2 * (0.5 * 3) = 3, ud = 3, d1 becomes 0.75.
        let output = pid.update(4.0, 1.0);
        assert!(value_close(3.0, pid.derivative()), "Derivative should be 3.");
        assert!(value_close(6.0, output), "Output should be up + ud.");

        // d2 = 2 * (0.5 * 1) - 3 = -2, ud = -2 + 0.75 = -1.25.
        let output = pid.update(2.0, 1.0);
        assert!(
            value_close(-1.25, pid.derivative()),
            "Derivative should fold in the delayed storages."
        );
        assert!(value_close(-0.25, output), "Output should be up + ud.");
    }

    /// Test that zero derivative weighting differentiates the measurement
    /// alone.
    #[test]
    fn test_pid_derivative_on_measurement() {
        let mut config = proportional_config();
        config.kd = 1.0;
        config.km = 0.0;
        let mut pid = PidController::with_config(config).unwrap();

        // The reference step is invisible to the derivative path.
        pid.update(10.0, 0.0);
        assert!(
            value_close(0.0, pid.derivative()),
            "A reference step should not kick the derivative."
        );

        pid.update(10.0, 1.0);
        assert!(
            value_close(-1.0, pid.derivative()),
            "A measurement step should drive the derivative."
        );
    }

    /// Test that outputs beyond the saturation bounds are clamped on both
    /// sides.
    #[test]
    fn test_pid_saturation_clamp() {
        let mut config = proportional_config();
        config.u_max = 1.0;
        config.u_min = -1.0;

        let mut pid = PidController::with_config(config).unwrap();
        assert_eq!(1.0, pid.update(1000.0, 0.0), "Output should clamp high.");
        assert!(pid.is_saturated(), "The saturation record should read set.");

        let mut pid = PidController::with_config(config).unwrap();
        assert_eq!(-1.0, pid.update(-1000.0, 0.0), "Output should clamp low.");
        assert!(pid.is_saturated(), "The saturation record should read set.");
    }

    /// Test that an output landing exactly on a bound does not count as
    /// saturated.
    #[test]
    fn test_pid_saturation_exact_bound() {
        let mut config = proportional_config();
        config.u_max = 3.0;
        let mut pid = PidController::with_config(config).unwrap();
        let output = pid.update(5.0, 2.0);
        assert_eq!(3.0, output, "Output should reach the bound exactly.");
        assert!(
            !pid.is_saturated(),
            "Reaching the bound without clipping is not saturation."
        );
    }

    /// Test that integral accumulation freezes while the output is
    /// saturated and resumes once the output comes off the bound.
    #[test]
    fn test_pid_anti_windup() {
        let mut config = proportional_config();
        config.ki = 0.5;
        config.u_max = 1.0;
        config.u_min = -1.0;
        let mut pid = PidController::with_config(config).unwrap();

        // First call accumulates and saturates: ui = 5, v1 = 15.
        let output = pid.update(10.0, 0.0);
        assert_eq!(1.0, output, "Output should clamp to the upper bound.");
        assert!(value_close(5.0, pid.integral()), "Integral should be 5.");
        assert!(pid.is_saturated(), "The saturation record should read set.");

        // Sustained error: the gate freezes the integrator.
        for _ in 0..5 {
            let output = pid.update(10.0, 0.0);
            assert_eq!(1.0, output, "Output should stay on the bound.");
            assert!(
                value_close(5.0, pid.integral()),
                "Integral should hold while saturated."
            );
            assert!(pid.is_saturated(), "The saturation record should stay set.");
        }

        // Error small enough that the raw output fits the bounds: the
        // integrator still holds this call (the gate reads the previous
        // record), but the gate re-arms.
        let output = pid.update(-4.5, 0.0);
        assert!(value_close(0.5, output), "Output should come off the bound.");
        assert!(
            value_close(5.0, pid.integral()),
            "Integral should hold one more call."
        );
        assert!(!pid.is_saturated(), "The saturation record should clear.");

        // Accumulation resumes.
        pid.update(-4.5, 0.0);
        assert!(
            value_close(2.75, pid.integral()),
            "Integral should resume accumulating."
        );
    }

    /// Test that identical state snapshots driven with identical inputs
    /// produce identical outputs and identical resulting states.
    #[test]
    fn test_pid_determinism() {
        let mut config = proportional_config();
        config.ki = 0.3;
        config.kd = 0.1;
        config.c1 = 2.0;
        config.c2 = 0.5;
        let mut pid = PidController::with_config(config).unwrap();
        pid.update(4.0, 1.0);
        pid.update(3.0, 2.5);

        let mut snapshot = pid;
        let output = pid.update(2.0, 2.25);
        let snapshot_output = snapshot.update(2.0, 2.25);
        assert_eq!(output, snapshot_output, "Outputs should be identical.");
        assert_eq!(pid, snapshot, "Resulting states should be identical.");
    }

    /// Test that reset restores the fresh state and re-arms the integral
    /// gate.
    #[test]
    fn test_pid_reset() {
        let mut config = proportional_config();
        config.ki = 1.0;
        config.u_max = 1.0;
        config.u_min = -1.0;
        let mut pid = PidController::with_config(config).unwrap();
        pid.update(10.0, 0.0);
        assert!(pid.is_saturated(), "The drive should saturate the output.");

        pid.reset();
        assert_eq!(
            PidController::with_config(config).unwrap(),
            pid,
            "Reset should match a freshly constructed controller."
        );
        assert!(!pid.is_saturated(), "Reset should re-arm the integral gate.");
        assert!(value_close(0.0, pid.integral()), "Integral should be zero.");
    }

    /// Test that construction rejects inverted saturation bounds.
    #[test]
    fn test_pid_with_config_rejects_inverted_bounds() {
        let mut config = proportional_config();
        config.u_max = -1.0;
        config.u_min = 1.0;
        assert_eq!(
            Err(PidConfigError::SaturationBounds),
            PidController::with_config(config),
            "Construction should reject the misconfigured bounds."
        );
    }

    /// Test that reconfiguration validates and preserves the rolling state
    /// on success, for gain scheduling between iterations.
    #[test]
    fn test_pid_set_config_gain_scheduling() {
        let mut config = proportional_config();
        config.ki = 0.5;
        let mut pid = PidController::with_config(config).unwrap();
        pid.update(4.0, 0.0);
        assert!(value_close(2.0, pid.integral()), "Integral should be 2.");

        let mut scheduled = config;
        scheduled.kp = 2.0;
        assert!(pid.set_config(scheduled).is_ok(), "Rescheduling should pass.");
        assert_eq!(2.0, pid.config().kp, "The new gain should be active.");
        assert!(
            value_close(2.0, pid.integral()),
            "Reconfiguration should not disturb the rolling state."
        );

        let mut inverted = config;
        inverted.u_max = -1.0;
        inverted.u_min = 1.0;
        assert_eq!(
            Err(PidConfigError::SaturationBounds),
            pid.set_config(inverted),
            "Reconfiguration should reject the misconfigured bounds."
        );
        assert_eq!(
            2.0,
            pid.config().kp,
            "The previous configuration should remain active."
        );
    }

    /// Test the controller on a fixed-point scalar.
    #[test]
    fn test_pid_fixed_point_pass_through() {
        let mut config = PidConfig::<I16F16>::new();
        config.u_max = I16F16::from_num(100);
        config.u_min = I16F16::from_num(-100);
        let mut pid = PidController::with_config(config).unwrap();
        let output = pid.update(I16F16::from_num(5), I16F16::from_num(2));
        assert_eq!(
            I16F16::from_num(3),
            output,
            "Output should be exactly the error."
        );
    }
}
