// demos/fixed_pid.rs

use digital_motor_control::{PidConfig, PidController};
use fixed::types::I16F16;

fn main() {
    let mut config = PidConfig::<I16F16>::new();

    // Set the controller gains.
    config.kp = I16F16::from_num(0.8);
    config.ki = I16F16::from_num(0.2);

    // Set the saturation bounds to the per-unit actuator range.
    config.u_max = I16F16::from_num(1.0);
    config.u_min = I16F16::from_num(-1.0);

    let mut pid = PidController::with_config(config).expect("valid configuration");

    // Simulated speed reference and feedback.
    let reference = I16F16::from_num(0.5);
    let mut feedback = I16F16::from_num(0.0);
    let response = I16F16::from_num(0.25);

    println!("  Reference, Feedback,   Output, Saturated");
    for _ in 0..=10 {
        // Perform the control computation.
        let output = pid.update(reference, feedback);

        // print results
        println!(
            "   {:-8.3}, {:-8.3}, {:-8.3}, {}",
            reference,
            feedback,
            output,
            pid.is_saturated()
        );

        // simulate a first-order plant response
        feedback += (output - feedback) * response;
    }
}
