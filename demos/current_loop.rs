// demos/current_loop.rs

use digital_motor_control::{
    clarke3, iclarke, ipark, park, to_radians, PidConfig, PidController,
};

fn main() {
    // Shared tuning for the direct- and quadrature-axis current loops.
    let mut config = PidConfig::<f64>::new();

    // Set the controller gains.
    config.kp = 0.6;
    config.ki = 0.15;

    // Set the saturation bounds to the per-unit inverter voltage range.
    config.u_max = 1.0;
    config.u_min = -1.0;

    // Each axis owns an independent controller instance.
    let mut d_pid = PidController::with_config(config).expect("valid configuration");
    let mut q_pid = PidController::with_config(config).expect("valid configuration");

    // Current targets: no field current, a constant torque command.
    let id_target = 0.0;
    let iq_target = 0.75;

    // Simulated rotor-frame plant state and electrical angle.
    let mut id = 0.0;
    let mut iq = 0.0;
    let mut angle = 0.0;
    let step = to_radians(8.0);

    println!("                        D,        Q");
    for t in 0..=15 {
        angle += step;

        // The plant presents its state as instantaneous phase currents.
        let (alpha, beta) = ipark(id, iq, angle);
        let (phase_a, phase_b, phase_c) = iclarke(alpha, beta);

        // Measurement path: phase samples back into the rotating frame.
        let (alpha_m, beta_m) = clarke3(phase_a, phase_b, phase_c);
        let (id_m, iq_m) = park(alpha_m, beta_m, angle);

        // One control iteration per axis.
        let vd = d_pid.update(id_target, id_m);
        let vq = q_pid.update(iq_target, iq_m);

        // print results
        println!("t = {}", t);
        println!("    Target:     {:-8.3}, {:-8.3}", id_target, iq_target);
        println!("    Measured:   {:-8.3}, {:-8.3}", id_m, iq_m);
        println!("    Voltage:    {:-8.3}, {:-8.3}", vd, vq);

        // simulate a first-order current response
        id += (vd - id) * 0.2;
        iq += (vq - iq) * 0.2;
    }
}
