//! Common utilities for integration tests

use ferm_rs::prelude::*;

/// Parameters that reduce the model to pure first-order biomass decay:
/// no growth (mu_max = 0), death rate `kd`.
///
/// The batch system then has the analytical solution X(t) = X0 * exp(-kd*t)
/// with S and P constant, which makes solver accuracy measurable.
pub fn decay_parameters(kd: f64) -> KineticParameters {
    KineticParameters {
        mu_max: 0.0,
        death_rate: kd,
        ..KineticParameters::default()
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Final biomass of a batch decay run at the given step count
pub fn final_decay_biomass(kd: f64, total_time: f64, steps: usize, method: IntegrationMethod) -> f64 {
    let config =
        SolverConfiguration::new(total_time, total_time / steps as f64).with_method(method);

    let trajectory = simulate_batch(&decay_parameters(kd), &ReactorState::default(), &config)
        .expect("decay simulation must succeed");

    trajectory.final_state().unwrap().biomass
}
