//! Convergence tests for numerical solvers
//!
//! These tests verify that solvers exhibit the expected
//! convergence rates when refining the time step.

use ferm_rs::prelude::*;

mod common;
use common::{final_decay_biomass, relative_error};

#[test]
fn test_euler_first_order_convergence() {
    // Euler should have first-order convergence: error ~ O(dt)
    // When dt → dt/2, error should → error/2

    let kd: f64 = 0.3;
    let total_time: f64 = 5.0;
    let exact = 0.1 * (-kd * total_time).exp();

    let steps_list = [100, 200, 400, 800];
    let mut errors = Vec::new();

    for &steps in &steps_list {
        let actual = final_decay_biomass(kd, total_time, steps, IntegrationMethod::Euler);
        errors.push((actual - exact).abs());
    }

    // Check convergence ratios
    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("Euler convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 2 for first-order
        assert!(
            ratio > 1.8 && ratio < 2.2,
            "Convergence ratio {} not first-order",
            ratio
        );
    }
}

#[test]
fn test_rk4_fourth_order_convergence() {
    // RK4 should have fourth-order convergence: error ~ O(dt⁴)
    // When dt → dt/2, error should → error/16

    let kd: f64 = 0.3;
    let total_time: f64 = 5.0;
    let exact = 0.1 * (-kd * total_time).exp();

    // Coarse grids keep the errors well above floating-point noise
    let steps_list = [5, 10, 20, 40];
    let mut errors = Vec::new();

    for &steps in &steps_list {
        let actual = final_decay_biomass(kd, total_time, steps, IntegrationMethod::Rk4);
        errors.push((actual - exact).abs());
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("RK4 convergence ratio {}->{}: {}", i, i + 1, ratio);

        // Should be close to 16 for fourth-order
        assert!(
            ratio > 12.0 && ratio < 20.0,
            "Convergence ratio {} not fourth-order",
            ratio
        );
    }
}

#[test]
fn test_euler_and_rk4_agree_at_small_time_step() {
    // At dt = 0.001 both methods approximate the same continuous
    // trajectory; their final states must agree within ~1e-3.

    let params = KineticParameters::default();
    let initial = ReactorState::default();

    let euler = simulate_batch(
        &params,
        &initial,
        &SolverConfiguration::new(10.0, 0.001).with_method(IntegrationMethod::Euler),
    )
    .unwrap();
    let rk4 = simulate_batch(
        &params,
        &initial,
        &SolverConfiguration::new(10.0, 0.001).with_method(IntegrationMethod::Rk4),
    )
    .unwrap();

    let last_euler = euler.final_state().unwrap();
    let last_rk4 = rk4.final_state().unwrap();

    assert!((last_euler.biomass - last_rk4.biomass).abs() < 1e-3);
    assert!((last_euler.substrate - last_rk4.substrate).abs() < 1e-3);
    assert!((last_euler.product - last_rk4.product).abs() < 1e-3);
}

#[test]
fn test_rk4_approaches_logistic_substrate_exhaustion() {
    // With the default parameters the batch culture eventually consumes all
    // substrate and converts it to biomass at the yield ratio. The final
    // biomass must approach X0 + Yxs * S0.

    let params = KineticParameters::default();
    let initial = ReactorState::default();

    let trajectory = simulate_batch(
        &params,
        &initial,
        &SolverConfiguration::new(200.0, 0.05),
    )
    .unwrap();

    let last = trajectory.final_state().unwrap();
    let ceiling = initial.biomass + params.yield_xs * initial.substrate;

    assert!(last.substrate < 1e-3, "substrate not exhausted");
    assert!(relative_error(last.biomass, ceiling) < 1e-3);
}

#[test]
fn test_rk4_conserves_the_yield_invariant() {
    // With mS = kd = 0, every rate evaluation satisfies dX = -Yxs * dS, so
    // X + Yxs * S is conserved by the continuous system and by any
    // Runge-Kutta combination of stage slopes. The discrete trajectory must
    // hold it to rounding precision.

    let params = KineticParameters::default();
    let initial = ReactorState::default();

    let trajectory = simulate_batch(
        &params,
        &initial,
        &SolverConfiguration::new(10.0, 0.1),
    )
    .unwrap();

    let invariant = initial.biomass + params.yield_xs * initial.substrate;

    for (k, state) in trajectory.states.iter().enumerate() {
        let value = state.biomass + params.yield_xs * state.substrate;
        assert!(
            (value - invariant).abs() < 1e-9,
            "invariant drifted to {} at step {}",
            value,
            k
        );
    }
}
