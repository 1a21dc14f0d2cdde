//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method (RK4) is one of the most
//! widely used numerical integrators for ordinary differential equations:
//!
//! ```text
//! dy/dt = f(y)
//! ```
//!
//! The RK4 scheme uses a weighted average of four slope estimates:
//!
//! ```text
//! k₁ = f(yₙ)
//! k₂ = f(yₙ + dt/2 * k₁)
//! k₃ = f(yₙ + dt/2 * k₂)
//! k₄ = f(yₙ + dt * k₃)
//!
//! yₙ₊₁ = yₙ + dt/6 * (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(dt⁴))
//! - **Stability**: Better stability than Euler, suitable for moderate stiffness
//! - **Complexity**: 4 rate evaluations per step
//!
//! # Comparison with Euler
//!
//! | Method | Order | Evals/Step | Typical dt | Error |
//! |--------|-------|------------|------------|-------|
//! | Euler  | 1     | 1          | Small      | O(dt) |
//! | RK4    | 4     | 4          | Moderate   | O(dt⁴)|
//!
//! # Recorded Growth Rate
//!
//! The growth-rate series of the trajectory stores, for each step, the mu of
//! the **first stage only** (k₁, evaluated at the start of the step). It is
//! a diagnostic value and plays no role in the integration itself; averaging
//! across stages would change reported trajectories without improving the
//! solution, so the first-stage convention is kept deliberately.

use log::debug;

use crate::solver::{Scenario, SimulationError, Solver, SolverConfiguration, Trajectory};

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// Implements the RK4 time integration scheme with four intermediate stages
/// per time step, providing fourth-order accuracy.
///
/// # Algorithm
///
/// For the reactor system d(X, S, P)/dt = f(X, S, P):
///
/// 1. Record the initial state and the growth rate evaluated at it
/// 2. For each time step n = 0, 1, 2, ..., N-1:
///    - **Stage 1**: k₁ = f(yₙ), slope at the beginning of the interval
///    - **Stage 2**: k₂ = f(yₙ + dt/2·k₁), midpoint slope using k₁
///    - **Stage 3**: k₃ = f(yₙ + dt/2·k₂), midpoint slope using k₂
///    - **Stage 4**: k₄ = f(yₙ + dt·k₃), endpoint slope using k₃
///    - **Update**: yₙ₊₁ = yₙ + dt/6·(k₁ + 2k₂ + 2k₃ + k₄), then floor each
///      concentration at zero
///    - Record the state and the mu of the k₁ evaluation
/// 3. Return the complete trajectory
///
/// Intermediate stage states are handed to the rate law unclamped; the rate
/// law itself guards against a transiently negative substrate.
///
/// # Example
///
/// ```rust
/// use ferm_rs::models::{KineticParameters, MonodKinetics};
/// use ferm_rs::physics::ReactorState;
/// use ferm_rs::solver::{RK4Solver, Scenario, Solver, SolverConfiguration};
///
/// let model = Box::new(MonodKinetics::batch(KineticParameters::default()));
/// let scenario = Scenario::new(model, ReactorState::default());
///
/// let solver = RK4Solver::new();
///
/// // Larger steps than Euler for the same accuracy
/// let config = SolverConfiguration::new(10.0, 0.1);
///
/// let result = solver.solve(&scenario, &config).unwrap();
/// assert_eq!(result.len(), 101);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferm_rs::solver::{RK4Solver, Solver};
    ///
    /// let solver = RK4Solver::new();
    /// assert_eq!(solver.name(), "Runge-Kutta 4");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK4Solver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<Trajectory, SimulationError> {
        // ====== Step 1: Validation ======

        config.validate()?;

        // ====== Step 2: Setup ======

        let dt = config.time_step;
        let n_steps = config.n_steps();

        debug!(
            "Runge-Kutta 4: {} steps of dt = {} for model '{}'",
            n_steps,
            dt,
            scenario.model_name()
        );

        // Preallocate storage for the trajectory.
        let mut times = Vec::with_capacity(n_steps + 1);
        let mut states = Vec::with_capacity(n_steps + 1);
        let mut growth_rates = Vec::with_capacity(n_steps + 1);

        let mut state = scenario.initial;
        times.push(0.0);
        states.push(state);
        growth_rates.push(scenario.model.compute_rates(&state).mu);

        // ====== Step 3: Time Integration ======

        for step in 0..n_steps {
            // ====== RK4 Stages ======

            // Stage 1: slope at the beginning of the interval
            let k1 = scenario.model.compute_rates(&state);

            // Stage 2: midpoint slope using an Euler prediction with k₁
            let k2 = scenario
                .model
                .compute_rates(&(state + k1.derivative() * (dt / 2.0)));

            // Stage 3: midpoint slope using an Euler prediction with k₂
            let k3 = scenario
                .model
                .compute_rates(&(state + k2.derivative() * (dt / 2.0)));

            // Stage 4: endpoint slope using an Euler prediction with k₃
            let k4 = scenario
                .model
                .compute_rates(&(state + k3.derivative() * dt));

            // ====== RK4 Update ======

            // Simpson-rule weights: endpoints 1/6, midpoints 2/6.
            let weighted_slope = k1.derivative()
                + k2.derivative() * 2.0
                + k3.derivative() * 2.0
                + k4.derivative();

            state = (state + weighted_slope * (dt / 6.0)).clamped_non_negative();

            // ====== Storage ======

            states.push(state);

            // Recorded mu comes from the first stage only (start of the
            // step), never an average across stages.
            growth_rates.push(k1.mu);

            // Store time point: t_{n+1} = (step + 1) * dt, computed directly
            // from the index so rounding error does not accumulate.
            times.push((step as f64 + 1.0) * dt);
        }

        // ====== Step 4: Build Result ======

        let mut result = Trajectory::new(times, states, growth_rates);

        // Add metadata
        result.add_metadata("solver", self.name());
        result.add_metadata("time steps", &n_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &config.total_time.to_string());
        result.add_metadata("rate evaluations", &(4 * n_steps + 1).to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Runge-Kutta 4"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{KineticModel, RateResult, ReactorState};

    // ====== Mock Models for Testing ======

    /// Mock model: first-order biomass decay dX/dt = -k * X
    ///
    /// Analytical solution: X(t) = X_0 * exp(-k * t)
    struct BiomassDecay {
        decay_rate: f64,
    }

    impl KineticModel for BiomassDecay {
        fn compute_rates(&self, state: &ReactorState) -> RateResult {
            RateResult {
                d_biomass: -self.decay_rate * state.biomass,
                d_substrate: 0.0,
                d_product: 0.0,
                mu: 0.0,
                q_substrate: 0.0,
                q_product: 0.0,
            }
        }

        fn name(&self) -> &'static str {
            "Biomass Decay"
        }
    }

    /// Mock model: substrate drains at a constant rate while mu reports the
    /// substrate level seen by the evaluation.
    ///
    /// Makes the growth-rate recording convention observable: the mu stored
    /// for step n must be the substrate at the START of step n, not a value
    /// from a later stage.
    struct MuTracker;

    impl KineticModel for MuTracker {
        fn compute_rates(&self, state: &ReactorState) -> RateResult {
            RateResult {
                d_biomass: 0.0,
                d_substrate: -1.0,
                d_product: 0.0,
                mu: state.substrate,
                q_substrate: 0.0,
                q_product: 0.0,
            }
        }

        fn name(&self) -> &'static str {
            "Mu Tracker"
        }
    }

    fn decay_scenario(decay_rate: f64) -> Scenario {
        Scenario::new(
            Box::new(BiomassDecay { decay_rate }),
            ReactorState::new(1.0, 0.0, 0.0),
        )
    }

    // ====== Solver creation tests ======

    #[test]
    fn test_rk4_solver_creation() {
        let solver = RK4Solver::new();
        assert_eq!(solver.name(), "Runge-Kutta 4");
    }

    #[test]
    fn test_rk4_solver_default() {
        let solver = RK4Solver::default();
        assert_eq!(solver.name(), "Runge-Kutta 4");
    }

    // ====== Configuration Tests ======

    #[test]
    fn test_rk4_rejects_non_positive_time_step() {
        let solver = RK4Solver::new();
        let scenario = decay_scenario(0.1);

        for dt in [0.0, -1.0] {
            let config = SolverConfiguration::new(10.0, dt);
            let result = solver.solve(&scenario, &config);

            assert_eq!(result.unwrap_err(), SimulationError::InvalidTimeStep(dt));
        }
    }

    // ====== Numerical accuracy tests ======

    #[test]
    fn test_rk4_exponential_decay() {
        // dX/dt = -k*X → X(t) = X_0 * exp(-k*t); RK4 has fourth-order error

        let solver = RK4Solver::new();
        let decay_rate = 0.1;
        let total_time = 10.0;

        let scenario = decay_scenario(decay_rate);
        let config = SolverConfiguration::new(total_time, 0.1);

        let result = solver.solve(&scenario, &config).unwrap();

        // Analytical solution: X(10) = exp(-1)
        let expected = (-decay_rate * total_time).exp();
        let actual = result.final_state().unwrap().biomass;

        // O(dt⁴) error with dt = 0.1
        let error = (actual - expected).abs();
        assert!(error < 1e-6, "Error {} too large for RK4", error);
    }

    #[test]
    fn test_rk4_matches_single_step_hand_calculation() {
        // One step of dX/dt = -X from X = 1 with dt = 1:
        // k1 = -1, k2 = -0.5, k3 = -0.75, k4 = -0.25
        // X_1 = 1 + (1/6)(-1 - 1 - 1.5 - 0.25) = 0.375
        let solver = RK4Solver::new();
        let scenario = decay_scenario(1.0);

        let config = SolverConfiguration::new(1.0, 1.0);
        let result = solver.solve(&scenario, &config).unwrap();

        assert!((result.states[1].biomass - 0.375).abs() < 1e-12);
    }

    // ====== Trajectory tests ======

    #[test]
    fn test_rk4_trajectory_length_and_grid() {
        let solver = RK4Solver::new();
        let scenario = decay_scenario(0.1);

        let dt = 0.25;
        let config = SolverConfiguration::new(5.0, dt);
        let result = solver.solve(&scenario, &config).unwrap();

        assert_eq!(result.len(), 21);

        for (k, &t) in result.times.iter().enumerate() {
            assert_eq!(t, k as f64 * dt);
        }
    }

    #[test]
    fn test_rk4_records_first_stage_growth_rate() {
        // With mu = S and dS/dt = -1, the mu stored for step n must equal
        // the substrate at the start of that step: S0 - n*dt.
        let solver = RK4Solver::new();
        let initial = ReactorState::new(0.0, 5.0, 0.0);
        let scenario = Scenario::new(Box::new(MuTracker), initial);

        let dt = 0.5;
        let config = SolverConfiguration::new(2.0, dt);
        let result = solver.solve(&scenario, &config).unwrap();

        // Index 0 records mu at the initial state itself.
        assert_eq!(result.growth_rates[0], 5.0);

        // Index n+1 records the k1 stage of step n, which lags one step
        // behind the state written at the same index.
        for n in 0..result.len() - 1 {
            assert_eq!(
                result.growth_rates[n + 1],
                result.states[n].substrate,
                "recorded mu at index {} is not the first-stage value",
                n + 1
            );
        }
    }

    #[test]
    fn test_rk4_clamps_overshoot_to_zero() {
        // A constant drain keeps pulling the substrate down past zero; every
        // step past exhaustion must be floored rather than go negative.
        struct ConstantDrain;

        impl KineticModel for ConstantDrain {
            fn compute_rates(&self, _state: &ReactorState) -> RateResult {
                RateResult {
                    d_biomass: 0.0,
                    d_substrate: -1.0,
                    d_product: 0.0,
                    mu: 0.0,
                    q_substrate: 1.0,
                    q_product: 0.0,
                }
            }

            fn name(&self) -> &'static str {
                "Constant Drain"
            }
        }

        let solver = RK4Solver::new();
        let scenario = Scenario::new(Box::new(ConstantDrain), ReactorState::new(0.0, 1.0, 0.0));

        let config = SolverConfiguration::new(2.0, 0.5);
        let result = solver.solve(&scenario, &config).unwrap();

        // S: 1.0, 0.5, 0.0, then clamped at zero for the remaining steps
        assert_eq!(result.states[2].substrate, 0.0);
        assert_eq!(result.states[3].substrate, 0.0);
        assert!(result.states.iter().all(|s| s.substrate >= 0.0));
    }

    // ====== Metadata Tests ======

    #[test]
    fn test_rk4_metadata() {
        let solver = RK4Solver::new();
        let scenario = decay_scenario(0.1);

        let config = SolverConfiguration::new(10.0, 0.1);
        let result = solver.solve(&scenario, &config).unwrap();

        assert_eq!(
            result.metadata.get("solver"),
            Some(&"Runge-Kutta 4".to_string())
        );
        assert_eq!(result.metadata.get("time steps"), Some(&"100".to_string()));
        // 4 evaluations per step plus the initial diagnostic evaluation
        assert_eq!(
            result.metadata.get("rate evaluations"),
            Some(&"401".to_string())
        );
    }
}
