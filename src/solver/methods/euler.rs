//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for solving ordinary differential equations (ODEs):
//!
//! ```text
//! dy/dt = f(y)
//! ```
//!
//! The scheme approximates the solution at time t_{n+1} = t_n + dt using:
//!
//! ```text
//! y_{n+1} = y_n + dt * f(y_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: Conditionally stable (requires small time steps)
//! - **Complexity**: 1 rate evaluation per step
//! - **Memory**: O(1) working state plus the recorded trajectory
//!
//! # When to Use
//!
//! - Prototyping and quick exploratory simulations
//! - Educational demonstrations
//! - Cross-checking RK4 results at a refined step size
//!
//! # When NOT to Use
//!
//! - Production runs → use [`RK4Solver`](super::RK4Solver)
//! - High-accuracy requirements at a coarse step

use log::debug;

use crate::solver::{Scenario, SimulationError, Solver, SolverConfiguration, Trajectory};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// Implements the simplest explicit time integration scheme:
/// y_{n+1} = y_n + dt * f(y_n)
///
/// # Algorithm
///
/// For the reactor system d(X, S, P)/dt = f(X, S, P):
///
/// 1. Record the initial state and the growth rate evaluated at it
/// 2. For each time step n = 0, 1, 2, ..., N-1:
///    - Evaluate the rate law: k = f(y_n)
///    - Update each concentration: y_{n+1} = max(y_n + dt * k, 0)
///    - Record the state and the growth rate of this single evaluation
/// 3. Return the complete trajectory
///
/// # Error Analysis
///
/// - **Local truncation error**: O(dt²) per step
/// - **Global error**: O(dt) after T/dt steps
/// - **Convergence**: First-order convergence when refining dt
///
/// # Example
///
/// ```rust
/// use ferm_rs::models::{KineticParameters, MonodKinetics};
/// use ferm_rs::physics::ReactorState;
/// use ferm_rs::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};
///
/// let model = Box::new(MonodKinetics::batch(KineticParameters::default()));
/// let scenario = Scenario::new(model, ReactorState::default());
///
/// let solver = EulerSolver::new();
/// let config = SolverConfiguration::new(10.0, 0.01);
///
/// let result = solver.solve(&scenario, &config).unwrap();
/// assert_eq!(result.len(), 1001);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferm_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<Trajectory, SimulationError> {
        // ====== Step 1: Validation ======

        // The only rejectable argument; everything downstream is total.
        config.validate()?;

        // ====== Step 2: Setup ======

        let dt = config.time_step;
        let n_steps = config.n_steps();

        debug!(
            "Forward Euler: {} steps of dt = {} for model '{}'",
            n_steps,
            dt,
            scenario.model_name()
        );

        // Preallocate storage for the trajectory.
        // Reserve exact capacity to avoid reallocation during integration.
        let mut times = Vec::with_capacity(n_steps + 1);
        let mut states = Vec::with_capacity(n_steps + 1);
        let mut growth_rates = Vec::with_capacity(n_steps + 1);

        // Record the initial condition together with the growth rate
        // evaluated at it (same feed condition as the steps that follow).
        let mut state = scenario.initial;
        times.push(0.0);
        states.push(state);
        growth_rates.push(scenario.model.compute_rates(&state).mu);

        // ====== Step 3: Time Integration ======

        for step in 0..n_steps {
            // 1. Evaluate the rate law: f(y_n)
            let rates = scenario.model.compute_rates(&state);

            // 2. Update: y_{n+1} = y_n + dt * f(y_n), then floor every
            //    concentration at zero. Overshoot below zero is numerical,
            //    not physical, and must not feed the next evaluation.
            state = (state + rates.derivative() * dt).clamped_non_negative();

            // ====== Storage ======

            states.push(state);
            growth_rates.push(rates.mu);

            // Store time point: t_{n+1} = (step + 1) * dt.
            // Calculated directly from the index rather than accumulated
            // (t += dt), so rounding error does not build up over the run.
            times.push((step as f64 + 1.0) * dt);
        }

        // ====== Step 4: Build Result ======

        let mut result = Trajectory::new(times, states, growth_rates);

        // Add metadata for diagnostics and reproducibility

        result.add_metadata("solver", self.name());
        result.add_metadata("time steps", &n_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &config.total_time.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
