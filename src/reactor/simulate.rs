//! Batch and CSTR time integration
//!
//! The two simulators share everything but the feed condition: a batch
//! reactor is the rate law at D = 0, Sin = 0, so the batch entry point
//! neither takes nor validates a feed. The CSTR entry point requires a
//! strictly positive dilution rate.

use log::debug;

use crate::models::{FeedCondition, KineticParameters, MonodKinetics};
use crate::physics::{KineticModel, ReactorState};
use crate::solver::{
    EulerSolver, IntegrationMethod, RK4Solver, Scenario, SimulationError, Solver,
    SolverConfiguration, Trajectory,
};

/// Simulate a closed batch fermentation.
///
/// Integrates the growth kinetics over the configured horizon with the
/// configured method and returns the full trajectory.
///
/// # Errors
///
/// [`SimulationError::InvalidTimeStep`] when `config.time_step <= 0`. The
/// check happens before any computation.
///
/// # Example
///
/// ```rust
/// use ferm_rs::prelude::*;
///
/// let trajectory = simulate_batch(
///     &KineticParameters::default(),
///     &ReactorState::default(),
///     &SolverConfiguration::default(),
/// )
/// .unwrap();
///
/// assert_eq!(trajectory.len(), 101);
/// assert_eq!(trajectory.times[0], 0.0);
/// ```
pub fn simulate_batch(
    params: &KineticParameters,
    initial: &ReactorState,
    config: &SolverConfiguration,
) -> Result<Trajectory, SimulationError> {
    config.validate()?;

    debug!(
        "batch simulation: method = {}, horizon = {}, dt = {}",
        config.method, config.total_time, config.time_step
    );

    let model = MonodKinetics::batch(*params);
    let mut trajectory = run(Box::new(model), *initial, config)?;
    trajectory.add_metadata("reactor", "batch");
    Ok(trajectory)
}

/// Simulate a continuously-stirred tank reactor.
///
/// Same integration as [`simulate_batch`] with the dilution and feed terms
/// active.
///
/// # Errors
///
/// - [`SimulationError::InvalidTimeStep`] when `config.time_step <= 0`
/// - [`SimulationError::InvalidDilutionRate`] when `feed.dilution_rate <= 0`
///   (a CSTR without throughput is a batch reactor; use [`simulate_batch`])
///
/// Both checks happen before any computation.
///
/// # Example
///
/// ```rust
/// use ferm_rs::prelude::*;
///
/// let feed = FeedCondition::cstr(0.1, 10.0);
/// let trajectory = simulate_cstr(
///     &KineticParameters::default(),
///     &feed,
///     &ReactorState::default(),
///     &SolverConfiguration::default(),
/// )
/// .unwrap();
///
/// assert_eq!(trajectory.len(), 101);
/// ```
pub fn simulate_cstr(
    params: &KineticParameters,
    feed: &FeedCondition,
    initial: &ReactorState,
    config: &SolverConfiguration,
) -> Result<Trajectory, SimulationError> {
    config.validate()?;
    if feed.dilution_rate <= 0.0 {
        return Err(SimulationError::InvalidDilutionRate(feed.dilution_rate));
    }

    debug!(
        "CSTR simulation: D = {}, Sin = {}, method = {}, horizon = {}, dt = {}",
        feed.dilution_rate, feed.feed_substrate, config.method, config.total_time, config.time_step
    );

    let model = MonodKinetics::new(*params, *feed);
    let mut trajectory = run(Box::new(model), *initial, config)?;
    trajectory.add_metadata("reactor", "cstr");
    Ok(trajectory)
}

/// Assemble the scenario and dispatch on the configured method.
fn run(
    model: Box<dyn KineticModel>,
    initial: ReactorState,
    config: &SolverConfiguration,
) -> Result<Trajectory, SimulationError> {
    let scenario = Scenario::new(model, initial);

    let solver: Box<dyn Solver> = match config.method {
        IntegrationMethod::Euler => Box::new(EulerSolver::new()),
        IntegrationMethod::Rk4 => Box::new(RK4Solver::new()),
    };

    solver.solve(&scenario, config)
}

// =================================================================================================
// Tests
// =================================================================================================
