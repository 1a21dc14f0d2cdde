//! Simulation scenario definition
//!
//! A scenario combines a kinetic model with an initial reactor state.
use crate::physics::traits::{KineticModel, ReactorState};

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Kinetic model (equations)
/// - Initial reactor state (the charge at t = 0)
///
/// # Design
///
/// The same scenario can be solved with different numerical methods.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use ferm_rs::models::{KineticParameters, MonodKinetics};
/// use ferm_rs::physics::ReactorState;
/// use ferm_rs::solver::{EulerSolver, RK4Solver, Scenario, Solver, SolverConfiguration};
///
/// let model = Box::new(MonodKinetics::batch(KineticParameters::default()));
/// let scenario = Scenario::new(model, ReactorState::default());
///
/// // Solve with different methods
/// let config = SolverConfiguration::new(10.0, 0.1);
/// let coarse = EulerSolver::new().solve(&scenario, &config).unwrap();
/// let accurate = RK4Solver::new().solve(&scenario, &config).unwrap();
/// assert_eq!(coarse.len(), accurate.len());
/// ```
pub struct Scenario {
    /// Kinetic model (equations)
    pub model: Box<dyn KineticModel>,

    /// Reactor state at t = 0
    pub initial: ReactorState,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn KineticModel>, initial: ReactorState) -> Self {
        Self { model, initial }
    }

    /// Get model name
    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("model", &self.model_name())
            .field("initial", &self.initial)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
