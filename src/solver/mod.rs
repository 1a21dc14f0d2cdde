//! Numerical solvers
//!
//! This module provides traits and implementations for numerical solvers.
//! A numerical solver applies a time-integration method to the rate
//! equations provided by a kinetic model within a specific scenario.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Kinetic model (equations)
//!    - Initial reactor state
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Time horizon and step size
//!    - Integration method selection
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the integration scheme
//!    - Returns the trajectory
//!    - Independent of kinetics
//!
//! This separation allows:
//! - Same solver for different kinetic models
//! - Different solvers for the same scenario
//! - Easy benchmarking and method comparison
//!
//! # Module Organization
//!
//! - **`traits`**: Core trait definitions and types
//!   - `Solver` trait: stable interface for all solvers
//!   - `IntegrationMethod`: method selector
//!   - `SolverConfiguration`: configuration structure
//!   - `Trajectory`: result structure
//!   - `SimulationError`: the invalid-argument error conditions
//!
//! - **`scenario`**: Problem definition
//!   - `Scenario`: combines model + initial state
//!
//! - **Solver implementations** (`methods`):
//!   - `EulerSolver`: forward Euler method
//!   - `RK4Solver`: classical 4th-order Runge-Kutta method
//!
//! # Quick Start Example
//!
//! ```rust
//! use ferm_rs::models::{KineticParameters, MonodKinetics};
//! use ferm_rs::physics::ReactorState;
//! use ferm_rs::solver::{RK4Solver, Scenario, Solver, SolverConfiguration};
//!
//! // 1. Create scenario (WHAT to solve)
//! let model = Box::new(MonodKinetics::batch(KineticParameters::default()));
//! let scenario = Scenario::new(model, ReactorState::default());
//!
//! // 2. Create configuration (HOW to solve)
//! let config = SolverConfiguration::new(10.0, 0.1);
//!
//! // 3. Create solver and solve
//! let solver = RK4Solver::new();
//! let result = solver.solve(&scenario, &config).unwrap();
//!
//! // 4. Access results
//! assert_eq!(result.len(), 101);
//! ```
//!
//! # Error Handling
//!
//! A solve either fails immediately, before any computation, or returns a
//! complete trajectory. The only failure is an invalid argument:
//!
//! - a non-positive time step
//! - a non-positive dilution rate, for the CSTR entry points in
//!   [`crate::reactor`]
//!
//! Everything else (washout, vanishing yield, numerical undershoot below
//! zero) is an expected physical regime handled by defensive clamping, not
//! a fault.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    IntegrationMethod, SimulationError, Solver, SolverConfiguration, Trajectory,
};

pub use scenario::Scenario;

pub use methods::{EulerSolver, RK4Solver};
