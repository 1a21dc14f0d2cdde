//! Numerical methods for solving the reactor equations
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between abstract solver interface (`solver::traits`) and concrete
//! implementations (`solver::methods`) follows the Open-Closed Principle:
//! - **Open** for extension: Add new methods without modifying existing code
//! - **Closed** for modification: The `Solver` trait is stable and never changes
//!
//! # Available Methods
//!
//! ## Explicit Time-Stepping Methods
//!
//! These methods are suitable for non-stiff ordinary differential equations (ODEs)
//! where the right-hand side function can be evaluated explicitly. Microbial
//! growth kinetics at realistic parameter ranges fall in this class.
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(dt)
//!   - Cost: 1 rate evaluation per step
//!   - Use: Prototyping, educational purposes, quick exploratory runs
//!
//! - **[`RK4Solver`]**: Classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(dt⁴)
//!   - Cost: 4 rate evaluations per step
//!   - Use: **Production simulations**, the default method
//!
//! # Clamping Convention
//!
//! Both methods floor every concentration at zero after completing a step.
//! Negative values produced by numerical overshoot are not physical and are
//! never propagated into the next step. Intermediate Runge-Kutta stages are
//! not clamped; the rate law guards itself against a transiently negative
//! substrate instead.
//!
//! # Example
//!
//! ```rust
//! use ferm_rs::models::{KineticParameters, MonodKinetics};
//! use ferm_rs::physics::ReactorState;
//! use ferm_rs::solver::{EulerSolver, RK4Solver, Scenario, Solver, SolverConfiguration};
//!
//! fn main() -> Result<(), ferm_rs::solver::SimulationError> {
//!     let model = Box::new(MonodKinetics::batch(KineticParameters::default()));
//!     let scenario = Scenario::new(model, ReactorState::default());
//!
//!     // Quick look with Euler
//!     let config = SolverConfiguration::new(10.0, 0.01);
//!     let rough = EulerSolver::new().solve(&scenario, &config)?;
//!
//!     // Production run with Runge-Kutta
//!     let accurate = RK4Solver::new().solve(&scenario, &config)?;
//!
//!     assert_eq!(rough.len(), accurate.len());
//!     Ok(())
//! }
//! ```

pub mod euler;
mod rk4;

// Re-exports for convenience
pub use euler::EulerSolver;
pub use rk4::RK4Solver;
