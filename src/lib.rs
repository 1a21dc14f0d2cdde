//! ferm-rs: Bioreactor Kinetics Simulation Framework
//!
//! A small framework for simulating microbial growth kinetics in batch and
//! continuously-stirred tank (CSTR) bioreactors using numerical methods.
//!
//! # Architecture
//!
//! ferm-rs is built on two core principles:
//!
//! 1. **Separation of Kinetics and Numerics**
//!    - Kinetic models define rate equations (what to solve)
//!    - Numerical solvers provide integration methods (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Named records for states, rates, and steady states
//!
//! # Quick Start
//!
//! ```rust
//! use ferm_rs::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     // 1. Kinetic parameters (Monod growth, no maintenance/death/product)
//!     let params = KineticParameters::default();
//!
//!     // 2. Initial charge and solver configuration
//!     let initial = ReactorState::default();
//!     let config = SolverConfiguration::default();
//!
//!     // 3. Run a batch fermentation
//!     let trajectory = simulate_batch(&params, &initial, &config)?;
//!
//!     // 4. Access results
//!     println!("Simulation completed!");
//!     println!("Trajectory length: {}", trajectory.len());
//!     println!("Final biomass: {:.4} g/L", trajectory.final_state().unwrap().biomass);
//!     Ok(())
//! }
//! ```
//!
//! The analytic CSTR steady state is available without any time integration:
//!
//! ```rust
//! use ferm_rs::prelude::*;
//!
//! let params = KineticParameters::default();
//! let feed = FeedCondition::cstr(0.3, 10.0);
//!
//! let fixed_point = cstr_steady_state(&params, &feed).unwrap();
//! assert!(fixed_point.biomass > 0.0);
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Kinetic model trait and state types
//! - [`models`]: Concrete kinetic models (Monod / Luedeking-Piret)
//! - [`solver`]: Numerical solvers (methods)
//! - [`reactor`]: Batch/CSTR simulation entry points and the steady-state solver
//! - [`output`]: Result visualization and export

// Core modules
pub mod physics;

pub mod models;
pub mod reactor;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use ferm_rs::prelude::*;
    //! ```
    pub use crate::models::{FeedCondition, KineticParameters, MonodKinetics};
    pub use crate::physics::{KineticModel, RateResult, ReactorState};
    pub use crate::reactor::{cstr_steady_state, simulate_batch, simulate_cstr, SteadyState};
    pub use crate::solver::{
        EulerSolver, IntegrationMethod, RK4Solver, Scenario, SimulationError, Solver,
        SolverConfiguration, Trajectory,
    };
}
