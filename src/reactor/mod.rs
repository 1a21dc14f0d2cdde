//! Bioreactor simulation entry points
//!
//! This module is the public boundary of the crate: three operations that
//! assemble a kinetic model, a scenario, and a configured solver.
//!
//! - [`simulate_batch`]: integrate a closed batch fermentation
//! - [`simulate_cstr`]: integrate a continuously-stirred tank reactor
//! - [`cstr_steady_state`]: solve the CSTR fixed point in closed form,
//!   without any time integration
//!
//! # Configuration
//!
//! Every optional quantity has an explicit home with a documented default:
//! kinetics in [`KineticParameters`](crate::models::KineticParameters), the
//! feed in [`FeedCondition`](crate::models::FeedCondition), the initial
//! charge in [`ReactorState`](crate::physics::ReactorState), and the
//! numerics in [`SolverConfiguration`](crate::solver::SolverConfiguration).
//! All three operations consume the same records.
//!
//! # Example
//!
//! ```rust
//! use ferm_rs::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     let params = KineticParameters::default();
//!     let feed = FeedCondition::cstr(0.3, 10.0);
//!
//!     // Dynamic start-up transient...
//!     let config = SolverConfiguration::new(100.0, 0.05);
//!     let trajectory = simulate_cstr(&params, &feed, &ReactorState::default(), &config)?;
//!
//!     // ...approaches the analytic fixed point
//!     let fixed_point = cstr_steady_state(&params, &feed)?;
//!     let last = trajectory.final_state().unwrap();
//!     assert!((last.substrate - fixed_point.substrate).abs() < 1e-3);
//!     Ok(())
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod simulate;
mod steady;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use simulate::{simulate_batch, simulate_cstr};
pub use steady::{cstr_steady_state, SteadyState};
