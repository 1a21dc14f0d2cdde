//! Kinetic models for bioreactor simulation
//!
//! All models implement the [`KineticModel`](crate::physics::KineticModel) trait.
//! The solver calls `compute_rates` at each time step: models are responsible
//! for the kinetics (growth, uptake, product formation), the solver for the
//! time integration.
//!
//! # Available Models
//!
//! ## [`MonodKinetics`]: single organism, single substrate
//!
//! Monod growth with a maintenance term, first-order biomass death, and
//! Luedeking-Piret product formation. The same model serves the closed batch
//! reactor and the CSTR: a [`FeedCondition`] with a zero dilution rate
//! collapses every feed term.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod monod;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use monod::{FeedCondition, KineticParameters, MonodKinetics};
