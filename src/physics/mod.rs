//! Kinetic models
//!
//! This module provides the traits and state types for kinetic models.
//! A kinetic model encapsulates the rate equations of a bioreactor
//! (growth, substrate uptake, product formation).
//!
//! # Core Concepts
//!
//! - **Kinetic Model**: Computes the rate equations at a given state
//! - **Reactor State**: Container for the three tracked concentrations
//!   (biomass, substrate, product)
//! - **Rate Result**: Named record of derivatives and specific rates
//!
//! # Architecture
//!
//! Kinetic models are **separate from numerical solvers**:
//! - The model provides the **equations** (kinetics)
//! - The solver provides the **method** to solve them (numerics)
//!
//! This separation allows:
//! - Same model with different solvers (Euler, Runge-Kutta, etc.)
//! - Same solver with different models (Monod, mocks, future rate laws)
//!
//! # Example
//!
//! ```rust
//! use ferm_rs::models::{KineticParameters, MonodKinetics};
//! use ferm_rs::physics::{KineticModel, ReactorState};
//!
//! // Create a kinetic model
//! let model = MonodKinetics::batch(KineticParameters::default());
//!
//! // Evaluate the rate equations at a state
//! let state = ReactorState::new(0.1, 10.0, 0.0);
//! let rates = model.compute_rates(&state);
//!
//! assert!(rates.mu > 0.0);
//! ```

// module declaration
pub mod traits;
// Model implementation

// re-export commonly used types for convenience
pub use traits::{KineticModel, RateResult, ReactorState};
