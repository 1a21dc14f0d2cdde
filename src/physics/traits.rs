//! Kinetic model traits and state types
//!
//! This module defines the core API for kinetic models:
//! - `KineticModel`: trait for all kinetic models
//! - `ReactorState`: the three tracked concentrations
//! - `RateResult`: named record returned by a rate evaluation

use serde::{Deserialize, Serialize};

// =================================================================================================
// Reactor State
// =================================================================================================

/// Concentrations tracked in the reactor broth.
///
/// The state is the triple (X, S, P): biomass, substrate, and product
/// concentration. All three are conceptually non-negative; transient
/// negative values produced by an integration step are floored to zero
/// by the solver via [`clamped_non_negative`](ReactorState::clamped_non_negative).
///
/// # Operator Overloading
///
/// `ReactorState` implements `Add` and `Mul<f64>` componentwise so that
/// solvers can combine states and slopes naturally:
///
/// ```rust
/// use ferm_rs::physics::ReactorState;
///
/// let state = ReactorState::new(1.0, 8.0, 0.5);
/// let slope = ReactorState::new(0.2, -1.0, 0.1);
/// let dt = 0.1;
///
/// let next = state + slope * dt;
/// assert!((next.substrate - 7.9).abs() < 1e-12);
/// ```
///
/// # Default
///
/// The default value is the standard initial charge: X = 0.1, S = 10.0,
/// P = 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactorState {
    /// Biomass concentration X \[g/L\]
    pub biomass: f64,

    /// Substrate concentration S \[g/L\]
    pub substrate: f64,

    /// Product concentration P \[g/L\]
    pub product: f64,
}

impl ReactorState {
    /// Create a new state from the three concentrations
    pub fn new(biomass: f64, substrate: f64, product: f64) -> Self {
        Self {
            biomass,
            substrate,
            product,
        }
    }

    /// Floor every component at zero.
    ///
    /// Explicit integration can overshoot into (small) negative
    /// concentrations. Those values are not physical and must not be
    /// propagated to the next step.
    ///
    /// ```rust
    /// use ferm_rs::physics::ReactorState;
    ///
    /// let state = ReactorState::new(0.5, -0.02, 0.0).clamped_non_negative();
    /// assert_eq!(state.substrate, 0.0);
    /// assert_eq!(state.biomass, 0.5);
    /// ```
    pub fn clamped_non_negative(self) -> Self {
        Self {
            biomass: self.biomass.max(0.0),
            substrate: self.substrate.max(0.0),
            product: self.product.max(0.0),
        }
    }
}

impl Default for ReactorState {
    fn default() -> Self {
        Self {
            biomass: 0.1,
            substrate: 10.0,
            product: 0.0,
        }
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for ReactorState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            biomass: self.biomass + rhs.biomass,
            substrate: self.substrate + rhs.substrate,
            product: self.product + rhs.product,
        }
    }
}

impl std::ops::Mul<f64> for ReactorState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            biomass: self.biomass * scalar,
            substrate: self.substrate * scalar,
            product: self.product * scalar,
        }
    }
}

// =================================================================================================
// Rate Result
// =================================================================================================

/// Result of one rate-law evaluation.
///
/// Carries the three state derivatives together with the intermediate
/// specific rates, so that callers interested in diagnostics (the recorded
/// growth-rate series of a trajectory) do not need a second evaluation.
///
/// # Fields
///
/// - `d_biomass`, `d_substrate`, `d_product`: dX/dt, dS/dt, dP/dt
/// - `mu`: specific growth rate \[1/h\]
/// - `q_substrate`: specific substrate uptake rate \[g/(g·h)\]
/// - `q_product`: specific product formation rate \[g/(g·h)\]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateResult {
    /// Biomass derivative dX/dt
    pub d_biomass: f64,
    /// Substrate derivative dS/dt
    pub d_substrate: f64,
    /// Product derivative dP/dt
    pub d_product: f64,
    /// Specific growth rate mu
    pub mu: f64,
    /// Specific substrate uptake rate qS
    pub q_substrate: f64,
    /// Specific product formation rate qP
    pub q_product: f64,
}

impl RateResult {
    /// The derivative triple expressed in state space.
    ///
    /// Solvers combine slopes with `ReactorState` arithmetic, so the
    /// derivative is handed out in the same shape as the state itself.
    pub fn derivative(&self) -> ReactorState {
        ReactorState::new(self.d_biomass, self.d_substrate, self.d_product)
    }
}

// ==================================================================================================
// Kinetic Model Trait
// =================================================================================================

/// Trait for kinetic models
///
/// # Responsibility
/// Computes the rate equations of a bioreactor at a given state.
/// Does NOT solve them (that's the Solver's job).
///
/// The model provides the "kinetics" (equations), the Solver provides
/// the "numerics" (method to solve them).
///
/// # Purity
///
/// `compute_rates` must be a pure function of the state: no interior
/// mutability, no dependence on call order. Solvers rely on this when
/// evaluating the same model several times per step (Runge-Kutta stages).
pub trait KineticModel: Send + Sync {
    /// Computes the rate equations at a given state
    ///
    /// # Arguments
    /// * `state` - Current reactor state (X, S, P)
    ///
    /// # Returns
    /// The right-hand side of d(X, S, P)/dt = f(X, S, P) together with the
    /// specific rates mu, qS and qP evaluated at `state`.
    ///
    /// # Note
    /// This method encapsulates ALL the kinetics: growth law, maintenance,
    /// death, product formation, and feed/dilution terms. Inputs are guarded
    /// defensively (a transient negative substrate is treated as zero), never
    /// rejected.
    fn compute_rates(&self, state: &ReactorState) -> RateResult;

    /// Name of the model (used for display and logging)

    fn name(&self) -> &str;

    /// Description of the model (optional)

    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reactor_state() {
        let state = ReactorState::new(0.2, 5.0, 1.0);

        assert_eq!(state.biomass, 0.2);
        assert_eq!(state.substrate, 5.0);
        assert_eq!(state.product, 1.0);
    }

    #[test]
    fn test_default_initial_charge() {
        let state = ReactorState::default();

        assert_eq!(state.biomass, 0.1);
        assert_eq!(state.substrate, 10.0);
        assert_eq!(state.product, 0.0);
    }

    #[test]
    fn test_addition() {
        let one = ReactorState::new(1.0, 8.0, 0.5);
        let two = ReactorState::new(0.5, -2.0, 0.25);

        let sum = one + two;

        assert_eq!(sum.biomass, 1.5);
        assert_eq!(sum.substrate, 6.0);
        assert_eq!(sum.product, 0.75);
    }

    #[test]
    fn test_scalar_multiplication() {
        let state = ReactorState::new(1.0, 2.0, 3.0);

        let scaled = state * 10.0;

        assert_eq!(scaled.biomass, 10.0);
        assert_eq!(scaled.substrate, 20.0);
        assert_eq!(scaled.product, 30.0);
    }

    #[test]
    fn test_clamp_floors_negative_components() {
        let state = ReactorState::new(-1.0, -0.001, 2.0).clamped_non_negative();

        assert_eq!(state.biomass, 0.0);
        assert_eq!(state.substrate, 0.0);
        assert_eq!(state.product, 2.0);
    }

    #[test]
    fn test_clamp_leaves_non_negative_untouched() {
        let state = ReactorState::new(0.1, 10.0, 0.0);

        assert_eq!(state.clamped_non_negative(), state);
    }

    #[test]
    fn test_rate_result_derivative() {
        let rates = RateResult {
            d_biomass: 0.05,
            d_substrate: -0.1,
            d_product: 0.01,
            mu: 0.5,
            q_substrate: 1.0,
            q_product: 0.1,
        };

        let derivative = rates.derivative();

        assert_eq!(derivative.biomass, 0.05);
        assert_eq!(derivative.substrate, -0.1);
        assert_eq!(derivative.product, 0.01);
    }
}
