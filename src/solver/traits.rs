//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `IntegrationMethod` is the central selector for the available schemes
//! - `SolverConfiguration` carries the time horizon, the step size, and the
//!   selected method, with the documented defaults
//! - `Trajectory` is the complete result of one integration, with metadata
//!   for diagnostics and reproducibility
//!
//! # Stability Guarantee
//!
//! - `Solver` trait: STABLE since v0.1.0
//! - `IntegrationMethod` enum: EXTENSIBLE (new variants can be added)
//! - Core structures: STABLE (fields won't be removed)

use std::collections::HashMap;
use std::fmt;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::ReactorState;
use crate::solver::Scenario;

// =================================================================================================
// Simulation Error
// =================================================================================================

/// Invalid-argument conditions.
///
/// These are the only two ways a simulation can fail; every other edge case
/// (washout, vanishing yield, numerical undershoot) is handled by defensive
/// clamping or branching. A failing call returns before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    /// The time step dt must be strictly positive
    #[error("time step must be > 0, got {0}")]
    InvalidTimeStep(f64),

    /// CSTR operations require a strictly positive dilution rate
    #[error("dilution rate must be > 0 for CSTR operation, got {0}")]
    InvalidDilutionRate(f64),
}

// =================================================================================================
// Integration Method
// =================================================================================================

/// Selector for the time-integration scheme.
///
/// # Variants
///
/// - `Euler`: forward Euler, first-order, one rate evaluation per step
/// - `Rk4`: classical Runge-Kutta, fourth-order, four evaluations per step
///
/// Rk4 is the default and the fallback for any unrecognized string selector
/// (see [`from_selector`](IntegrationMethod::from_selector)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMethod {
    /// Forward Euler
    Euler,

    /// Classical 4th-order Runge-Kutta
    #[default]
    Rk4,
}

impl IntegrationMethod {
    /// Resolve a string selector, falling back to Rk4.
    ///
    /// Any selector other than `"euler"` (case-insensitive) resolves to
    /// [`IntegrationMethod::Rk4`]. Unrecognized selectors are not an error:
    /// the caller always gets a usable method.
    ///
    /// ```rust
    /// use ferm_rs::solver::IntegrationMethod;
    ///
    /// assert_eq!(IntegrationMethod::from_selector("euler"), IntegrationMethod::Euler);
    /// assert_eq!(IntegrationMethod::from_selector("rk4"), IntegrationMethod::Rk4);
    /// assert_eq!(IntegrationMethod::from_selector("rk45"), IntegrationMethod::Rk4);
    /// ```
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "euler" => Self::Euler,
            _ => Self::Rk4,
        }
    }

    /// Canonical selector name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euler => "euler",
            Self::Rk4 => "rk4",
        }
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for a time integration.
///
/// # Defaults
///
/// `total_time = 10.0`, `time_step = 0.1`, `method = Rk4`.
///
/// # Step Count
///
/// The number of steps is `max(1, round(total_time / time_step))`: even a
/// degenerate horizon yields at least one step. When the horizon is not an
/// integer multiple of the step, the final time point does not land exactly
/// on `total_time`; no interpolation or step adjustment is performed.
///
/// # Examples
///
/// ```rust
/// use ferm_rs::solver::{IntegrationMethod, SolverConfiguration};
///
/// let config = SolverConfiguration::new(24.0, 0.05)
///     .with_method(IntegrationMethod::Euler);
///
/// assert_eq!(config.n_steps(), 480);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfiguration {
    /// Total simulated time t_final \[h\]
    pub total_time: f64,

    /// Fixed step size dt \[h\]
    pub time_step: f64,

    /// Integration scheme
    pub method: IntegrationMethod,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            total_time: 10.0,
            time_step: 0.1,
            method: IntegrationMethod::default(),
        }
    }
}

impl SolverConfiguration {
    /// Create a configuration with the default method (Rk4)
    pub fn new(total_time: f64, time_step: f64) -> Self {
        Self {
            total_time,
            time_step,
            ..Self::default()
        }
    }

    /// Select the integration scheme
    pub fn with_method(mut self, method: IntegrationMethod) -> Self {
        self.method = method;
        self
    }

    /// Validate configuration.
    ///
    /// Only the time step can be invalid; a degenerate `total_time` is
    /// absorbed by the guaranteed minimum of one step.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.time_step <= 0.0 {
            return Err(SimulationError::InvalidTimeStep(self.time_step));
        }
        Ok(())
    }

    /// Number of integration steps: `max(1, round(total_time / time_step))`.
    ///
    /// A negative or NaN ratio collapses to the single guaranteed step
    /// through the saturating float-to-integer cast.
    pub fn n_steps(&self) -> usize {
        ((self.total_time / self.time_step).round() as usize).max(1)
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Complete result of one time integration.
///
/// Five equal-length sequences of `n_steps + 1` entries: time points, the
/// three concentrations, and the recorded specific growth rate. Index 0
/// holds the initial condition and the growth rate evaluated at it.
///
/// The trajectory is immutable once returned: there are no partial or
/// streaming results, and the sequences are never resized.
///
/// # Metadata
///
/// Solvers stamp a string metadata map (solver name, step count, dt) for
/// diagnostics and reproducibility.
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Time points, `times[k] = k * dt`
    pub times: Vec<f64>,

    /// Reactor states, one per time point
    pub states: Vec<ReactorState>,

    /// Specific growth rate recorded at each step (see solver docs for the
    /// RK4 recording convention)
    pub growth_rates: Vec<f64>,

    /// Diagnostic metadata (solver name, step count, dt, ...)
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Create a trajectory from the three sequences.
    ///
    /// The sequences must have equal lengths; solvers guarantee this by
    /// construction.
    pub fn new(times: Vec<f64>, states: Vec<ReactorState>, growth_rates: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), states.len());
        debug_assert_eq!(times.len(), growth_rates.len());

        Self {
            times,
            states,
            growth_rates,
            metadata: HashMap::new(),
        }
    }

    /// Number of recorded points (`n_steps + 1`)
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when no point has been recorded
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Final reactor state, if any point was recorded
    pub fn final_state(&self) -> Option<ReactorState> {
        self.states.last().copied()
    }

    /// Biomass concentration series X(t)
    pub fn biomass(&self) -> DVector<f64> {
        DVector::from_iterator(self.states.len(), self.states.iter().map(|s| s.biomass))
    }

    /// Substrate concentration series S(t)
    pub fn substrate(&self) -> DVector<f64> {
        DVector::from_iterator(self.states.len(), self.states.iter().map(|s| s.substrate))
    }

    /// Product concentration series P(t)
    pub fn product(&self) -> DVector<f64> {
        DVector::from_iterator(self.states.len(), self.states.iter().map(|s| s.product))
    }

    /// Recorded specific growth rate series mu(t)
    pub fn growth_rate(&self) -> DVector<f64> {
        DVector::from_vec(self.growth_rates.clone())
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Trait for numerical solvers.
///
/// # Responsibility
///
/// Applies a time-integration scheme to the scenario's kinetic model and
/// returns the full trajectory. The solver owns the numerics only; all
/// kinetics live behind [`KineticModel`](crate::physics::KineticModel).
///
/// # Determinism
///
/// Implementations must be fully deterministic given their inputs: no
/// randomness, no external state. Each call is independent and side-effect
/// free, so distinct invocations may run concurrently from independent call
/// sites without synchronization.
pub trait Solver {
    /// Integrate the scenario over the configured horizon.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidTimeStep`] when the configured step is not
    /// strictly positive. The check happens before any computation.
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<Trajectory, SimulationError>;

    /// Name of the solver (used for display, logging, and metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
