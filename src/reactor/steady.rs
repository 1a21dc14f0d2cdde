//! Closed-form CSTR steady state
//!
//! # Mathematical Background
//!
//! At steady state every derivative of the CSTR balances vanishes. The
//! biomass balance `dX/dt = (mu - kd - D)·X = 0` forces either washout
//! (X* = 0) or a growth rate that exactly compensates dilution and death:
//!
//! ```text
//! mu_eq = D + kd
//! ```
//!
//! Inverting the Monod law at mu_eq gives the residual substrate level, and
//! the substrate balance then fixes the biomass:
//!
//! ```text
//! S* = Ks · mu_eq / (mu_max - mu_eq)
//! X* = D · (Sin - S*) / qS
//! P* = qP · X* / D
//! ```
//!
//! The model has a closed-form fixed point, so no iteration is involved:
//! the solver is a direct case analysis.
//!
//! # Washout
//!
//! When `mu_eq >= mu_max` no substrate level can sustain the required growth
//! rate, and when the required S* exceeds the feed concentration the balance
//! is infeasible. Both regimes wash the biomass out: the reactor runs clear
//! at the feed composition, (S*, X*, P*) = (Sin, 0, 0). These are expected
//! physical regimes, not errors.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::monod::RATE_EPS;
use crate::models::{FeedCondition, KineticParameters};
use crate::solver::SimulationError;

// =================================================================================================
// Steady State
// =================================================================================================

/// Algebraic fixed point (S*, X*, P*) of the CSTR balances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyState {
    /// Residual substrate concentration S* \[g/L\]
    pub substrate: f64,

    /// Biomass concentration X* \[g/L\]
    pub biomass: f64,

    /// Product concentration P* \[g/L\]
    pub product: f64,
}

impl SteadyState {
    /// The washout state: reactor content matches the feed, no biomass.
    fn washout(feed_substrate: f64) -> Self {
        Self {
            substrate: feed_substrate,
            biomass: 0.0,
            product: 0.0,
        }
    }

    /// True when the biomass has been washed out
    pub fn is_washout(&self) -> bool {
        self.biomass == 0.0
    }
}

// =================================================================================================
// Steady-State Solver
// =================================================================================================

/// Compute the CSTR fixed point directly, without time integration.
///
/// # Case Analysis
///
/// 1. `mu_eq = D + kd`. If `mu_eq >= mu_max`: washout, `(Sin, 0, 0)`.
/// 2. `S* = Ks·mu_eq/(mu_max - mu_eq)`. If `S* > Sin`: infeasible, treated
///    as washout `(Sin, 0, 0)`.
/// 3. `qS = mu_eq/Yxs + mS` (zero when Yxs vanishes). If `qS` vanishes no
///    net consumption is possible: `(S*, 0, 0)`.
/// 4. Otherwise `X* = D·(Sin - S*)/qS` and `P* = (alpha·mu_eq + beta)·X*/D`,
///    with all three outputs floored at zero.
///
/// # Errors
///
/// [`SimulationError::InvalidDilutionRate`] when `feed.dilution_rate <= 0`;
/// a steady state of the dilution balances only exists under throughput.
///
/// # Example
///
/// ```rust
/// use ferm_rs::models::{FeedCondition, KineticParameters};
/// use ferm_rs::reactor::cstr_steady_state;
///
/// let params = KineticParameters::default();
/// let feed = FeedCondition::cstr(0.3, 10.0);
///
/// let fixed_point = cstr_steady_state(&params, &feed).unwrap();
///
/// // mu_eq = 0.3, S* = 0.5 * 0.3 / (0.5 - 0.3)
/// assert!((fixed_point.substrate - 0.75).abs() < 1e-12);
/// ```
pub fn cstr_steady_state(
    params: &KineticParameters,
    feed: &FeedCondition,
) -> Result<SteadyState, SimulationError> {
    let dilution = feed.dilution_rate;
    let feed_substrate = feed.feed_substrate;

    if dilution <= 0.0 {
        return Err(SimulationError::InvalidDilutionRate(dilution));
    }

    debug!(
        "CSTR steady state: D = {}, Sin = {}, mu_max = {}",
        dilution, feed_substrate, params.mu_max
    );

    // Growth rate required to balance dilution and death
    let mu_eq = dilution + params.death_rate;

    // No sustainable growth rate at this dilution: washout
    if mu_eq >= params.mu_max {
        return Ok(SteadyState::washout(feed_substrate));
    }

    // Invert the Monod law at mu_eq
    let s_star = params.ks * mu_eq / (params.mu_max - mu_eq);

    // Residual substrate above feed concentration: infeasible, washout
    if s_star > feed_substrate {
        return Ok(SteadyState::washout(feed_substrate));
    }

    let q_substrate = if params.yield_xs > RATE_EPS {
        mu_eq / params.yield_xs + params.maintenance
    } else {
        0.0
    };

    // No net consumption possible: substrate settles, biomass cannot hold
    if q_substrate <= RATE_EPS {
        return Ok(SteadyState {
            substrate: s_star,
            biomass: 0.0,
            product: 0.0,
        });
    }

    let x_star = dilution * (feed_substrate - s_star) / q_substrate;
    let q_product = params.alpha * mu_eq + params.beta;
    let p_star = q_product * x_star / dilution;

    Ok(SteadyState {
        substrate: s_star.max(0.0),
        biomass: x_star.max(0.0),
        product: p_star.max(0.0),
    })
}

// =================================================================================================
// Tests
// =================================================================================================
