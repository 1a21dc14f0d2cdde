//! Monod growth kinetics with Luedeking-Piret product formation
//!
//! # Mathematical Background
//!
//! ## Monod Growth
//!
//! The specific growth rate rises hyperbolically with substrate concentration
//! toward an asymptote:
//!
//! ```text
//! mu = mu_max · S / (Ks + S)
//! ```
//!
//! Where:
//! - **mu_max** : Maximum specific growth rate \[1/h\]
//! - **Ks** : Half-saturation constant \[g/L\] (substrate level at mu = mu_max/2)
//!
//! ## Substrate Uptake
//!
//! Substrate is consumed for growth (scaled by the yield coefficient) and for
//! maintenance:
//!
//! ```text
//! qS = mu / Yxs + mS
//! ```
//!
//! ## Luedeking-Piret Product Formation
//!
//! Product formation is a linear combination of a growth-associated and a
//! non-growth-associated term:
//!
//! ```text
//! qP = alpha · mu + beta
//! ```
//!
//! ## Mass Balances
//!
//! With dilution rate D and feed substrate concentration Sin, the balances
//! over a stirred volume read:
//!
//! ```text
//! dX/dt = (mu - kd - D) · X
//! dS/dt = D · (Sin - S) - qS · X
//! dP/dt = qP · X - D · P
//! ```
//!
//! A closed batch reactor is the special case D = 0, Sin = 0: every dilution
//! term vanishes and the same equations describe the batch broth. No separate
//! batch rate law exists in this crate; only the feed condition differs.
//!
//! # Defensive Guards
//!
//! The rate law never fails. Near-zero denominators and unphysical inputs are
//! guarded inline:
//!
//! - a negative substrate concentration (integration overshoot from a
//!   previous step) is treated as zero before evaluation,
//! - `mu` is zero when Ks + S falls below 1e-9,
//! - `qS` is zero when Yxs falls below 1e-9.
//!
//! # Example
//!
//! ```rust
//! use ferm_rs::models::{KineticParameters, MonodKinetics};
//! use ferm_rs::physics::{KineticModel, ReactorState};
//!
//! let params = KineticParameters::default();
//! let model = MonodKinetics::batch(params);
//!
//! let rates = model.compute_rates(&ReactorState::new(0.1, 10.0, 0.0));
//!
//! // mu = 0.5 * 10 / (0.5 + 10)
//! assert!((rates.mu - 10.0 / 21.0).abs() < 1e-12);
//! ```

use crate::physics::{KineticModel, RateResult, ReactorState};
use serde::{Deserialize, Serialize};

/// Threshold below which a denominator is treated as zero.
///
/// Shared by the rate law (Ks + S, Yxs guards) and the steady-state solver
/// (vanishing uptake branch).
pub(crate) const RATE_EPS: f64 = 1e-9;

// =================================================================================================
// Kinetic Parameters
// =================================================================================================

/// Kinetic parameters of the growth model.
///
/// All parameters are expected to be non-negative. They are not validated:
/// the rate law guards its denominators inline instead of rejecting inputs.
///
/// # Default
///
/// `mu_max = 0.5`, `ks = 0.5`, `yield_xs = 0.5`, all other terms zero
/// (no maintenance, no death, no product formation).
///
/// # Example
///
/// ```rust
/// use ferm_rs::models::KineticParameters;
///
/// let params = KineticParameters {
///     alpha: 2.2,
///     beta: 0.05,
///     ..KineticParameters::default()
/// };
/// assert_eq!(params.mu_max, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticParameters {
    /// Maximum specific growth rate mu_max \[1/h\]
    pub mu_max: f64,

    /// Half-saturation constant Ks \[g/L\]
    pub ks: f64,

    /// Biomass/substrate yield coefficient Yxs \[g/g\]
    pub yield_xs: f64,

    /// Maintenance substrate consumption rate mS \[g/(g·h)\]
    pub maintenance: f64,

    /// Specific death rate kd \[1/h\]
    pub death_rate: f64,

    /// Growth-associated product formation coefficient alpha \[g/g\]
    pub alpha: f64,

    /// Non-growth-associated product formation coefficient beta \[g/(g·h)\]
    pub beta: f64,
}

impl Default for KineticParameters {
    fn default() -> Self {
        Self {
            mu_max: 0.5,
            ks: 0.5,
            yield_xs: 0.5,
            maintenance: 0.0,
            death_rate: 0.0,
            alpha: 0.0,
            beta: 0.0,
        }
    }
}

// =================================================================================================
// Feed Condition
// =================================================================================================

/// Operating condition of the feed stream.
///
/// A CSTR is characterised by its dilution rate D (volumetric flow divided
/// by reactor volume) and the substrate concentration Sin of the feed.
/// A closed batch reactor is the degenerate condition D = 0, Sin = 0.
///
/// # Default
///
/// The default is a typical chemostat feed: `dilution_rate = 0.1`,
/// `feed_substrate = 10.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedCondition {
    /// Dilution rate D \[1/h\]
    pub dilution_rate: f64,

    /// Feed substrate concentration Sin \[g/L\]
    pub feed_substrate: f64,
}

impl FeedCondition {
    /// Feed condition of a closed batch reactor (D = 0, Sin = 0)
    pub fn batch() -> Self {
        Self {
            dilution_rate: 0.0,
            feed_substrate: 0.0,
        }
    }

    /// Feed condition of a CSTR
    pub fn cstr(dilution_rate: f64, feed_substrate: f64) -> Self {
        Self {
            dilution_rate,
            feed_substrate,
        }
    }
}

impl Default for FeedCondition {
    fn default() -> Self {
        Self {
            dilution_rate: 0.1,
            feed_substrate: 10.0,
        }
    }
}

// =================================================================================================
// Monod Kinetics Model
// =================================================================================================

/// Monod growth model with maintenance, death, and Luedeking-Piret product
/// formation.
///
/// Holds the kinetic parameters and the operating condition; the rate law
/// itself is the pure [`compute_rates`](KineticModel::compute_rates)
/// evaluation.
#[derive(Clone, Debug)]
pub struct MonodKinetics {
    /// Kinetic parameters
    params: KineticParameters,
    /// Feed operating condition (D, Sin)
    feed: FeedCondition,
}

impl MonodKinetics {
    /// Create a model for an arbitrary feed condition
    pub fn new(params: KineticParameters, feed: FeedCondition) -> Self {
        Self { params, feed }
    }

    /// Create a batch model (D = 0, Sin = 0)
    pub fn batch(params: KineticParameters) -> Self {
        Self::new(params, FeedCondition::batch())
    }

    /// Kinetic parameters
    pub fn params(&self) -> &KineticParameters {
        &self.params
    }

    /// Feed operating condition
    pub fn feed(&self) -> &FeedCondition {
        &self.feed
    }

    /// Monod specific growth rate at substrate concentration `substrate`.
    ///
    /// Returns zero when Ks + S is below the guard threshold.
    #[inline]
    fn growth_rate(&self, substrate: f64) -> f64 {
        let denom = self.params.ks + substrate;
        if denom > RATE_EPS {
            self.params.mu_max * substrate / denom
        } else {
            0.0
        }
    }

    /// Specific substrate uptake rate at growth rate `mu`.
    ///
    /// Returns zero when the yield coefficient is below the guard threshold.
    #[inline]
    fn uptake_rate(&self, mu: f64) -> f64 {
        if self.params.yield_xs > RATE_EPS {
            mu / self.params.yield_xs + self.params.maintenance
        } else {
            0.0
        }
    }

    /// Luedeking-Piret specific product formation rate at growth rate `mu`
    #[inline]
    fn production_rate(&self, mu: f64) -> f64 {
        self.params.alpha * mu + self.params.beta
    }
}

impl KineticModel for MonodKinetics {
    fn compute_rates(&self, state: &ReactorState) -> RateResult {
        // A previous explicit step may have overshot into negative substrate.
        let substrate = state.substrate.max(0.0);

        let mu = self.growth_rate(substrate);
        let q_substrate = self.uptake_rate(mu);
        let q_product = self.production_rate(mu);

        let biomass = state.biomass;
        let dilution = self.feed.dilution_rate;

        RateResult {
            d_biomass: (mu - self.params.death_rate - dilution) * biomass,
            d_substrate: dilution * (self.feed.feed_substrate - substrate) - q_substrate * biomass,
            d_product: q_product * biomass - dilution * state.product,
            mu,
            q_substrate,
            q_product,
        }
    }

    fn name(&self) -> &str {
        "Monod growth kinetics"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Monod growth with maintenance, first-order death and \
             Luedeking-Piret product formation over a stirred volume.",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_params() -> KineticParameters {
        KineticParameters {
            mu_max: 0.5,
            ks: 0.5,
            yield_xs: 0.5,
            maintenance: 0.05,
            death_rate: 0.02,
            alpha: 2.0,
            beta: 0.1,
        }
    }

    #[test]
    fn test_monod_growth_rate() {
        let model = MonodKinetics::batch(KineticParameters::default());
        let rates = model.compute_rates(&ReactorState::new(0.1, 10.0, 0.0));

        // mu = 0.5 * 10 / (0.5 + 10)
        assert_relative_eq!(rates.mu, 10.0 / 21.0, epsilon = 1e-14);
    }

    #[test]
    fn test_half_saturation_point() {
        // At S = Ks the growth rate is exactly mu_max / 2
        let params = KineticParameters::default();
        let model = MonodKinetics::batch(params);

        let rates = model.compute_rates(&ReactorState::new(0.1, params.ks, 0.0));

        assert_relative_eq!(rates.mu, params.mu_max / 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_batch_balances() {
        let params = reference_params();
        let model = MonodKinetics::batch(params);
        let state = ReactorState::new(0.2, 4.0, 0.5);

        let rates = model.compute_rates(&state);

        let mu = 0.5 * 4.0 / 4.5;
        let q_s = mu / 0.5 + 0.05;
        let q_p = 2.0 * mu + 0.1;

        assert_relative_eq!(rates.d_biomass, (mu - 0.02) * 0.2, epsilon = 1e-14);
        assert_relative_eq!(rates.d_substrate, -q_s * 0.2, epsilon = 1e-14);
        assert_relative_eq!(rates.d_product, q_p * 0.2, epsilon = 1e-14);
        assert_relative_eq!(rates.q_substrate, q_s, epsilon = 1e-14);
        assert_relative_eq!(rates.q_product, q_p, epsilon = 1e-14);
    }

    #[test]
    fn test_cstr_balances_include_dilution_terms() {
        let params = reference_params();
        let feed = FeedCondition::cstr(0.1, 10.0);
        let model = MonodKinetics::new(params, feed);
        let state = ReactorState::new(0.2, 4.0, 0.5);

        let rates = model.compute_rates(&state);

        let mu = 0.5 * 4.0 / 4.5;
        let q_s = mu / 0.5 + 0.05;
        let q_p = 2.0 * mu + 0.1;

        assert_relative_eq!(rates.d_biomass, (mu - 0.02 - 0.1) * 0.2, epsilon = 1e-14);
        assert_relative_eq!(
            rates.d_substrate,
            0.1 * (10.0 - 4.0) - q_s * 0.2,
            epsilon = 1e-14
        );
        assert_relative_eq!(rates.d_product, q_p * 0.2 - 0.1 * 0.5, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_dilution_collapses_to_batch() {
        // The CSTR rate law with D = 0, Sin = 0 must agree with the batch
        // constructor exactly: same function, different operating point.
        let params = reference_params();
        let state = ReactorState::new(0.3, 2.0, 1.0);

        let batch = MonodKinetics::batch(params).compute_rates(&state);
        let idle_feed = MonodKinetics::new(params, FeedCondition::cstr(0.0, 0.0))
            .compute_rates(&state);

        assert_eq!(batch, idle_feed);
    }

    #[test]
    fn test_negative_substrate_is_treated_as_zero() {
        let model = MonodKinetics::batch(KineticParameters::default());

        let rates = model.compute_rates(&ReactorState::new(0.1, -0.5, 0.0));

        assert_eq!(rates.mu, 0.0);
        assert_eq!(rates.d_biomass, 0.0);
        assert_eq!(rates.d_substrate, 0.0);
    }

    #[test]
    fn test_vanishing_saturation_denominator() {
        // Ks = 0 and S = 0 drives the Monod denominator below the guard
        let params = KineticParameters {
            ks: 0.0,
            ..KineticParameters::default()
        };
        let model = MonodKinetics::batch(params);

        let rates = model.compute_rates(&ReactorState::new(0.1, 0.0, 0.0));

        assert_eq!(rates.mu, 0.0);
    }

    #[test]
    fn test_vanishing_yield_disables_uptake() {
        let params = KineticParameters {
            yield_xs: 0.0,
            maintenance: 0.05,
            ..KineticParameters::default()
        };
        let model = MonodKinetics::batch(params);

        let rates = model.compute_rates(&ReactorState::new(0.1, 10.0, 0.0));

        // The guard suppresses the whole uptake term, maintenance included
        assert_eq!(rates.q_substrate, 0.0);
        assert_eq!(rates.d_substrate, 0.0);
        assert!(rates.mu > 0.0);
    }

    #[test]
    fn test_rate_law_is_pure() {
        let model = MonodKinetics::batch(reference_params());
        let state = ReactorState::new(0.2, 4.0, 0.5);

        assert_eq!(model.compute_rates(&state), model.compute_rates(&state));
    }
}
