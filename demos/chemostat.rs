//! Example: Chemostat - Dynamic Start-up vs Analytic Steady State
//!
//! Runs a CSTR start-up transient and compares the final broth composition
//! against the closed-form fixed point, then sweeps the dilution rate across
//! the washout threshold.
//!
//! Kinetic parameters are loaded from a JSON document to show the
//! configuration path; any omitted field keeps its default.

use ferm_rs::prelude::*;

/// Parameter document, as it would arrive from a config file or a web form
const PARAMS_JSON: &str = r#"{
    "mu_max": 0.5,
    "ks": 0.5,
    "yield_xs": 0.5,
    "alpha": 1.5,
    "beta": 0.02
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Chemostat - Start-up Transient and Steady State");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Parameters from JSON ======

    let params: KineticParameters = serde_json::from_str(PARAMS_JSON)?;
    println!("Parameters (from JSON): {:?}\n", params);

    // ====== Start-up transient at D = 0.3 ======

    let feed = FeedCondition::cstr(0.3, 10.0);
    let config = SolverConfiguration::new(100.0, 0.05);

    let trajectory = simulate_cstr(&params, &feed, &ReactorState::default(), &config)?;
    let last = trajectory.final_state().unwrap();

    let fixed_point = cstr_steady_state(&params, &feed)?;

    println!("Start-up transient at D = {} 1/h, Sin = {} g/L:", feed.dilution_rate, feed.feed_substrate);
    println!("                 {:>10}  {:>10}  {:>10}", "S [g/L]", "X [g/L]", "P [g/L]");
    println!(
        "  dynamic t=100  {:>10.4}  {:>10.4}  {:>10.4}",
        last.substrate, last.biomass, last.product
    );
    println!(
        "  analytic       {:>10.4}  {:>10.4}  {:>10.4}\n",
        fixed_point.substrate, fixed_point.biomass, fixed_point.product
    );

    // ====== Dilution-rate sweep ======

    println!("Dilution-rate sweep (washout above D + kd >= mu_max):");
    println!("  {:>6}  {:>10}  {:>10}  {:>10}  regime", "D", "S* [g/L]", "X* [g/L]", "P* [g/L]");

    for step in 1..=11 {
        let dilution = step as f64 * 0.05;
        let sweep_feed = FeedCondition::cstr(dilution, feed.feed_substrate);
        let steady = cstr_steady_state(&params, &sweep_feed)?;

        println!(
            "  {:>6.2}  {:>10.4}  {:>10.4}  {:>10.4}  {}",
            dilution,
            steady.substrate,
            steady.biomass,
            steady.product,
            if steady.is_washout() { "washout" } else { "stable" }
        );
    }

    Ok(())
}
