//! Example: Batch Fermentation - Euler vs Runge-Kutta
//!
//! Simulates a batch fermentation with product formation using literature-style
//! parameters for a Monod culture:
//!
//! - Solvers: Euler and RK4 on the same grid
//! - Outputs: CSV export and PNG time-course plot
//!
//! Compares final states and computational cost of the two methods.
//!
//! **Physical System**:
//! - Closed stirred vessel, no feed
//! - Initial charge: 0.1 g/L biomass, 10 g/L substrate
//! - Growth-associated product formation (alpha > 0)

use std::time::Instant;

use ferm_rs::output::export::{CsvConfig, CsvExporter, Exporter};
use ferm_rs::output::visualization::{plot_trajectory, PlotConfig};
use ferm_rs::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Batch Fermentation - Euler vs Runge-Kutta");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Kinetic parameters ======

    let params = KineticParameters {
        mu_max: 0.5,      // Maximum specific growth rate [1/h]
        ks: 0.5,          // Half-saturation constant [g/L]
        yield_xs: 0.5,    // Yield coefficient [g/g]
        maintenance: 0.01, // Maintenance uptake [g/(g·h)]
        death_rate: 0.005, // Specific death rate [1/h]
        alpha: 2.2,       // Growth-associated product term [g/g]
        beta: 0.05,       // Non-growth-associated product term [g/(g·h)]
    };

    println!("Kinetic Parameters:");
    println!("  mu_max : {} 1/h", params.mu_max);
    println!("  Ks     : {} g/L", params.ks);
    println!("  Yxs    : {} g/g", params.yield_xs);
    println!("  mS     : {} g/(g·h)", params.maintenance);
    println!("  kd     : {} 1/h", params.death_rate);
    println!("  alpha  : {} g/g", params.alpha);
    println!("  beta   : {} g/(g·h)\n", params.beta);

    // ====== Simulation configuration ======

    let initial = ReactorState::default();
    let total_time = 24.0; // one day of culture
    let time_step = 0.05;

    println!("Simulation:");
    println!("  Initial charge : X = {} g/L, S = {} g/L", initial.biomass, initial.substrate);
    println!("  Horizon        : {} h", total_time);
    println!("  Time step      : {} h\n", time_step);

    // ====== Run both solvers on the same grid ======

    let methods = [IntegrationMethod::Euler, IntegrationMethod::Rk4];
    let mut results = Vec::new();

    for method in methods {
        let config = SolverConfiguration::new(total_time, time_step).with_method(method);

        let started = Instant::now();
        let trajectory = simulate_batch(&params, &initial, &config)?;
        let elapsed = started.elapsed();

        let last = trajectory.final_state().unwrap();
        println!(
            "{:<14} X = {:.4} g/L, S = {:.4} g/L, P = {:.4} g/L   ({} points, {:?})",
            format!("{}:", method),
            last.biomass,
            last.substrate,
            last.product,
            trajectory.len(),
            elapsed
        );

        results.push(trajectory);
    }

    let euler_final = results[0].final_state().unwrap();
    let rk4_final = results[1].final_state().unwrap();
    println!(
        "\nMethod difference on the final biomass: {:.2e} g/L",
        (euler_final.biomass - rk4_final.biomass).abs()
    );

    // ====== Export the RK4 trajectory ======

    let tmp_dir = std::env::temp_dir();
    let rk4_trajectory = &results[1];

    let csv_path = tmp_dir.join("batch_fermentation.csv");
    let exporter = CsvExporter::new(CsvConfig {
        include_metadata: true,
        ..CsvConfig::default()
    });
    exporter.export(rk4_trajectory, Some(500), csv_path.to_str().unwrap())?;
    println!("\nCSV written to  {}", csv_path.display());

    let plot_path = tmp_dir.join("batch_fermentation.png");
    let plot_config = PlotConfig::time_course(Some("Batch fermentation (RK4)"));
    plot_trajectory(rk4_trajectory, plot_path.to_str().unwrap(), Some(&plot_config))?;
    println!("Plot written to {}", plot_path.display());

    Ok(())
}
