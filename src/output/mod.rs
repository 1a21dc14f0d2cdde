//! Output module for simulation results
//!
//! This module provides tools to output trajectories in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── trajectory.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use ferm_rs::output::visualization::plot_trajectory;
//!
//! // Generate PNG plot of the three concentration series
//! plot_trajectory(&trajectory, "fermentation.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use ferm_rs::output::export::{CsvExporter, Exporter};
//!
//! // Export all points to CSV
//! CsvExporter::default().export(&trajectory, None, "run.csv")?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots, graphs)
//! - **Export**: For programmatic analysis (CSV)
//!
//! Both sub-modules consume a [`Trajectory`](crate::solver::Trajectory)
//! without mutating it; output never feeds back into the simulation.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{CsvConfig, CsvError, CsvExporter, Exporter};
pub use visualization::{plot_growth_rate, plot_trajectory, PlotConfig};
