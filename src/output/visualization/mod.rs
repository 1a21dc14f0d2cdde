//! Visualization module for simulation results
//!
//! This module provides tools to visualize trajectories using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **trajectory**: Time-course plots (concentrations and growth rate vs time)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ferm_rs::output::visualization::{plot_trajectory, PlotConfig};
//!
//! let trajectory = simulate_batch(&params, &initial, &config)?;
//!
//! // Plot the three concentration series with the default config
//! plot_trajectory(&trajectory, "fermentation.png", None)?;
//!
//! // Or with a custom config
//! let mut plot_config = PlotConfig::time_course(Some("Fed-batch study"));
//! plot_config.width = 1920;
//! plot_trajectory(&trajectory, "study.png", Some(&plot_config))?;
//! ```
//!
//! The output format is chosen from the file extension: `.svg` produces a
//! vector image, anything else falls back to PNG.

pub mod config;
pub mod trajectory;

pub use config::PlotConfig;

pub use trajectory::{plot_growth_rate, plot_trajectory};
