//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module.
//! This design follows the **Open/Closed principle**: adding a new format
//! means adding a file, without ever modifying existing code.
//!
//! # Available formats
//!
//! | Format  | Module          | Version |
//! |---------|-----------------|---------|
//! | CSV     | [`csv`]         | v0.1.0  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use ferm_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Full export (all time steps)
//! exporter.export(&trajectory, None, "run.csv")?;
//!
//! // Downsampled export to 500 points
//! exporter.export(&trajectory, Some(500), "run_light.csv")?;
//! ```

pub mod csv;

// Re-export the most commonly used types at the module level so users can write:
//   use ferm_rs::output::export::{CsvExporter, CsvConfig, CsvError};
// instead of the full sub-module path.
pub use csv::{CsvConfig, CsvError, CsvExporter};

use crate::solver::Trajectory;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type.
/// This avoids systematic boxing (`Box<dyn Error>`) and allows
/// the caller to react precisely based on the error type.
///
/// # Parameter `n_points`
///
/// - `None`: exports all time steps (default behaviour)
/// - `Some(n)`: uniformly downsamples to `n` points, always guaranteeing
///   that the **first and last** points are included (important to capture
///   the initial charge and the end state of the fermentation)
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a trajectory.
    ///
    /// The file contains the five trajectory columns: `time`, `biomass`,
    /// `substrate`, `product`, `growth_rate`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - the trajectory contains no data
    fn export(
        &self,
        trajectory: &Trajectory,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;
}
