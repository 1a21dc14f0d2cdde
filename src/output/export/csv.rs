//! CSV export functionality for simulation results
//!
//! Exports trajectories to CSV (Comma-Separated Values) format, which is
//! compatible with Excel, Python pandas, MATLAB, and most data analysis tools.
//!
//! # Features
//!
//! - **Metadata support**: Optional `#`-prefixed header with run parameters
//! - **Customizable**: Delimiter and numeric precision options
//! - **Downsampling**: Uniform reduction to n points, first and last kept
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use ferm_rs::output::export::{CsvExporter, Exporter};
//!
//! CsvExporter::default().export(&trajectory, None, "run.csv")?;
//! ```
//!
//! **Output** (`run.csv`):
//! ```csv
//! time,biomass,substrate,product,growth_rate
//! 0.000000,0.100000,10.000000,0.000000,0.476190
//! 0.100000,0.104875,9.990238,0.000000,0.476147
//! ...
//! ```
//!
//! With `include_metadata` enabled, the data block is preceded by comment
//! lines carrying the trajectory metadata:
//!
//! ```csv
//! # dt: 0.1
//! # reactor: batch
//! # solver: Runge-Kutta 4
//! # ...
//! time,biomass,substrate,product,growth_rate
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::output::export::Exporter;
use crate::solver::Trajectory;

// =================================================================================================
// CSV Error
// =================================================================================================

/// Errors specific to the CSV export format.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The underlying file could not be created or written
    #[error("failed to write CSV file: {0}")]
    Io(#[from] std::io::Error),

    /// The trajectory holds no data points
    #[error("trajectory contains no data points")]
    EmptyTrajectory,
}

// =================================================================================================
// CSV Configuration
// =================================================================================================

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: `,`)
    pub delimiter: char,

    /// Number of decimal places for numeric values (default: 6)
    pub precision: usize,

    /// Prepend the trajectory metadata as `#`-prefixed comment lines
    /// (default: false)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
        }
    }
}

// =================================================================================================
// CSV Exporter
// =================================================================================================

/// CSV exporter for trajectories.
///
/// # Example
///
/// ```rust,ignore
/// use ferm_rs::output::export::{CsvConfig, CsvExporter, Exporter};
///
/// let exporter = CsvExporter::new(CsvConfig {
///     precision: 4,
///     include_metadata: true,
///     ..CsvConfig::default()
/// });
///
/// exporter.export(&trajectory, Some(500), "run.csv")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with a custom configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Indices of the rows to write.
    ///
    /// `None` (or a request covering the whole trajectory) keeps every row.
    /// Otherwise rows are picked uniformly with the first and last indices
    /// always present. Requests below two points are widened to two.
    fn sample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
        match n_points {
            None => (0..len).collect(),
            Some(n) if n >= len => (0..len).collect(),
            Some(n) => {
                let n = n.max(2);
                let mut indices: Vec<usize> =
                    (0..n).map(|k| k * (len - 1) / (n - 1)).collect();
                indices.dedup();
                indices
            }
        }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export(
        &self,
        trajectory: &Trajectory,
        n_points: Option<usize>,
        path: &str,
    ) -> Result<(), CsvError> {
        if trajectory.is_empty() {
            return Err(CsvError::EmptyTrajectory);
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        // ====== Metadata header ======

        if self.config.include_metadata {
            // HashMap iteration order is arbitrary; sort for stable files.
            let mut entries: Vec<_> = trajectory.metadata.iter().collect();
            entries.sort();

            for (key, value) in entries {
                writeln!(writer, "# {}: {}", key, value)?;
            }
        }

        // ====== Column header ======

        let d = self.config.delimiter;
        writeln!(
            writer,
            "time{d}biomass{d}substrate{d}product{d}growth_rate"
        )?;

        // ====== Data rows ======

        let precision = self.config.precision;
        for index in Self::sample_indices(trajectory.len(), n_points) {
            let state = trajectory.states[index];
            writeln!(
                writer,
                "{time:.precision$}{d}{x:.precision$}{d}{s:.precision$}{d}{p:.precision$}{d}{mu:.precision$}",
                time = trajectory.times[index],
                x = state.biomass,
                s = state.substrate,
                p = state.product,
                mu = trajectory.growth_rates[index],
            )?;
        }

        writer.flush()?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
