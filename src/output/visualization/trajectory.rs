//! Time-course plotting for trajectories
//!
//! Plots the three concentration series (biomass, substrate, product) of a
//! trajectory against time, or the recorded specific growth rate.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ferm_rs::output::visualization::{plot_growth_rate, plot_trajectory};
//!
//! let trajectory = simulate_batch(&params, &initial, &config)?;
//! plot_trajectory(&trajectory, "fermentation.png", None)?;
//! plot_growth_rate(&trajectory, "mu.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::PlotConfig;
use crate::solver::Trajectory;

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot the concentration time course (X, S, P vs time)
///
/// # Arguments
///
/// * `trajectory` - Simulation result
/// * `output_path` - Path to save the plot (PNG or SVG, by extension)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// plot_trajectory(&trajectory, "fermentation.png", None)?;
/// ```
pub fn plot_trajectory(
    trajectory: &Trajectory,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err("trajectory contains no data points".into());
    }

    let default_config = PlotConfig::time_course(None);
    let config = config.unwrap_or(&default_config);

    let series: Vec<(&str, Vec<f64>)> = vec![
        ("Biomass", trajectory.biomass().iter().copied().collect()),
        ("Substrate", trajectory.substrate().iter().copied().collect()),
        ("Product", trajectory.product().iter().copied().collect()),
    ];

    match backend_kind(output_path) {
        BackendKind::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_series_impl(backend, &trajectory.times, &series, config)
        }
        BackendKind::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_series_impl(backend, &trajectory.times, &series, config)
        }
    }
}

/// Plot the recorded specific growth rate mu(t)
///
/// The growth-rate series is a per-step diagnostic (for RK4 it is the
/// first-stage value); see the solver documentation.
pub fn plot_growth_rate(
    trajectory: &Trajectory,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err("trajectory contains no data points".into());
    }

    let default_config = PlotConfig::growth_rate(None);
    let config = config.unwrap_or(&default_config);

    let series: Vec<(&str, Vec<f64>)> =
        vec![("mu", trajectory.growth_rate().iter().copied().collect())];

    match backend_kind(output_path) {
        BackendKind::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_series_impl(backend, &trajectory.times, &series, config)
        }
        BackendKind::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_series_impl(backend, &trajectory.times, &series, config)
        }
    }
}

// =================================================================================================
// Backend Selection
// =================================================================================================

enum BackendKind {
    Bitmap,
    Svg,
}

/// Pick the drawing backend from the file extension (`.svg` or bitmap)
fn backend_kind(output_path: &str) -> BackendKind {
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => BackendKind::Svg,
        _ => BackendKind::Bitmap,
    }
}

// =================================================================================================
// Generic Implementation
// =================================================================================================

/// Implementation for time-series plotting with a concrete backend
fn plot_series_impl<DB: DrawingBackend>(
    backend: DB,
    times: &[f64],
    series: &[(&str, Vec<f64>)],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let max_time = times.last().copied().unwrap_or(0.0).max(f64::MIN_POSITIVE);
    let max_value = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_time, 0.0..(max_value * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (index, (label, values)) in series.iter().enumerate() {
        // Cycle through the palette when more series than colors are given
        let color = config.series_colors[index % config.series_colors.len()];

        chart
            .draw_series(LineSeries::new(
                times.iter().zip(values.iter()).map(|(t, v)| (*t, *v)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ReactorState;

    fn sample_trajectory() -> Trajectory {
        let times: Vec<f64> = (0..20).map(|k| k as f64 * 0.5).collect();
        let states: Vec<ReactorState> = (0..20)
            .map(|k| ReactorState::new(0.1 + 0.02 * k as f64, 10.0 - 0.1 * k as f64, 0.01 * k as f64))
            .collect();
        let growth_rates = vec![0.45; 20];
        Trajectory::new(times, states, growth_rates)
    }

    fn temp_plot(suffix: &str) -> tempfile::NamedTempFile {
        tempfile::Builder::new().suffix(suffix).tempfile().unwrap()
    }

    #[test]
    fn test_plot_trajectory_png() {
        let tmp = temp_plot(".png");
        let path = tmp.path().to_str().unwrap();

        plot_trajectory(&sample_trajectory(), path, None).unwrap();

        let size = std::fs::metadata(path).unwrap().len();
        assert!(size > 0, "plot file is empty");
    }

    #[test]
    fn test_plot_trajectory_svg() {
        let tmp = temp_plot(".svg");
        let path = tmp.path().to_str().unwrap();

        plot_trajectory(&sample_trajectory(), path, None).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn test_plot_growth_rate() {
        let tmp = temp_plot(".png");
        let path = tmp.path().to_str().unwrap();

        plot_growth_rate(&sample_trajectory(), path, None).unwrap();

        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_trajectory_is_rejected() {
        let trajectory = Trajectory::new(vec![], vec![], vec![]);
        let tmp = temp_plot(".png");

        let result = plot_trajectory(&trajectory, tmp.path().to_str().unwrap(), None);

        assert!(result.is_err());
    }
}
