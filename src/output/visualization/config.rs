//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Used by both the concentration time-course and the growth-rate plots.
///
/// # Example
///
/// ```rust
/// use ferm_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::time_course(Some("Chemostat start-up"));
/// config.width = 1920; // Full HD
/// config.height = 1080;
/// config.series_colors = vec![BLACK, BLUE, MAGENTA];
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title
    pub title: String,

    /// X-axis label
    pub xlabel: String,

    /// Y-axis label
    pub ylabel: String,

    /// Series colors, consumed in order (biomass, substrate, product)
    pub series_colors: Vec<RGBColor>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "Time (h)".to_string(),
            ylabel: "Concentration (g/L)".to_string(),
            series_colors: vec![RED, BLUE, GREEN],
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Config for the concentration time-course plot
    ///
    /// Sets the axis labels for a concentration-vs-time chart; `None` keeps
    /// the default title.
    pub fn time_course(title: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or("Fermentation time course").to_string(),
            ..Self::default()
        }
    }

    /// Config for the specific growth-rate plot
    pub fn growth_rate(title: Option<&str>) -> Self {
        Self {
            title: title.unwrap_or("Specific growth rate").to_string(),
            ylabel: "mu (1/h)".to_string(),
            ..Self::default()
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
