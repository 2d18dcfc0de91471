// Dashboard configuration: chart geometry and colors.
pub mod theme;

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub use theme::ThemePalette;

/// Mirrors assets/config/default.json.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub chart: ChartConfig,
    pub theme: ThemePalette,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub padding: Padding,
    /// Gridlines are drawn at every interval boundary, so there is one more line
    /// than intervals.
    pub grid_intervals: u32,
    pub max_x_ticks: usize,
    /// Height as a fraction of width.
    pub aspect_ratio: f64,
    pub default_width: f64,
    pub device_pixel_ratio: f64,
    pub line_width: Emphasis,
    pub marker_radius: Emphasis,
    pub font: FontConfig,
    pub legend: LegendConfig,
    /// Distance of the x tick label baseline above the bottom edge.
    pub x_label_offset: f64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// A size that differs between the primary metric and the others.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Emphasis {
    pub primary: f64,
    pub secondary: f64,
}

impl Emphasis {
    pub fn pick(&self, primary: bool) -> f64 {
        if primary {
            self.primary
        } else {
            self.secondary
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct LegendConfig {
    pub baseline: f64,
    pub swatch_size: f64,
    pub swatch_gap: f64,
    pub item_gap: f64,
}

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

impl AppConfig {
    /// The configuration embedded in the binary.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(DEFAULT_CONFIG)?;
        Ok(config)
    }

    /// Loads a user configuration file. It must be complete; start from a copy of
    /// the default file.
    pub fn load_from_path(path: &Path) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading chart config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing chart config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: Option<&Path>) -> Result<Self, anyhow::Error> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => Self::load_default(),
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        let c = &self.chart;
        if !(c.aspect_ratio.is_finite() && c.aspect_ratio > 0.0) {
            anyhow::bail!("chart.aspect_ratio must be positive, got {}", c.aspect_ratio);
        }
        if !(c.device_pixel_ratio.is_finite() && c.device_pixel_ratio > 0.0) {
            anyhow::bail!("chart.device_pixel_ratio must be positive, got {}", c.device_pixel_ratio);
        }
        if c.grid_intervals == 0 {
            anyhow::bail!("chart.grid_intervals must be at least 1");
        }
        self.theme.validate()
    }
}
