// Chart colors, as `#rrggbb`, `#rgb`, `rgb(..)` or `rgba(..)` strings.
use serde::{Deserialize, Serialize};
use shared::models::Metric;

use crate::surface::parse_css_color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub grid: String,
    pub tick_label: String,
    pub legend_text: String,
    pub border: String,
    // Per-metric series colors. Weight is the primary series.
    pub weight: String,
    pub calories: String,
    pub steps: String,
    pub cardio: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#0a0e1a".to_string(),
            grid: "rgba(255,255,255,0.08)".to_string(),
            tick_label: "rgba(255,255,255,0.65)".to_string(),
            legend_text: "rgba(255,255,255,0.85)".to_string(),
            border: "rgba(255,255,255,0.14)".to_string(),
            weight: "#2f81f7".to_string(),
            calories: "#2ee59d".to_string(),
            steps: "#ffd166".to_string(),
            cardio: "#ff4d6d".to_string(),
        }
    }

    pub fn metric_color(&self, metric: Metric) -> &str {
        match metric {
            Metric::Weight => &self.weight,
            Metric::Calories => &self.calories,
            Metric::Steps => &self.steps,
            Metric::Cardio => &self.cardio,
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let named = [
            ("background", &self.background),
            ("grid", &self.grid),
            ("tick_label", &self.tick_label),
            ("legend_text", &self.legend_text),
            ("border", &self.border),
            ("weight", &self.weight),
            ("calories", &self.calories),
            ("steps", &self.steps),
            ("cardio", &self.cardio),
        ];
        for (name, color) in named {
            if parse_css_color(color).is_none() {
                anyhow::bail!("theme.{} is not a supported color: {:?}", name, color);
            }
        }
        Ok(())
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_embedded_theme_matches_dark_default() {
        assert_eq!(AppConfig::load_default().unwrap().theme, ThemePalette::default_dark());
    }

    #[test]
    fn test_named_colors_are_rejected() {
        let mut theme = ThemePalette::default_dark();
        assert!(theme.validate().is_ok());
        theme.steps = "gold".to_string();
        let err = theme.validate().unwrap_err();
        assert!(err.to_string().contains("theme.steps"));
    }

    #[test]
    fn test_every_metric_has_a_distinct_color() {
        let theme = ThemePalette::default_dark();
        let mut colors: Vec<&str> = Metric::ALL.iter().map(|m| theme.metric_color(*m)).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), Metric::ALL.len());
    }
}
