use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One day of measurements. `date` (`YYYY-MM-DD`) is the unique key and the sort key.
///
/// Numeric fields are either finite or `None`; `None` means "not recorded", which is
/// different from zero and is serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: String,
    pub calories: Option<f64>,
    pub weight: Option<f64>,
    pub steps: Option<f64>,
    pub cardio: Option<f64>,
    pub workout: String,
    pub comments: String,
}

impl Entry {
    /// An entry for `date` with nothing recorded yet.
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            calories: None,
            weight: None,
            steps: None,
            cardio: None,
            workout: String::new(),
            comments: String::new(),
        }
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        let raw = match metric {
            Metric::Weight => self.weight,
            Metric::Calories => self.calories,
            Metric::Steps => self.steps,
            Metric::Cardio => self.cardio,
        };
        raw.filter(|v| v.is_finite())
    }
}

/// The chartable measurements. Weight is the primary metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Weight,
    Calories,
    Steps,
    Cardio,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Weight, Metric::Calories, Metric::Steps, Metric::Cardio];

    /// Substituted whenever a selection comes in empty.
    pub const DEFAULT: Metric = Metric::Weight;

    pub fn key(&self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::Calories => "calories",
            Metric::Steps => "steps",
            Metric::Cardio => "cardio",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Weight => "Weight",
            Metric::Calories => "Calories",
            Metric::Steps => "Steps",
            Metric::Cardio => "Cardio",
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Metric::Weight)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric '{}' (expected weight, calories, steps or cardio)", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// Lookback window for the chart: every entry, or the trailing `n` calendar days
/// including today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Window {
    #[default]
    All,
    Days(u32),
}

impl Window {
    /// Reads a window selection. Anything that is not "all" or a positive whole
    /// number of days falls back to `All`.
    pub fn parse(raw: &str) -> Window {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") {
            return Window::All;
        }
        match raw.parse::<u32>() {
            Ok(days) if days > 0 => Window::Days(days),
            _ => Window::All,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::All => f.write_str("all"),
            Window::Days(days) => write!(f, "{}", days),
        }
    }
}

impl From<String> for Window {
    fn from(raw: String) -> Self {
        Window::parse(&raw)
    }
}

impl From<Window> for String {
    fn from(window: Window) -> Self {
        window.to_string()
    }
}

/// Everything the pipeline needs to know about what to draw.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    pub window: Window,
    pub metrics: Vec<Metric>,
}

impl RenderRequest {
    pub fn new(window: Window, metrics: Vec<Metric>) -> Self {
        Self { window, metrics }
    }
}

/// Value range of one series, used for rescaling into [0, 1]. Always `max > min`
/// once produced by the scaler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Placeholder used when a series has no finite values at all.
    pub const UNIT: Domain = Domain { min: 0.0, max: 1.0 };

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// One metric over the visible entries, rescaled into [0, 1]. `values` lines up
/// index-for-index with the entries it was built from; `None` is a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledSeries {
    pub metric: Metric,
    pub domain: Domain,
    pub values: Vec<Option<f64>>,
}
