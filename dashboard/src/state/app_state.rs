// Chart selection state: which metrics are ticked and which window is chosen.
// Turned into an explicit RenderRequest for every render.
use serde::{Deserialize, Serialize};
use shared::models::{Metric, RenderRequest, Window};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub window: Window,
    checked: BTreeSet<Metric>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            window: Window::All,
            checked: BTreeSet::from([Metric::DEFAULT]),
        }
    }
}

impl AppState {
    pub fn new(window: Window, metrics: impl IntoIterator<Item = Metric>) -> Self {
        Self {
            window,
            checked: metrics.into_iter().collect(),
        }
    }

    /// Unrecognized selections show all entries.
    pub fn set_window_selection(&mut self, raw: &str) {
        self.window = Window::parse(raw);
        if self.window == Window::All && !raw.trim().eq_ignore_ascii_case("all") {
            tracing::debug!(selection = raw, "Unrecognized window selection, showing all entries");
        }
    }

    pub fn set_checked(&mut self, metric: Metric, checked: bool) {
        if checked {
            self.checked.insert(metric);
        } else {
            self.checked.remove(&metric);
        }
    }

    pub fn is_checked(&self, metric: Metric) -> bool {
        self.checked.contains(&metric)
    }

    /// Ticked metrics in display order (weight, calories, steps, cardio).
    pub fn selected(&self) -> Vec<Metric> {
        Metric::ALL.into_iter().filter(|m| self.checked.contains(m)).collect()
    }

    /// The request for the next render. With nothing ticked, weight is ticked
    /// again so the selection never shows as empty.
    pub fn render_request(&mut self) -> RenderRequest {
        if self.checked.is_empty() {
            tracing::debug!("No metric ticked, re-checking {}", Metric::DEFAULT);
            self.checked.insert(Metric::DEFAULT);
        }
        RenderRequest::new(self.window, self.selected())
    }
}
