// Builds the chart input for one render: filter by window, then scale each metric.
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Entry, RenderRequest, ScaledSeries, Window};

use crate::data::range_filter::filter_entries;
use crate::series::scale_metrics;

/// Chart input for one render request. `dates` and every series' `values` have
/// the same length and line up by index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub window: Window,
    pub dates: Vec<String>,
    pub series: Vec<ScaledSeries>,
    /// Whether the unfiltered collection has any entries at all.
    pub has_any_data: bool,
}

impl ChartData {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

pub fn build_chart_data(all: &[Entry], request: &RenderRequest, today: NaiveDate) -> ChartData {
    let visible = filter_entries(all, request.window, today);
    let series = scale_metrics(&visible, &request.metrics);
    tracing::debug!(
        window = %request.window,
        total = all.len(),
        visible = visible.len(),
        metrics = series.len(),
        "Built chart data"
    );
    ChartData {
        window: request.window,
        dates: visible.into_iter().map(|e| e.date).collect(),
        series,
        has_any_data: !all.is_empty(),
    }
}
