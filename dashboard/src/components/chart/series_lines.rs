// Turns a normalized series into drawable runs and point markers.
use super::layout::PlotArea;
use crate::surface::Point;

/// Consecutive present values become one run; every gap ends the current run.
/// Values are never interpolated across a gap.
pub fn line_runs(values: &[Option<f64>], area: &PlotArea) -> Vec<Vec<Point>> {
    let count = values.len();
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push(area.point(i, count, *v)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// One marker per present value.
pub fn marker_points(values: &[Option<f64>], area: &PlotArea) -> Vec<Point> {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| area.point(i, count, v)))
        .collect()
}
