// Plot area geometry and the index/value to pixel mapping.
use crate::config::Padding;
use crate::surface::Point;

/// The rectangle inside the margins where series are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(surface_width: f64, surface_height: f64, padding: Padding) -> Self {
        PlotArea {
            left: padding.left,
            top: padding.top,
            width: (surface_width - padding.left - padding.right).max(0.0),
            height: (surface_height - padding.top - padding.bottom).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// x for the `index`th of `count` entries. Entries are spread evenly from the
    /// left edge to the right edge; a lone entry sits on the left edge.
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        let denom = count.saturating_sub(1).max(1) as f64;
        self.left + (index as f64 / denom) * self.width
    }

    /// y for a normalized value: 0 at the bottom edge, 1 at the top.
    pub fn y_at(&self, normalized: f64) -> f64 {
        self.top + (1.0 - normalized) * self.height
    }

    pub fn point(&self, index: usize, count: usize, normalized: f64) -> Point {
        Point::new(self.x_at(index, count), self.y_at(normalized))
    }

    /// y of each horizontal gridline, top to bottom, `intervals + 1` lines.
    pub fn gridline_ys(&self, intervals: u32) -> Vec<f64> {
        let intervals = intervals.max(1);
        (0..=intervals)
            .map(|i| self.top + (f64::from(i) / f64::from(intervals)) * self.height)
            .collect()
    }
}

/// Entry indices that get an x label: up to `max_ticks`, evenly spread, always
/// including the first and last entry. Indices that round to the same entry are
/// labeled once.
pub fn tick_indices(count: usize, max_ticks: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let ticks = max_ticks.max(2).min(count.max(2));
    let last = (count - 1) as f64;
    let mut indices: Vec<usize> = (0..ticks)
        .map(|i| ((i as f64 / (ticks - 1) as f64) * last).round() as usize)
        .collect();
    indices.dedup();
    indices
}
