// Multi-metric line chart. Every metric is drawn on its own [0, 1] scale, so the
// y axis carries no numbers; each metric's range is shown in the legend instead.
pub mod layout;
pub mod legend;
pub mod series_lines;

use engine::services::ChartData;
use shared::utils::dates::month_day;

use crate::config::{ChartConfig, ThemePalette};
use crate::surface::{DrawSurface, Point, Rect, SurfaceSize, SvgError, SvgSurface, TextAlign, TextStyle};
use layout::{tick_indices, PlotArea};
use series_lines::{line_runs, marker_points};

pub struct ChartRenderer<'a> {
    config: &'a ChartConfig,
    theme: &'a ThemePalette,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(config: &'a ChartConfig, theme: &'a ThemePalette) -> Self {
        ChartRenderer { config, theme }
    }

    /// Redraws the whole chart for `data`. Nothing from a previous render survives.
    pub fn render<S: DrawSurface>(&self, data: &ChartData, surface: &mut S) {
        let size = surface.size();
        let area = PlotArea::new(size.width, size.height, self.config.padding);

        surface.clear();
        surface.fill_rect(
            Rect { x: 0.0, y: 0.0, width: size.width, height: size.height },
            &self.theme.background,
        );

        self.draw_grid(surface, &area);
        self.draw_x_labels(surface, &area, &data.dates, size.height);
        legend::draw_legend(surface, &data.series, self.config, self.theme);
        self.draw_series(surface, &area, data);

        surface.stroke_rect(
            Rect { x: area.left, y: area.top, width: area.width, height: area.height },
            &self.theme.border,
            1.0,
        );
        tracing::debug!(points = data.len(), metrics = data.series.len(), "Rendered chart");
    }

    fn draw_grid<S: DrawSurface>(&self, surface: &mut S, area: &PlotArea) {
        for y in area.gridline_ys(self.config.grid_intervals) {
            surface.stroke_line(
                Point::new(area.left, y),
                Point::new(area.right(), y),
                &self.theme.grid,
                1.0,
            );
        }
    }

    fn draw_x_labels<S: DrawSurface>(&self, surface: &mut S, area: &PlotArea, dates: &[String], height: f64) {
        let style = TextStyle {
            color: self.theme.tick_label.clone(),
            font_family: self.config.font.family.clone(),
            font_size: self.config.font.size,
            align: TextAlign::Center,
        };
        let baseline = height - self.config.x_label_offset;
        for idx in tick_indices(dates.len(), self.config.max_x_ticks) {
            let label = month_day(&dates[idx]);
            if label.is_empty() {
                continue;
            }
            surface.fill_text(label, Point::new(area.x_at(idx, dates.len()), baseline), &style);
        }
    }

    fn draw_series<S: DrawSurface>(&self, surface: &mut S, area: &PlotArea, data: &ChartData) {
        for series in &data.series {
            let color = self.theme.metric_color(series.metric);
            let primary = series.metric.is_primary();

            let runs = line_runs(&series.values, area);
            surface.stroke_path(&runs, color, self.config.line_width.pick(primary));

            let radius = self.config.marker_radius.pick(primary);
            for point in marker_points(&series.values, area) {
                surface.fill_circle(point, radius, color);
            }
        }
    }
}

/// Renders `data` into a standalone SVG document `width` logical pixels wide.
pub fn render_svg(
    data: &ChartData,
    config: &ChartConfig,
    theme: &ThemePalette,
    width: f64,
    device_pixel_ratio: f64,
) -> Result<String, SvgError> {
    let size = SurfaceSize::from_width(width, config.aspect_ratio, device_pixel_ratio);
    let mut surface = SvgSurface::new(size);
    ChartRenderer::new(config, theme).render(data, &mut surface);
    surface.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::surface::{DrawOp, RecordingSurface};
    use shared::models::{Domain, Metric, ScaledSeries, Window};

    fn data(dates: &[&str], series: Vec<ScaledSeries>) -> ChartData {
        ChartData {
            window: Window::All,
            dates: dates.iter().map(|d| d.to_string()).collect(),
            series,
            has_any_data: !dates.is_empty(),
        }
    }

    fn series(metric: Metric, values: Vec<Option<f64>>) -> ScaledSeries {
        ScaledSeries { metric, domain: Domain { min: 70.0, max: 72.5 }, values }
    }

    fn render(data: &ChartData) -> RecordingSurface {
        let config = AppConfig::load_default().unwrap();
        let mut surface = RecordingSurface::new(SurfaceSize::from_width(1000.0, 0.52, 1.0));
        ChartRenderer::new(&config.chart, &config.theme).render(data, &mut surface);
        surface
    }

    #[test]
    fn test_background_first_border_last() {
        let s = render(&data(&["2024-03-01"], vec![series(Metric::Weight, vec![Some(0.5)])]));
        assert!(matches!(&s.ops[0], DrawOp::FillRect { rect, color } if rect.width == 1000.0 && rect.height == 520.0 && color == "#0a0e1a"));
        assert!(matches!(s.ops.last(), Some(DrawOp::StrokeRect { rect, .. }) if rect.x == 44.0 && rect.width == 942.0 && rect.height == 474.0));
    }

    #[test]
    fn test_six_gridlines_span_plot() {
        let s = render(&data(&[], vec![series(Metric::Weight, vec![])]));
        let lines = s.lines();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|(from, to)| from.x == 44.0 && to.x == 986.0 && from.y == to.y));
    }

    #[test]
    fn test_x_labels_use_month_day() {
        let dates = ["2024-03-01", "2024-03-02", "2024-03-03"];
        let s = render(&data(&dates, vec![series(Metric::Weight, vec![None, None, None])]));
        let texts = s.texts();
        assert_eq!(&texts[..3], &["03-01", "03-02", "03-03"]);
    }

    #[test]
    fn test_at_most_six_x_labels() {
        let dates: Vec<String> = (1..=30).map(|d| format!("2024-04-{:02}", d)).collect();
        let refs: Vec<&str> = dates.iter().map(String::as_str).collect();
        let s = render(&data(&refs, vec![series(Metric::Weight, vec![None; 30])]));
        let labels = s.texts().into_iter().filter(|t| t.starts_with("04-")).count();
        assert_eq!(labels, 6);
    }

    #[test]
    fn test_legend_shows_domain_per_metric() {
        let s = render(&data(
            &["2024-03-01"],
            vec![series(Metric::Weight, vec![Some(0.5)]), series(Metric::Steps, vec![None])],
        ));
        let texts = s.texts();
        assert!(texts.contains(&"Weight (70–72.5)"));
        assert!(texts.contains(&"Steps (70–72.5)"));
    }

    #[test]
    fn test_gap_breaks_line_and_points_are_mapped() {
        let s = render(&data(
            &["2024-03-01", "2024-03-02", "2024-03-03"],
            vec![series(Metric::Weight, vec![Some(0.0), None, Some(1.0)])],
        ));
        let paths = s.paths();
        assert_eq!(paths.len(), 1);
        let (runs, color, width) = paths[0];
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![Point::new(44.0, 488.0)]);
        assert_eq!(runs[1], vec![Point::new(986.0, 14.0)]);
        assert_eq!(color, "#2f81f7");
        assert_eq!(width, 2.6);
        assert_eq!(s.circles().len(), 2);
    }

    #[test]
    fn test_primary_metric_is_heavier() {
        let s = render(&data(
            &["2024-03-01", "2024-03-02"],
            vec![
                series(Metric::Weight, vec![Some(0.0), Some(1.0)]),
                series(Metric::Calories, vec![Some(1.0), Some(0.0)]),
            ],
        ));
        let paths = s.paths();
        assert!(paths[0].2 > paths[1].2);
        let circles = s.circles();
        let weight_radius = circles.iter().find(|c| c.2 == "#2f81f7").unwrap().1;
        let calories_radius = circles.iter().find(|c| c.2 == "#2ee59d").unwrap().1;
        assert!(weight_radius > calories_radius);
    }

    #[test]
    fn test_render_is_a_full_redraw() {
        let config = AppConfig::load_default().unwrap();
        let renderer = ChartRenderer::new(&config.chart, &config.theme);
        let mut surface = RecordingSurface::new(SurfaceSize::from_width(1000.0, 0.52, 1.0));
        let d = data(&["2024-03-01"], vec![series(Metric::Weight, vec![Some(0.5)])]);
        renderer.render(&d, &mut surface);
        let first = surface.ops.clone();
        renderer.render(&d, &mut surface);
        assert_eq!(surface.ops, first);
    }

    #[test]
    fn test_render_svg_document() {
        let config = AppConfig::load_default().unwrap();
        let d = data(&["2024-03-01", "2024-03-02"], vec![series(Metric::Weight, vec![Some(0.0), Some(1.0)])]);
        let svg = render_svg(&d, &config.chart, &config.theme, 500.0, 2.0).unwrap();
        assert!(svg.contains("width=\"1000\""));
        assert!(svg.contains("height=\"520\""));
        // Logical (44, 228) and (486, 14) at twice the density.
        assert!(svg.contains("88,456 972,28"), "{}", svg);
        assert!(svg.contains("Weight (70–72.5)"));
    }
}
