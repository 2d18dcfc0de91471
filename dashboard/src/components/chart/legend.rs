// Legend row above the plot: a color swatch and "Name (min–max)" per metric.
use shared::models::ScaledSeries;
use shared::utils::decimal::format_range_value;

use crate::config::{ChartConfig, ThemePalette};
use crate::surface::{DrawSurface, Point, Rect, TextAlign, TextStyle};

pub fn legend_label(series: &ScaledSeries) -> String {
    format!(
        "{} ({}–{})",
        series.metric.display_name(),
        format_range_value(series.domain.min),
        format_range_value(series.domain.max)
    )
}

/// Draws the legend left to right starting at the plot's left edge.
pub fn draw_legend<S: DrawSurface>(
    surface: &mut S,
    series: &[ScaledSeries],
    config: &ChartConfig,
    theme: &ThemePalette,
) {
    let legend = &config.legend;
    let style = TextStyle {
        color: theme.legend_text.clone(),
        font_family: config.font.family.clone(),
        font_size: config.font.size,
        align: TextAlign::Left,
    };

    let mut x = config.padding.left;
    let baseline = legend.baseline;
    for s in series {
        surface.fill_rect(
            Rect {
                x,
                y: baseline - legend.swatch_size,
                width: legend.swatch_size,
                height: legend.swatch_size,
            },
            theme.metric_color(s.metric),
        );
        x += legend.swatch_size + legend.swatch_gap;

        let label = legend_label(s);
        surface.fill_text(&label, Point::new(x, baseline), &style);
        x += surface.measure_text(&label, &style) + legend.item_gap;
    }
}
