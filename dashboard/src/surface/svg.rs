// SVG output through the plotters SVG backend.
//
// Drawing calls are recorded in logical pixels and replayed into an
// `SVGBackend` sized in device pixels when the document is finished, so a
// `clear` before the first paint really does discard everything.
use plotters::backend::SVGBackend;
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle as PlottersTextStyle};
use plotters_backend::text_anchor::{HPos, Pos, VPos};
use plotters_backend::{BackendColor, BackendCoord, BackendStyle, DrawingBackend, DrawingErrorKind};

use super::color::parse_css_color;
use super::recording::{DrawOp, RecordingSurface};
use super::{estimate_text_width, DrawSurface, Point, Rect, SurfaceSize, TextAlign, TextStyle};

pub type SvgError = DrawingErrorKind<std::io::Error>;

pub struct SvgSurface {
    recorded: RecordingSurface,
}

struct Stroke {
    color: BackendColor,
    width: u32,
}

impl BackendStyle for Stroke {
    fn color(&self) -> BackendColor {
        BackendColor { alpha: self.color.alpha, rgb: self.color.rgb }
    }

    fn stroke_width(&self) -> u32 {
        self.width
    }
}

impl SvgSurface {
    pub fn new(size: SurfaceSize) -> Self {
        SvgSurface { recorded: RecordingSurface::new(size) }
    }

    /// Replays everything drawn since the last `clear` and returns the document.
    pub fn finish(self) -> Result<String, SvgError> {
        let size = self.recorded.size();
        let mut out = String::new();
        {
            let mut backend = SVGBackend::with_string(&mut out, (size.device_width(), size.device_height()));
            for op in &self.recorded.ops {
                replay(&mut backend, op, size.device_pixel_ratio)?;
            }
            backend.present()?;
        }
        Ok(out)
    }
}

fn to_device(p: Point, dpr: f64) -> BackendCoord {
    ((p.x * dpr).round() as i32, (p.y * dpr).round() as i32)
}

// Sizes never collapse to zero, so a thin line stays visible.
fn device_len(v: f64, dpr: f64) -> u32 {
    (v * dpr).ceil().max(1.0) as u32
}

fn backend_color(css: &str) -> BackendColor {
    parse_css_color(css).unwrap_or_else(|| {
        tracing::warn!(color = css, "Unsupported color, drawing black");
        BackendColor { alpha: 1.0, rgb: (0, 0, 0) }
    })
}

fn plotters_text_style<'a>(style: &'a TextStyle, dpr: f64) -> PlottersTextStyle<'a> {
    let h_pos = match style.align {
        TextAlign::Left => HPos::Left,
        TextAlign::Center => HPos::Center,
    };
    PlottersTextStyle {
        font: FontDesc::new(FontFamily::Name(&style.font_family), style.font_size * dpr, FontStyle::Normal),
        color: backend_color(&style.color),
        pos: Pos::new(h_pos, VPos::Bottom),
    }
}

fn replay(backend: &mut SVGBackend<'_>, op: &DrawOp, dpr: f64) -> Result<(), SvgError> {
    match op {
        DrawOp::FillRect { rect, color } => {
            let style = Stroke { color: backend_color(color), width: 1 };
            let (from, to) = rect_corners(rect, dpr);
            backend.draw_rect(from, to, &style, true)
        }
        DrawOp::StrokeRect { rect, color, line_width } => {
            let style = Stroke { color: backend_color(color), width: device_len(*line_width, dpr) };
            let (from, to) = rect_corners(rect, dpr);
            backend.draw_rect(from, to, &style, false)
        }
        DrawOp::Line { from, to, color, line_width } => {
            let style = Stroke { color: backend_color(color), width: device_len(*line_width, dpr) };
            backend.draw_line(to_device(*from, dpr), to_device(*to, dpr), &style)
        }
        DrawOp::Path { runs, color, line_width } => {
            let style = Stroke { color: backend_color(color), width: device_len(*line_width, dpr) };
            // A single point has no length to stroke; its marker covers it.
            for run in runs.iter().filter(|r| r.len() > 1) {
                backend.draw_path(run.iter().map(|p| to_device(*p, dpr)), &style)?;
            }
            Ok(())
        }
        DrawOp::Circle { center, radius, color } => {
            let style = Stroke { color: backend_color(color), width: 1 };
            backend.draw_circle(to_device(*center, dpr), device_len(*radius, dpr), &style, true)
        }
        DrawOp::Text { text, at, style } => backend.draw_text(text, &plotters_text_style(style, dpr), to_device(*at, dpr)),
    }
}

fn rect_corners(rect: &Rect, dpr: f64) -> (BackendCoord, BackendCoord) {
    (
        to_device(Point::new(rect.x, rect.y), dpr),
        to_device(Point::new(rect.x + rect.width, rect.y + rect.height), dpr),
    )
}

impl DrawSurface for SvgSurface {
    fn size(&self) -> SurfaceSize {
        self.recorded.size()
    }

    fn clear(&mut self) {
        self.recorded.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.recorded.fill_rect(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64) {
        self.recorded.stroke_rect(rect, color, line_width);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str, line_width: f64) {
        self.recorded.stroke_line(from, to, color, line_width);
    }

    fn stroke_path(&mut self, runs: &[Vec<Point>], color: &str, line_width: f64) {
        self.recorded.stroke_path(runs, color, line_width);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.recorded.fill_circle(center, radius, color);
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.recorded.fill_text(text, at, style);
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        let dpr = self.size().device_pixel_ratio;
        let mut scratch = String::new();
        let backend = SVGBackend::with_string(&mut scratch, (1, 1));
        match backend.estimate_text_size(text, &plotters_text_style(style, dpr)) {
            Ok((width, _)) => width as f64 / dpr,
            Err(_) => estimate_text_width(text, style.font_size),
        }
    }
}
