// A surface that just remembers what was drawn, for inspecting renderer output.
use super::{estimate_text_width, DrawSurface, Point, Rect, SurfaceSize, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: String },
    StrokeRect { rect: Rect, color: String, line_width: f64 },
    Line { from: Point, to: Point, color: String, line_width: f64 },
    Path { runs: Vec<Vec<Point>>, color: String, line_width: f64 },
    Circle { center: Point, radius: f64, color: String },
    Text { text: String, at: Point, style: TextStyle },
}

pub struct RecordingSurface {
    size: SurfaceSize,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: SurfaceSize) -> Self {
        RecordingSurface { size, ops: Vec::new() }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn paths(&self) -> Vec<(&[Vec<Point>], &str, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Path { runs, color, line_width } => Some((runs.as_slice(), color.as_str(), *line_width)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Point, f64, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, radius, color } => Some((*center, *radius, color.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(DrawOp::FillRect { rect, color: color.to_string() });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64) {
        self.ops.push(DrawOp::StrokeRect { rect, color: color.to_string(), line_width });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &str, line_width: f64) {
        self.ops.push(DrawOp::Line { from, to, color: color.to_string(), line_width });
    }

    fn stroke_path(&mut self, runs: &[Vec<Point>], color: &str, line_width: f64) {
        self.ops.push(DrawOp::Path { runs: runs.to_vec(), color: color.to_string(), line_width });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ops.push(DrawOp::Circle { center, radius, color: color.to_string() });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), at, style: style.clone() });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f64 {
        estimate_text_width(text, style.font_size)
    }
}
