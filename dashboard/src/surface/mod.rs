// 2D drawing surfaces the chart renderer paints on.
//
// All coordinates are logical pixels; a surface maps them to device pixels
// using its device pixel ratio.
pub mod color;
pub mod recording;
pub mod svg;

pub use color::parse_css_color;
pub use recording::{DrawOp, RecordingSurface};
pub use svg::{SvgError, SvgSurface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    pub font_family: String,
    pub font_size: f64,
    pub align: TextAlign,
}

/// Logical and device size of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl SurfaceSize {
    /// Size for a measured width: height is `width * aspect_ratio`, rounded.
    pub fn from_width(width: f64, aspect_ratio: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        SurfaceSize {
            width,
            height: (width * aspect_ratio).round(),
            device_pixel_ratio: dpr,
        }
    }

    pub fn device_width(&self) -> u32 {
        (self.width * self.device_pixel_ratio).floor() as u32
    }

    pub fn device_height(&self) -> u32 {
        (self.height * self.device_pixel_ratio).floor() as u32
    }
}

pub trait DrawSurface {
    fn size(&self) -> SurfaceSize;

    /// Discards everything drawn so far.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64);
    fn stroke_line(&mut self, from: Point, to: Point, color: &str, line_width: f64);
    /// One stroke made of several disconnected runs; the pen lifts between runs.
    fn stroke_path(&mut self, runs: &[Vec<Point>], color: &str, line_width: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
    /// Draws `text` with its baseline at `at.y`, anchored per `style.align`.
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);
    fn measure_text(&self, text: &str, style: &TextStyle) -> f64;
}

/// Advance width estimate for proportional UI fonts: 0.6 em per character.
/// Used where no font metrics are available.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.6
}
