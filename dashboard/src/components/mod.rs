// Dashboard components
pub mod chart;
pub mod latest_panel;

pub use chart::{render_svg, ChartRenderer};
pub use latest_panel::render_latest;
