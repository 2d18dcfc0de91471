// Services that run the user-facing operations against the entry store
pub mod tracker_service;

pub use tracker_service::{ChartData, EntryForm, ExportFormat, TrackerService};
