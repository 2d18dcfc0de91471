// Series derived from the entry collection for charting
pub mod scaler;

pub use scaler::{domain_of, normalize, resolve_metrics, scale_metric, scale_metrics};
