// Engine library root: entry storage, interchange, range filtering and
// per-metric scaling, plus the service that ties them together.

pub mod config;
pub mod data;
pub mod error;
pub mod series;
pub mod services;

pub use error::{EngineError, EngineResult};
