// Handler for exporting the full collection.
use std::fmt;
use std::str::FromStr;

use crate::data::entry_store::EntryStore;
use crate::data::interchange::{export_csv, export_json, CSV_EXPORT_FILE_NAME, EXPORT_FILE_NAME};
use crate::data::slot_storage::SlotStorage;
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Re-importable.
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => EXPORT_FILE_NAME,
            ExportFormat::Csv => CSV_EXPORT_FILE_NAME,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(EngineError::ConfigError(format!("unknown export format '{}'", other))),
        }
    }
}

pub fn handle_export<S: SlotStorage>(format: ExportFormat, store: &mut EntryStore<S>) -> EngineResult<String> {
    let entries = store.load();
    tracing::debug!(%format, count = entries.len(), "Exporting entries");
    match format {
        ExportFormat::Json => export_json(&entries),
        ExportFormat::Csv => export_csv(&entries),
    }
}
