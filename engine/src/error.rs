use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV writer error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error("Import failed: {0}")]
    InvalidImport(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Message suitable for showing to the user as a one-line notice.
    pub fn user_notice(&self) -> String {
        match self {
            EngineError::InvalidImport(_) | EngineError::SerializationError { .. } => {
                "Import failed. Make sure you selected a valid export JSON file.".to_string()
            }
            other => other.to_string(),
        }
    }
}
