use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error reading '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON candlestick data: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Malformed CSV candlestick data: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error("Invalid '{field}' in record {index}: '{value}' is not a finite decimal number")]
    InvalidField {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid close time in record {index}: {millis} ms is out of range")]
    InvalidTimestamp { index: usize, millis: i64 },

    #[error("Candlestick series is empty; at least one record is required")]
    EmptySeries,

    #[error("Failed to write report: {source}")]
    ReportError {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Wraps an I/O error that happened while reading `path`.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        EngineError::IoError {
            path: path.into(),
            source,
        }
    }
}
