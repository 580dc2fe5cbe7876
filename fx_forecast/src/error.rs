//! Error types for the fx_forecast crate

use fx_math::MathError;
use thiserror::Error;

/// Custom error types for the fx_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// A required column is absent from the input header
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A date cell could not be read with the day-first convention
    #[error("Row {row}: cannot parse date '{value}' (expected day-first, e.g. 31/12/2023)")]
    DateParse { row: usize, value: String },

    /// The series is too short for the requested operation
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The model artifact is unreadable or of an unsupported format
    #[error("Model format error: {0}")]
    ModelFormat(String),

    /// Error from the smoothing recursions
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error from IO operations
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Error from the CSV reader
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
